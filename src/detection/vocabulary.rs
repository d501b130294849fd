use serde::Serialize;

/// Known repertoire export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SourceFormat {
    /// 10x Genomics contig annotations
    #[serde(rename = "10x")]
    TenX,
    /// Adaptive immunoSEQ v2 export
    #[serde(rename = "adaptive_v2")]
    AdaptiveV2,
    /// Adaptive immunoSEQ v4 export
    #[serde(rename = "adaptive_v4")]
    AdaptiveV4,
    /// AIRR community rearrangement schema
    #[serde(rename = "airr")]
    Airr,
}

impl SourceFormat {
    /// Every registered format, in detection order
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::TenX,
        SourceFormat::AdaptiveV2,
        SourceFormat::AdaptiveV4,
        SourceFormat::Airr,
    ];

    /// Stable identifier, as printed and accepted on the command line
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::TenX => "10x",
            Self::AdaptiveV2 => "adaptive_v2",
            Self::AdaptiveV4 => "adaptive_v4",
            Self::Airr => "airr",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TenX => "10x Genomics contig annotations",
            Self::AdaptiveV2 => "Adaptive immunoSEQ v2",
            Self::AdaptiveV4 => "Adaptive immunoSEQ v4",
            Self::Airr => "AIRR rearrangement",
        }
    }

    /// Parse a format identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Column names unique to each format
#[must_use]
pub fn vocabulary_for(format: SourceFormat) -> &'static [&'static str] {
    match format {
        SourceFormat::TenX => TENX_COLUMNS,
        SourceFormat::AdaptiveV2 => ADAPTIVE_V2_COLUMNS,
        SourceFormat::AdaptiveV4 => ADAPTIVE_V4_COLUMNS,
        SourceFormat::Airr => AIRR_COLUMNS,
    }
}

// https://support.10xgenomics.com/single-cell-vdj/software/pipelines/latest/output/annotation
const TENX_COLUMNS: &[&str] = &[
    "barcode",
    "is_cell",
    "contig_id",
    "high_confidence",
    "length",
    "chain",
    "c_gene",
    "full_length",
    "fwr1_nt",
    "cdr1_nt",
    "fwr2_nt",
    "cdr2_nt",
    "fwr3_nt",
    "cdr3_nt",
    "fwr4_nt",
    "reads",
    "umis",
    "raw_clonotype_id",
    "raw_consensus_id",
    "exact_subclonotype_id",
];

// immunoSEQ Analyzer manual, v2 sample export
const ADAPTIVE_V2_COLUMNS: &[&str] = &[
    "nucleotide",
    "aminoAcid",
    "count (templates/reads)",
    "frequencyCount (%)",
    "cdr3Length",
    "vMaxResolved",
    "vFamilyName",
    "vGeneName",
    "vGeneAllele",
    "vFamilyTies",
    "vGeneNameTies",
    "vGeneAlleleTies",
    "dMaxResolved",
    "dFamilyName",
    "dGeneName",
    "dGeneAllele",
    "dFamilyTies",
    "dGeneNameTies",
    "dGeneAlleleTies",
    "jMaxResolved",
    "jFamilyName",
    "jGeneName",
    "jGeneAllele",
    "jFamilyTies",
    "jGeneNameTies",
    "jGeneAlleleTies",
    "vDeletion",
    "n1Insertion",
    "d5Deletion",
    "d3Deletion",
    "n2Insertion",
    "jDeletion",
    "vIndex",
    "n1Index",
    "dIndex",
    "n2Index",
    "jIndex",
    "estimatedNumberGenomes",
    "sequenceStatus",
    "cloneResolved",
    "vOrphon",
    "dOrphon",
    "jOrphon",
    "vFunction",
    "dFunction",
    "jFunction",
    "fractionNucleated",
    "vAlignLength",
    "vAlignSubstitutionCount",
    "vAlignSubstitutionIndexes",
    "vAlignSubstitutionGeneThreePrimeIndexes",
    "vSeqWithMutations",
];

// immunoSEQ data export tech note, v4 sample export
const ADAPTIVE_V4_COLUMNS: &[&str] = &[
    "rearrangement",
    "extended_rearrangement",
    "bio_identity",
    "amino_acid",
    "templates",
    "frame_type",
    "rearrangement_type",
    "productive_frequency",
    "cdr1_start_index",
    "cdr1_rearrangement_length",
    "cdr2_start_index",
    "cdr2_rearrangement_length",
    "cdr3_start_index",
    "cdr3_length",
    "v_index",
    "n1_index",
    "d_index",
    "n2_index",
    "j_index",
    "v_deletions",
    "n2_insertions",
    "d3_deletions",
    "d5_deletions",
    "n1_insertions",
    "j_deletions",
    "chosen_j_allele",
    "chosen_j_family",
    "chosen_j_gene",
    "chosen_v_allele",
    "chosen_v_family",
    "chosen_v_gene",
    "d_allele",
    "d_allele_ties",
    "d_family",
    "d_family_ties",
    "d_gene_ties",
    "d_resolved",
    "j_allele",
    "j_allele_ties",
    "j_family",
    "j_family_ties",
    "j_gene_ties",
    "j_resolved",
    "v_allele",
    "v_allele_ties",
    "v_family",
    "v_family_ties",
    "v_gene_ties",
    "v_resolved",
    "Frequency",
    "Reads",
    "Rearrangement",
    "v_shm_count",
    "v_shm_indexes",
    "Antibody",
];

// AIRR Rearrangement schema fields, as written by common annotators
const AIRR_COLUMNS: &[&str] = &[
    "sequence_id",
    "sequence",
    "sequence_aa",
    "rev_comp",
    "vj_in_frame",
    "stop_codon",
    "complete_vdj",
    "locus",
    "v_call",
    "d_call",
    "d2_call",
    "j_call",
    "c_call",
    "sequence_alignment",
    "sequence_alignment_aa",
    "germline_alignment",
    "germline_alignment_aa",
    "junction",
    "junction_aa",
    "np1",
    "np1_aa",
    "np2",
    "np2_aa",
    "np3",
    "np3_aa",
    "cdr1_aa",
    "cdr2_aa",
    "cdr3_aa",
    "fwr1_aa",
    "fwr2_aa",
    "fwr3_aa",
    "fwr4_aa",
    "v_score",
    "v_identity",
    "v_support",
    "v_cigar",
    "d_score",
    "d_identity",
    "d_support",
    "d_cigar",
    "d2_score",
    "d2_identity",
    "d2_support",
    "d2_cigar",
    "j_score",
    "j_identity",
    "j_support",
    "j_cigar",
    "c_score",
    "c_identity",
    "c_support",
    "c_cigar",
    "v_sequence_start",
    "v_sequence_end",
    "v_germline_start",
    "v_germline_end",
    "v_alignment_start",
    "v_alignment_end",
    "d_sequence_start",
    "d_sequence_end",
    "d_germline_start",
    "d_germline_end",
    "d_alignment_start",
    "d_alignment_end",
    "d2_sequence_start",
    "d2_sequence_end",
    "d2_germline_start",
    "d2_germline_end",
    "d2_alignment_start",
    "d2_alignment_end",
    "j_sequence_start",
    "j_sequence_end",
    "j_germline_start",
    "j_germline_end",
    "j_alignment_start",
    "j_alignment_end",
    "cdr1_start",
    "cdr1_end",
    "cdr2_start",
    "cdr2_end",
    "cdr3_start",
    "cdr3_end",
    "fwr1_start",
    "fwr1_end",
    "fwr2_start",
    "fwr2_end",
    "fwr3_start",
    "fwr3_end",
    "fwr4_start",
    "fwr4_end",
    "v_sequence_alignment",
    "v_sequence_alignment_aa",
    "d_sequence_alignment",
    "d_sequence_alignment_aa",
    "d2_sequence_alignment",
    "d2_sequence_alignment_aa",
    "j_sequence_alignment",
    "j_sequence_alignment_aa",
    "c_sequence_alignment",
    "c_sequence_alignment_aa",
    "v_germline_alignment",
    "v_germline_alignment_aa",
    "d_germline_alignment",
    "d_germline_alignment_aa",
    "d2_germline_alignment",
    "d2_germline_alignment_aa",
    "j_germline_alignment",
    "j_germline_alignment_aa",
    "c_germline_alignment",
    "c_germline_alignment_aa",
    "junction_length",
    "junction_aa_length",
    "np1_length",
    "np2_length",
    "np3_length",
    "n1_length",
    "n2_length",
    "n3_length",
    "p3v_length",
    "p5d_length",
    "p3d_length",
    "p5d2_length",
    "p3d2_length",
    "p5j_length",
    "consensus_count",
    "duplicate_count",
    "cell_id",
    "clone_id",
    "rearrangement_id",
    "repertoire_id",
    "sample_processing_id",
    "data_processing_id",
    "germline_database",
    "rearrangement_set_id",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabularies_are_populated() {
        for format in SourceFormat::ALL {
            assert!(!vocabulary_for(format).is_empty(), "{format} has no columns");
        }
    }

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        for format in SourceFormat::ALL {
            let columns = vocabulary_for(format);
            let unique: HashSet<_> = columns.iter().collect();
            assert_eq!(unique.len(), columns.len(), "{format} repeats a column");
        }
    }

    #[test]
    fn test_vocabularies_are_disjoint() {
        for (i, a) in SourceFormat::ALL.iter().enumerate() {
            let a_cols: HashSet<_> = vocabulary_for(*a).iter().collect();
            for b in &SourceFormat::ALL[i + 1..] {
                let shared: Vec<_> = vocabulary_for(*b)
                    .iter()
                    .filter(|c| a_cols.contains(c))
                    .collect();
                assert!(shared.is_empty(), "{a} and {b} share {shared:?}");
            }
        }
    }

    #[test]
    fn test_from_id() {
        for format in SourceFormat::ALL {
            assert_eq!(SourceFormat::from_id(format.id()), Some(format));
        }
        assert_eq!(SourceFormat::from_id("adaptive_v3"), None);
    }

    #[test]
    fn test_serialized_id() {
        let json = serde_json::to_string(&SourceFormat::TenX).unwrap();
        assert_eq!(json, "\"10x\"");
    }
}

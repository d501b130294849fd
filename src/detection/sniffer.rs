use std::collections::HashSet;

use tracing::debug;

use crate::detection::vocabulary::{vocabulary_for, SourceFormat};

/// Errors that can occur during format detection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    #[error("Input file does not have any standard headers, please convert by hand")]
    UnrecognizedFormat,
    #[error(
        "Found column names from multiple formats ({}); input file is not a standard format, please convert by hand",
        join_ids(candidates)
    )]
    AmbiguousFormat { candidates: Vec<SourceFormat> },
}

fn join_ids(formats: &[SourceFormat]) -> String {
    formats
        .iter()
        .map(|f| f.id())
        .collect::<Vec<_>>()
        .join(", ")
}

/// All formats sharing at least one column name with `header`, in registry order
#[must_use]
#[allow(clippy::implicit_hasher)] // Default hasher is fine for header sets
pub fn matching_formats(header: &HashSet<&str>) -> Vec<SourceFormat> {
    SourceFormat::ALL
        .into_iter()
        .filter(|format| {
            vocabulary_for(*format)
                .iter()
                .any(|column| header.contains(column))
        })
        .collect()
}

/// Detect the source format from a header row.
///
/// A single shared column name is enough for a format to match. The header
/// must match exactly one format.
///
/// # Errors
///
/// Returns `DetectionError::UnrecognizedFormat` if no format matches, or
/// `DetectionError::AmbiguousFormat` listing every candidate if more than one does.
pub fn detect<'a>(header: impl IntoIterator<Item = &'a str>) -> Result<SourceFormat, DetectionError> {
    let header: HashSet<&str> = header.into_iter().collect();
    let mut candidates = matching_formats(&header);

    debug!(
        "Header of {} columns matched formats: [{}]",
        header.len(),
        join_ids(&candidates)
    );

    match candidates.len() {
        0 => Err(DetectionError::UnrecognizedFormat),
        1 => Ok(candidates.remove(0)),
        _ => Err(DetectionError::AmbiguousFormat { candidates }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_adaptive_v4() {
        let header = ["bio_identity", "productive_frequency", "templates", "rearrangement"];
        assert_eq!(detect(header), Ok(SourceFormat::AdaptiveV4));
    }

    #[test]
    fn test_detect_airr() {
        let header = ["sequence_id", "v_call", "j_call", "junction", "junction_aa"];
        assert_eq!(detect(header), Ok(SourceFormat::Airr));
    }

    #[test]
    fn test_detect_tenx() {
        let header = ["barcode", "contig_id", "chain", "v_gene", "j_gene", "cdr3", "cdr3_nt"];
        assert_eq!(detect(header), Ok(SourceFormat::TenX));
    }

    #[test]
    fn test_detect_adaptive_v2() {
        let header = ["nucleotide", "aminoAcid", "vGeneName"];
        assert_eq!(detect(header), Ok(SourceFormat::AdaptiveV2));
    }

    #[test]
    fn test_single_shared_column_is_enough() {
        let header = ["my_id", "notes", "umis"];
        assert_eq!(detect(header), Ok(SourceFormat::TenX));
    }

    #[test]
    fn test_every_vocabulary_detects_itself() {
        for format in SourceFormat::ALL {
            let header = vocabulary_for(format).iter().copied();
            assert_eq!(detect(header), Ok(format));
        }
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(
            detect(["foo", "bar"]),
            Err(DetectionError::UnrecognizedFormat)
        );
        assert_eq!(
            detect(std::iter::empty()),
            Err(DetectionError::UnrecognizedFormat)
        );
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        // "reads" is 10x, "Reads" is Adaptive v4
        assert_eq!(detect(["reads"]), Ok(SourceFormat::TenX));
        assert_eq!(detect(["Reads"]), Ok(SourceFormat::AdaptiveV4));
        assert_eq!(detect(["READS"]), Err(DetectionError::UnrecognizedFormat));
    }

    #[test]
    fn test_ambiguous_names_all_candidates() {
        let header = ["bio_identity", "v_call", "barcode"];
        let err = detect(header).unwrap_err();
        assert_eq!(
            err,
            DetectionError::AmbiguousFormat {
                candidates: vec![
                    SourceFormat::TenX,
                    SourceFormat::AdaptiveV4,
                    SourceFormat::Airr
                ]
            }
        );
        let message = err.to_string();
        assert!(message.contains("10x, adaptive_v4, airr"));
    }

    #[test]
    fn test_matching_formats() {
        let header: HashSet<&str> = ["templates", "junction_aa"].into_iter().collect();
        assert_eq!(
            matching_formats(&header),
            vec![SourceFormat::AdaptiveV4, SourceFormat::Airr]
        );
    }
}

//! AIRR rearrangement to canonical conversion.
//!
//! AIRR gene calls are already IMGT names, so conversion is a column rename
//! plus allele normalization: the `*00` placeholder becomes `*01`.

use crate::convert::{
    extra_cells, output_columns, require_column, require_extra_columns, ConvertError,
    ConvertOptions, Conversion,
};
use crate::core::table::{CanonicalTable, Cell, RawTable, Value};
use crate::detection::SourceFormat;
use crate::utils::validation::is_valid_cdr3;

pub const JUNCTION_AA_COLUMN: &str = "junction_aa";
pub const V_CALL_COLUMN: &str = "v_call";
pub const J_CALL_COLUMN: &str = "j_call";
pub const JUNCTION_COLUMN: &str = "junction";

/// Rewrite every `*00` allele to `*01`.
///
/// ```
/// use tcr_converter::convert::airr::normalize_allele;
///
/// assert_eq!(normalize_allele("TRBV7-2*00"), "TRBV7-2*01");
/// assert_eq!(normalize_allele("TRBV7-2*02"), "TRBV7-2*02");
/// ```
#[must_use]
pub fn normalize_allele(call: &str) -> String {
    call.replace("*00", "*01")
}

fn normalize_call(cell: &Cell) -> Cell {
    match cell {
        Some(Value::Text(call)) => Some(Value::Text(normalize_allele(call))),
        other => other.clone(),
    }
}

/// Convert an AIRR rearrangement table
///
/// # Errors
///
/// Returns `ConvertError::MissingColumn` if `junction_aa`, `v_call`, `j_call`,
/// `junction`, or a requested extra column is missing, or
/// `ConvertError::DuplicateColumn` if an extra column is named like an output column.
pub fn convert(table: &RawTable, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let format = SourceFormat::Airr;
    let junction_aa_idx = require_column(table, format, JUNCTION_AA_COLUMN)?;
    let v_call_idx = require_column(table, format, V_CALL_COLUMN)?;
    let j_call_idx = require_column(table, format, J_CALL_COLUMN)?;
    let junction_idx = require_column(table, format, JUNCTION_COLUMN)?;
    let extras = require_extra_columns(table, format, options)?;

    let schema = options.chain.schema();
    let mut output = CanonicalTable::new(output_columns(&schema.columns(), options)?);

    let mut dropped_rows = 0;

    for row in table.rows() {
        if !is_valid_cdr3(row[junction_aa_idx].as_ref()) {
            dropped_rows += 1;
            continue;
        }

        let mut cells = vec![
            row[junction_aa_idx].clone(),
            normalize_call(&row[v_call_idx]),
            normalize_call(&row[j_call_idx]),
            row[junction_idx].clone(),
        ];
        cells.extend(extra_cells(row, &extras));
        output.push_row(cells);
    }

    Ok(Conversion {
        table: output,
        dropped_rows,
        filtered_rows: 0,
        unresolved_genes: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Chain, Organism};

    const HEADER: [&str; 6] = [
        "sequence_id",
        "junction",
        "junction_aa",
        "v_call",
        "j_call",
        "duplicate_count",
    ];

    fn row(id: &str, junction_aa: &str, v_call: &str, j_call: &str) -> Vec<Cell> {
        [id, "TGTGCCAGCAGC", junction_aa, v_call, j_call, "3"]
            .into_iter()
            .map(|s| (!s.is_empty()).then(|| Value::text(s)))
            .collect()
    }

    fn beta() -> ConvertOptions {
        ConvertOptions::new(Chain::Beta, Organism::Human)
    }

    #[test]
    fn test_normalize_allele() {
        assert_eq!(normalize_allele("TRBV7-2*00"), "TRBV7-2*01");
        assert_eq!(normalize_allele("TRBV7-2*02"), "TRBV7-2*02");
        assert_eq!(normalize_allele("TRBV7-2"), "TRBV7-2");
        assert_eq!(
            normalize_allele("TRBV6-5*00,TRBV6-6*00"),
            "TRBV6-5*01,TRBV6-6*01"
        );
    }

    #[test]
    fn test_convert_renames_and_normalizes() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CASSLGTDTQYF", "TRBV7-2*00", "TRBJ2-3*02"));

        let conversion = convert(&raw, &beta()).unwrap();
        let out = &conversion.table;
        assert_eq!(
            out.columns(),
            ["cdr3_b_aa", "v_b_gene", "j_b_gene", "cdr3_b_nucseq"]
        );
        assert_eq!(out.get(0, "cdr3_b_aa"), Some(&Value::text("CASSLGTDTQYF")));
        assert_eq!(out.get(0, "v_b_gene"), Some(&Value::text("TRBV7-2*01")));
        assert_eq!(out.get(0, "j_b_gene"), Some(&Value::text("TRBJ2-3*02")));
        assert_eq!(out.get(0, "cdr3_b_nucseq"), Some(&Value::text("TGTGCCAGCAGC")));
    }

    #[test]
    fn test_no_frequency_or_count_columns() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CASSF", "TRBV7-2*01", "TRBJ2-3*01"));

        let conversion = convert(&raw, &beta()).unwrap();
        assert!(conversion.table.column_index("productive_frequency").is_none());
        assert!(conversion.table.column_index("count").is_none());
    }

    #[test]
    fn test_extra_columns_follow_schema() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CASSF", "TRBV7-2*01", "TRBJ2-3*01"));

        let options = beta().with_extra_columns(["duplicate_count", "sequence_id"]);
        let conversion = convert(&raw, &options).unwrap();
        assert_eq!(
            conversion.table.columns(),
            [
                "cdr3_b_aa",
                "v_b_gene",
                "j_b_gene",
                "cdr3_b_nucseq",
                "duplicate_count",
                "sequence_id"
            ]
        );
        assert_eq!(conversion.table.get(0, "sequence_id"), Some(&Value::text("s1")));
    }

    #[test]
    fn test_invalid_cdr3_dropped() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CASSF", "TRBV7-2*01", "TRBJ2-3*01"));
        raw.push_row(row("s2", "", "TRBV7-2*01", "TRBJ2-3*01"));
        raw.push_row(row("s3", "CASS_F", "TRBV7-2*01", "TRBJ2-3*01"));
        raw.push_row(row("s4", "CATSRDF", "TRBV15*00", "TRBJ1-1*00"));

        let options = beta().with_extra_columns(["sequence_id"]);
        let conversion = convert(&raw, &options).unwrap();
        assert_eq!(conversion.table.len(), 2);
        assert_eq!(conversion.dropped_rows, 2);
        assert_eq!(conversion.table.get(1, "sequence_id"), Some(&Value::text("s4")));
        assert_eq!(conversion.table.get(1, "j_b_gene"), Some(&Value::text("TRBJ1-1*01")));
    }

    #[test]
    fn test_absent_calls_stay_absent() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CASSF", "", ""));

        let conversion = convert(&raw, &beta()).unwrap();
        assert_eq!(conversion.table.len(), 1);
        assert_eq!(conversion.table.get(0, "v_b_gene"), None);
        assert_eq!(conversion.table.get(0, "j_b_gene"), None);
    }

    #[test]
    fn test_delta_chain() {
        let mut raw = RawTable::new(HEADER);
        raw.push_row(row("s1", "CALGELF", "TRDV2*00", "TRDJ1*01"));

        let options = ConvertOptions::new(Chain::Delta, Organism::Human);
        let conversion = convert(&raw, &options).unwrap();
        assert_eq!(conversion.table.get(0, "v_d_gene"), Some(&Value::text("TRDV2*01")));
    }

    #[test]
    fn test_missing_column() {
        let raw = RawTable::new(["sequence_id", "junction_aa", "v_call", "j_call"]);
        let err = convert(&raw, &beta()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::MissingColumn {
                format: SourceFormat::Airr,
                column: JUNCTION_COLUMN.to_string()
            }
        );
    }
}

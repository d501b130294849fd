//! 10x Genomics contig annotations to canonical conversion.
//!
//! Annotations list one contig per row with the locus in `chain`. Only rows of
//! the requested chain are converted. 10x reports gene names without an allele,
//! so `*01` is appended.

use crate::convert::{
    extra_cells, output_columns, require_column, require_extra_columns, ConvertError,
    ConvertOptions, Conversion,
};
use crate::core::table::{CanonicalTable, Cell, RawTable, Value};
use crate::detection::SourceFormat;
use crate::utils::validation::is_valid_cdr3;

pub const CHAIN_COLUMN: &str = "chain";
pub const V_GENE_COLUMN: &str = "v_gene";
pub const J_GENE_COLUMN: &str = "j_gene";
pub const CDR3_COLUMN: &str = "cdr3";
pub const CDR3_NT_COLUMN: &str = "cdr3_nt";

/// Placeholder 10x writes for a missing gene call
const NO_CALL: &str = "None";

/// Append the first-allele suffix to a bare gene name.
///
/// Names that already carry an allele are returned unchanged; `None` and empty
/// names are absent.
#[must_use]
pub fn with_default_allele(gene: &str) -> Option<String> {
    let gene = gene.trim();
    if gene.is_empty() || gene == NO_CALL {
        None
    } else if gene.contains('*') {
        Some(gene.to_string())
    } else {
        Some(format!("{gene}*01"))
    }
}

fn gene_cell(cell: &Cell) -> Cell {
    cell.as_ref()
        .and_then(Value::as_text)
        .and_then(with_default_allele)
        .map(Value::Text)
}

/// Convert a 10x contig annotation table for one chain
///
/// # Errors
///
/// Returns `ConvertError::MissingColumn` if `chain`, `v_gene`, `j_gene`, `cdr3`,
/// `cdr3_nt`, or a requested extra column is missing, or
/// `ConvertError::DuplicateColumn` if an extra column is named like an output column.
pub fn convert(table: &RawTable, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let format = SourceFormat::TenX;
    let chain_idx = require_column(table, format, CHAIN_COLUMN)?;
    let cdr3_idx = require_column(table, format, CDR3_COLUMN)?;
    let v_gene_idx = require_column(table, format, V_GENE_COLUMN)?;
    let j_gene_idx = require_column(table, format, J_GENE_COLUMN)?;
    let cdr3_nt_idx = require_column(table, format, CDR3_NT_COLUMN)?;
    let extras = require_extra_columns(table, format, options)?;

    let locus = options.chain.locus();
    let schema = options.chain.schema();
    let mut output = CanonicalTable::new(output_columns(&schema.columns(), options)?);

    let mut dropped_rows = 0;
    let mut filtered_rows = 0;

    for row in table.rows() {
        let same_chain = row[chain_idx]
            .as_ref()
            .and_then(Value::as_text)
            .is_some_and(|c| c.trim() == locus);
        if !same_chain {
            filtered_rows += 1;
            continue;
        }
        if !is_valid_cdr3(row[cdr3_idx].as_ref()) {
            dropped_rows += 1;
            continue;
        }

        let mut cells = vec![
            row[cdr3_idx].clone(),
            gene_cell(&row[v_gene_idx]),
            gene_cell(&row[j_gene_idx]),
            row[cdr3_nt_idx].clone(),
        ];
        cells.extend(extra_cells(row, &extras));
        output.push_row(cells);
    }

    Ok(Conversion {
        table: output,
        dropped_rows,
        filtered_rows,
        unresolved_genes: 0,
    })
}

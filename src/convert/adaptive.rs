//! Adaptive immunoSEQ v4 to canonical conversion.
//!
//! The v4 export packs CDR3, V gene and J gene into one `bio_identity` field
//! (`CASSLGQGAETQYF+TCRBV07-02+TCRBJ02-01`). Gene names are Adaptive names and
//! are resolved through a [`GeneLookup`]. Output carries the four chain columns,
//! then `productive_frequency` and `count`, then any extra columns.

use crate::convert::{
    extra_cells, output_columns, require_column, require_extra_columns, ConvertError,
    ConvertOptions, Conversion,
};
use crate::core::table::{CanonicalTable, RawTable, Value};
use crate::detection::SourceFormat;
use crate::genes::GeneLookup;
use crate::utils::validation::is_valid_cdr3;

pub const BIO_IDENTITY_COLUMN: &str = "bio_identity";
pub const FREQUENCY_COLUMN: &str = "productive_frequency";
pub const TEMPLATES_COLUMN: &str = "templates";
pub const REARRANGEMENT_COLUMN: &str = "rearrangement";

/// Output name of the numeric templates column
pub const COUNT_COLUMN: &str = "count";

/// The parts of a `bio_identity` value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BioIdentity<'a> {
    pub cdr3: Option<&'a str>,
    pub v_gene: Option<&'a str>,
    pub j_gene: Option<&'a str>,
}

/// Split a `cdr3+v_gene+j_gene` identity.
///
/// The first part is always taken as the CDR3. V and J are only set when the
/// value has exactly three parts. Empty parts are absent.
#[must_use]
pub fn split_bio_identity(value: &str) -> BioIdentity<'_> {
    fn non_empty(s: &&str) -> bool {
        !s.is_empty()
    }

    let parts: Vec<&str> = value.split('+').collect();

    let cdr3 = parts.first().copied().filter(non_empty);
    match parts.as_slice() {
        [_, v_gene, j_gene] => BioIdentity {
            cdr3,
            v_gene: Some(*v_gene).filter(non_empty),
            j_gene: Some(*j_gene).filter(non_empty),
        },
        _ => BioIdentity {
            cdr3,
            v_gene: None,
            j_gene: None,
        },
    }
}

/// Convert an Adaptive v4 table
///
/// # Errors
///
/// Returns `ConvertError::MissingColumn` if `bio_identity`, `productive_frequency`,
/// `templates`, `rearrangement`, or a requested extra column is missing, or
/// `ConvertError::DuplicateColumn` if an extra column is named like an output column.
pub fn convert(
    table: &RawTable,
    options: &ConvertOptions,
    genes: &dyn GeneLookup,
) -> Result<Conversion, ConvertError> {
    let format = SourceFormat::AdaptiveV4;
    let identity_idx = require_column(table, format, BIO_IDENTITY_COLUMN)?;
    let frequency_idx = require_column(table, format, FREQUENCY_COLUMN)?;
    let templates_idx = require_column(table, format, TEMPLATES_COLUMN)?;
    let rearrangement_idx = require_column(table, format, REARRANGEMENT_COLUMN)?;
    let extras = require_extra_columns(table, format, options)?;

    let schema = options.chain.schema();
    let mut base: Vec<&str> = schema.columns().to_vec();
    base.extend([FREQUENCY_COLUMN, COUNT_COLUMN]);
    let mut output = CanonicalTable::new(output_columns(&base, options)?);

    let mut dropped_rows = 0;
    let mut unresolved_genes = 0;

    for row in table.rows() {
        let identity = row[identity_idx]
            .as_ref()
            .and_then(Value::as_text)
            .map(split_bio_identity)
            .unwrap_or_default();

        let cdr3 = identity.cdr3.map(Value::text);
        if !is_valid_cdr3(cdr3.as_ref()) {
            dropped_rows += 1;
            continue;
        }

        let mut resolve = |name: Option<&str>| {
            let name = name?;
            let resolved = genes.lookup(options.organism, name);
            if resolved.is_none() {
                unresolved_genes += 1;
            }
            resolved.map(Value::text)
        };
        let v_gene = resolve(identity.v_gene);
        let j_gene = resolve(identity.j_gene);

        let numeric = |idx: usize| {
            row[idx]
                .as_ref()
                .and_then(Value::to_number)
                .map(Value::Number)
        };

        let mut cells = vec![
            cdr3,
            v_gene,
            j_gene,
            row[rearrangement_idx].clone(),
            numeric(frequency_idx),
            numeric(templates_idx),
        ];
        cells.extend(extra_cells(row, &extras));
        output.push_row(cells);
    }

    Ok(Conversion {
        table: output,
        dropped_rows,
        filtered_rows: 0,
        unresolved_genes,
    })
}

//! Conversion of detected formats to the canonical IMGT-style schema.
//!
//! Each converter is a pure transform from a [`RawTable`] to a new
//! [`CanonicalTable`]:
//!
//! - [`adaptive`]: Adaptive immunoSEQ v4 (`bio_identity`, `productive_frequency`, ...)
//! - [`airr`]: AIRR rearrangement (`junction_aa`, `v_call`, `j_call`, `junction`)
//! - [`tenx`]: 10x Genomics contig annotations (`chain`, `v_gene`, `cdr3`, ...)
//!
//! Structural problems (a required column is missing) fail the conversion.
//! Row-level problems never do: rows with an invalid CDR3 are dropped, and
//! unresolvable genes or non-numeric counts become absent cells.
//!
//! ## Example
//!
//! ```rust
//! use tcr_converter::convert::{convert, ConvertOptions};
//! use tcr_converter::core::table::{Table, Value};
//! use tcr_converter::core::types::{Chain, Organism};
//! use tcr_converter::detection::SourceFormat;
//! use tcr_converter::genes::GeneTable;
//!
//! let mut raw = Table::new(["sequence_id", "junction_aa", "v_call", "j_call", "junction"]);
//! raw.push_row(vec![
//!     Some(Value::text("seq1")),
//!     Some(Value::text("CASSLGTDTQYF")),
//!     Some(Value::text("TRBV7-2*00")),
//!     Some(Value::text("TRBJ2-3*01")),
//!     Some(Value::text("TGTGCCAGCAGC")),
//! ]);
//!
//! let genes = GeneTable::load_embedded().unwrap();
//! let options = ConvertOptions::new(Chain::Beta, Organism::Human);
//! let conversion = convert(SourceFormat::Airr, &raw, &options, &genes).unwrap();
//!
//! assert_eq!(conversion.table.get(0, "v_b_gene"), Some(&Value::text("TRBV7-2*01")));
//! ```

pub mod adaptive;
pub mod airr;
pub mod tenx;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::table::{CanonicalTable, Cell, RawTable};
use crate::core::types::{Chain, Organism};
use crate::detection::SourceFormat;
use crate::genes::GeneLookup;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Required column '{column}' is missing from {format} input")]
    MissingColumn {
        format: SourceFormat,
        column: String,
    },

    #[error("Extra column '{column}' has the same name as an output column")]
    DuplicateColumn { column: String },

    #[error("Conversion from {0} is not supported; only adaptive_v4, airr and 10x can be converted")]
    UnsupportedFormat(SourceFormat),
}

/// Parameters shared by all converters
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub chain: Chain,
    pub organism: Organism,
    /// Source columns copied verbatim after the canonical columns
    pub extra_columns: Vec<String>,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(chain: Chain, organism: Organism) -> Self {
        Self {
            chain,
            organism,
            extra_columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extra_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.extra_columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub table: CanonicalTable,
    /// Input rows excluded from the output for failing validation
    pub dropped_rows: usize,
    /// Input rows skipped because they belong to another chain
    pub filtered_rows: usize,
    /// Gene names on retained rows that could not be resolved
    pub unresolved_genes: usize,
}

/// Convert a loaded table from a detected format to the canonical schema
///
/// # Errors
///
/// Returns `ConvertError::MissingColumn` if a column the converter needs is not
/// in the input, or `ConvertError::UnsupportedFormat` for formats without a converter.
pub fn convert(
    format: SourceFormat,
    table: &RawTable,
    options: &ConvertOptions,
    genes: &dyn GeneLookup,
) -> Result<Conversion, ConvertError> {
    debug!(
        "Converting {} rows from {format} as {} chain",
        table.len(),
        options.chain
    );

    let conversion = match format {
        SourceFormat::AdaptiveV4 => adaptive::convert(table, options, genes)?,
        SourceFormat::Airr => airr::convert(table, options)?,
        SourceFormat::TenX => tenx::convert(table, options)?,
        SourceFormat::AdaptiveV2 => return Err(ConvertError::UnsupportedFormat(format)),
    };

    if conversion.filtered_rows > 0 {
        debug!(
            "Skipped {} rows that are not {} chains",
            conversion.filtered_rows, options.chain
        );
    }
    if conversion.dropped_rows > 0 {
        warn!(
            "Dropped {} of {} rows from {format} input",
            conversion.dropped_rows,
            table.len()
        );
    }
    if conversion.unresolved_genes > 0 {
        warn!(
            "{} gene names could not be resolved for {}",
            conversion.unresolved_genes, options.organism
        );
    }

    Ok(conversion)
}

/// Index of a column the converter cannot run without
pub(crate) fn require_column(
    table: &RawTable,
    format: SourceFormat,
    column: &str,
) -> Result<usize, ConvertError> {
    table
        .column_index(column)
        .ok_or_else(|| ConvertError::MissingColumn {
            format,
            column: column.to_string(),
        })
}

/// Indexes of the requested pass-through columns, in request order
pub(crate) fn require_extra_columns(
    table: &RawTable,
    format: SourceFormat,
    options: &ConvertOptions,
) -> Result<Vec<usize>, ConvertError> {
    options
        .extra_columns
        .iter()
        .map(|column| require_column(table, format, column))
        .collect()
}

/// Output header: `base` followed by the requested extra columns
pub(crate) fn output_columns<'a>(
    base: &[&'a str],
    options: &'a ConvertOptions,
) -> Result<Vec<&'a str>, ConvertError> {
    let mut columns = base.to_vec();
    for extra in &options.extra_columns {
        if columns.contains(&extra.as_str()) {
            return Err(ConvertError::DuplicateColumn {
                column: extra.clone(),
            });
        }
        columns.push(extra.as_str());
    }
    Ok(columns)
}

/// Copy the pass-through cells of one row
pub(crate) fn extra_cells<'a>(row: &'a [Cell], extras: &'a [usize]) -> impl Iterator<Item = Cell> + 'a {
    extras.iter().map(move |&i| row[i].clone())
}

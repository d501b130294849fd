//! # tcr-converter
//!
//! A library for converting immune repertoire sequencing exports to a single
//! IMGT-style schema.
//!
//! Repertoire data arrives in many vendor layouts: Adaptive immunoSEQ exports,
//! the AIRR community rearrangement schema, 10x Genomics contig annotations.
//! Downstream tools expect one set of columns (`cdr3_b_aa`, `v_b_gene`,
//! `j_b_gene`, `cdr3_b_nucseq`, ...) with IMGT gene names.
//!
//! `tcr-converter` detects the source format from the column headers alone and
//! rewrites the table into the canonical schema.
//!
//! ## Features
//!
//! - **Header-based detection**: each format is recognized by columns unique to it
//! - **Conservative matching**: headers that look like several formats are rejected
//! - **Gene name normalization**: Adaptive names resolved to IMGT, AIRR `*00` alleles mapped to `*01`
//! - **CDR3 validation**: rows whose CDR3 is not a standard amino acid sequence are dropped
//!
//! ## Example
//!
//! ```rust,no_run
//! use tcr_converter::convert::{convert, ConvertOptions};
//! use tcr_converter::core::types::{Chain, Organism};
//! use tcr_converter::detection::detect;
//! use tcr_converter::genes::GeneTable;
//! use tcr_converter::parsing::delimited::{read_header, read_table, write_table};
//! use std::path::Path;
//!
//! let input = Path::new("repertoire.tsv");
//! let header = read_header(input).unwrap();
//! let format = detect(header.iter().map(String::as_str)).unwrap();
//!
//! let table = read_table(input).unwrap();
//! let genes = GeneTable::load_embedded().unwrap();
//! let options = ConvertOptions::new(Chain::Beta, Organism::Human);
//! let conversion = convert(format, &table, &options, &genes).unwrap();
//!
//! write_table(Path::new("converted.csv"), &conversion.table).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Tables, cell values, chains and organisms
//! - [`detection`]: Header vocabularies and format detection
//! - [`convert`]: Per-format converters to the canonical schema
//! - [`genes`]: Vendor gene name lookup
//! - [`parsing`]: Delimited table reading and writing
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod convert;
pub mod core;
pub mod detection;
pub mod genes;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use convert::{convert, ConvertError, ConvertOptions, Conversion};
pub use core::table::{CanonicalTable, Cell, RawTable, Table, Value};
pub use core::types::{Chain, ChainSchema, Organism};
pub use detection::{detect, DetectionError, SourceFormat};
pub use genes::{GeneLookup, GeneTable};

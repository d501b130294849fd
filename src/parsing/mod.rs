//! Reading and writing repertoire tables.
//!
//! The file layout is taken from the file name:
//!
//! | Extension | Layout |
//! |-----------|-----------|
//! | `.csv` | comma |
//! | `.tsv`, `.tab`, `.txt` | tab |
//! | `.xlsx` | first worksheet (input only) |
//!
//! The delimited types may carry a trailing `.gz` for gzip compression.
//! Workbooks are read by [`spreadsheet`] behind the same entry points.
//!
//! Format detection only needs the header row, so [`read_header`] stops after
//! the first record; [`read_table`] loads everything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tcr_converter::parsing::delimited::{read_header, read_table};
//! use std::path::Path;
//!
//! let header = read_header(Path::new("sample.tsv")).unwrap();
//! let table = read_table(Path::new("sample.tsv")).unwrap();
//! ```
//!
//! [`read_header`]: delimited::read_header
//! [`read_table`]: delimited::read_table

pub mod delimited;
pub mod spreadsheet;

//! Format detection from column headers.
//!
//! Each known export format has a vocabulary of column names unique to it.
//! A header matches a format when it shares at least one column name with that
//! vocabulary. Detection succeeds only when exactly one format matches; a
//! header that looks like several formats is rejected rather than guessed.
//!
//! | Identifier | Format |
//! |------------|--------|
//! | `10x` | 10x Genomics contig annotations |
//! | `adaptive_v2` | Adaptive immunoSEQ v2 |
//! | `adaptive_v4` | Adaptive immunoSEQ v4 |
//! | `airr` | AIRR rearrangement |
//!
//! ## Example
//!
//! ```rust
//! use tcr_converter::detection::{detect, SourceFormat};
//!
//! let header = ["bio_identity", "templates", "productive_frequency"];
//! assert_eq!(detect(header).unwrap(), SourceFormat::AdaptiveV4);
//! ```

pub mod sniffer;
pub mod vocabulary;

pub use sniffer::{detect, matching_formats, DetectionError};
pub use vocabulary::{vocabulary_for, SourceFormat};

//! Vendor gene name lookup.
//!
//! Adaptive exports name genes with their own scheme (`TCRBV07-02`,
//! `TCRBJ02-01*01`); the canonical schema uses IMGT names with an allele
//! (`TRBV7-2*01`, `TRBJ2-1*01`). Converters resolve names through the
//! [`GeneLookup`] trait so the reference table can be swapped or mocked.
//!
//! [`GeneTable`] is the JSON-backed implementation. A default table is
//! compiled into the binary; a replacement can be loaded from a file:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "organisms": {
//!     "human": { "TCRBV07-02": "TRBV7-2*01" },
//!     "mouse": { "TCRBV01-01": "TRBV1*01" }
//!   }
//! }
//! ```

pub mod table;

use crate::core::types::Organism;

pub use table::{GeneTable, GeneTableError};

/// Resolve a vendor gene name to its canonical name for an organism
pub trait GeneLookup {
    /// Canonical name, or `None` if the vendor name is unknown
    fn lookup(&self, organism: Organism, vendor_name: &str) -> Option<&str>;
}

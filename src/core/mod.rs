//! Core data types for repertoire conversion.
//!
//! - [`Table`]: named columns with rows of optional [`Value`] cells, used both
//!   for the loaded input ([`RawTable`]) and the converted output
//!   ([`CanonicalTable`])
//! - [`Chain`], [`ChainSchema`]: the receptor chain and its canonical column names
//! - [`Organism`]: the species used to key gene name lookups
//!
//! ## Canonical columns
//!
//! | Chain | CDR3 | V gene | J gene | Nucleotide |
//! |-------|------|--------|--------|------------|
//! | alpha | `cdr3_a_aa` | `v_a_gene` | `j_a_gene` | `cdr3_a_nucseq` |
//! | beta  | `cdr3_b_aa` | `v_b_gene` | `j_b_gene` | `cdr3_b_nucseq` |
//! | gamma | `cdr3_g_aa` | `v_g_gene` | `j_g_gene` | `cdr3_g_nucseq` |
//! | delta | `cdr3_d_aa` | `v_d_gene` | `j_d_gene` | `cdr3_d_nucseq` |
//!
//! [`Table`]: table::Table
//! [`Value`]: table::Value
//! [`RawTable`]: table::RawTable
//! [`CanonicalTable`]: table::CanonicalTable
//! [`Chain`]: types::Chain
//! [`ChainSchema`]: types::ChainSchema
//! [`Organism`]: types::Organism

pub mod table;
pub mod types;

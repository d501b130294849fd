use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::types::Organism;
use crate::genes::GeneLookup;

#[derive(Error, Debug)]
pub enum GeneTableError {
    #[error("Failed to read gene table: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse gene table: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Gene table version for compatibility checking
pub const GENE_TABLE_VERSION: &str = "1.0.0";

/// Serializable gene table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneTableData {
    pub version: String,
    pub organisms: HashMap<Organism, HashMap<String, String>>,
}

/// Vendor-to-IMGT gene names, keyed by organism
#[derive(Debug, Clone, Default)]
pub struct GeneTable {
    names: HashMap<Organism, HashMap<String, String>>,
}

impl GeneTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default table
    ///
    /// # Errors
    ///
    /// Returns `GeneTableError::ParseError` if the embedded JSON is invalid.
    pub fn load_embedded() -> Result<Self, GeneTableError> {
        // Validated at compile time by build.rs
        const EMBEDDED_TABLE: &str = include_str!("../../references/gene_names.json");
        Self::from_json(EMBEDDED_TABLE)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `GeneTableError::ReadError` if the file cannot be read, or
    /// `GeneTableError::ParseError` if it is not a valid table.
    pub fn load_from_file(path: &Path) -> Result<Self, GeneTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `GeneTableError::ParseError` if the JSON does not match the table format.
    pub fn from_json(json: &str) -> Result<Self, GeneTableError> {
        let data: GeneTableData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != GENE_TABLE_VERSION {
            warn!(
                "Gene table version mismatch (expected {}, found {})",
                GENE_TABLE_VERSION, data.version
            );
        }

        Ok(Self {
            names: data.organisms,
        })
    }

    /// Add a single vendor-to-canonical mapping
    pub fn insert(
        &mut self,
        organism: Organism,
        vendor_name: impl Into<String>,
        canonical_name: impl Into<String>,
    ) {
        self.names
            .entry(organism)
            .or_default()
            .insert(vendor_name.into(), canonical_name.into());
    }

    /// Number of vendor names known for an organism
    #[must_use]
    pub fn len(&self, organism: Organism) -> usize {
        self.names.get(&organism).map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.values().all(HashMap::is_empty)
    }
}

impl GeneLookup for GeneTable {
    fn lookup(&self, organism: Organism, vendor_name: &str) -> Option<&str> {
        self.names
            .get(&organism)?
            .get(vendor_name)
            .map(String::as_str)
    }
}

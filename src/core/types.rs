use serde::{Deserialize, Serialize};

/// Receptor chain being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl Chain {
    /// Canonical output columns for this chain
    #[must_use]
    pub fn schema(self) -> ChainSchema {
        match self {
            Self::Alpha => ChainSchema {
                cdr3_aa: "cdr3_a_aa",
                v_gene: "v_a_gene",
                j_gene: "j_a_gene",
                nucseq: "cdr3_a_nucseq",
            },
            Self::Beta => ChainSchema {
                cdr3_aa: "cdr3_b_aa",
                v_gene: "v_b_gene",
                j_gene: "j_b_gene",
                nucseq: "cdr3_b_nucseq",
            },
            Self::Gamma => ChainSchema {
                cdr3_aa: "cdr3_g_aa",
                v_gene: "v_g_gene",
                j_gene: "j_g_gene",
                nucseq: "cdr3_g_nucseq",
            },
            Self::Delta => ChainSchema {
                cdr3_aa: "cdr3_d_aa",
                v_gene: "v_d_gene",
                j_gene: "j_d_gene",
                nucseq: "cdr3_d_nucseq",
            },
        }
    }

    /// IMGT locus code (TRA, TRB, TRG, TRD)
    #[must_use]
    pub fn locus(self) -> &'static str {
        match self {
            Self::Alpha => "TRA",
            Self::Beta => "TRB",
            Self::Gamma => "TRG",
            Self::Delta => "TRD",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "alpha"),
            Self::Beta => write!(f, "beta"),
            Self::Gamma => write!(f, "gamma"),
            Self::Delta => write!(f, "delta"),
        }
    }
}

/// Organism used to key the gene name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Organism {
    Human,
    Mouse,
}

impl std::fmt::Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Mouse => write!(f, "mouse"),
        }
    }
}

/// Names of the four canonical columns for one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSchema {
    pub cdr3_aa: &'static str,
    pub v_gene: &'static str,
    pub j_gene: &'static str,
    pub nucseq: &'static str,
}

impl ChainSchema {
    /// Columns in output order: CDR3, V gene, J gene, nucleotide sequence
    #[must_use]
    pub fn columns(&self) -> [&'static str; 4] {
        [self.cdr3_aa, self.v_gene, self.j_gene, self.nucseq]
    }
}

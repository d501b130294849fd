//! Command-line interface for tcr-converter.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **convert**: Detect the input format and write it in the canonical schema
//! - **detect**: Report which format an input file is in
//!
//! ## Usage
//!
//! ```text
//! # Convert an Adaptive v4 export of beta chains
//! tcr-converter convert -i sample.tsv -c beta -s human -o sample_imgt.csv
//!
//! # Keep extra source columns
//! tcr-converter convert -i airr.tsv -e sequence_id,duplicate_count
//!
//! # Check the detected format
//! tcr-converter detect sample.tsv --format json
//! ```

use clap::{Parser, Subcommand};

pub mod convert;
pub mod detect;

#[derive(Parser)]
#[command(name = "tcr-converter")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Convert immune repertoire exports to an IMGT-style schema")]
#[command(
    long_about = "tcr-converter converts single-chain TCR repertoire data from Adaptive v4, AIRR or 10x format to IMGT-style columns.\n\nThe input format is detected from its column headers. Headers that match no known format, or more than one, are rejected and must be converted by hand."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for summaries
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a repertoire file to the canonical schema
    Convert(convert::ConvertArgs),

    /// Detect the format of a repertoire file
    Detect(detect::DetectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

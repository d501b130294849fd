use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::detection::{detect, matching_formats, vocabulary_for, SourceFormat};
use crate::parsing::delimited::read_header;

#[derive(Args)]
pub struct DetectArgs {
    /// Input repertoire file (CSV or TSV, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute detect subcommand
///
/// # Errors
///
/// Returns an error if the header cannot be read or matches no single format.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DetectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let header = read_header(&args.input)?;
    let header_set: HashSet<&str> = header.iter().map(String::as_str).collect();

    if verbose {
        eprintln!(
            "Read {} column names from {}",
            header.len(),
            args.input.display()
        );
    }

    let candidates = matching_formats(&header_set);
    let result = detect(header.iter().map(String::as_str));

    match format {
        OutputFormat::Text => print_text_result(&header_set, &candidates, verbose),
        OutputFormat::Json => {
            print_json_result(&args, &header_set, &candidates, result.as_ref().ok())?;
        }
    }

    result?;
    Ok(())
}

/// Columns of `header` that belong to `format`'s vocabulary, sorted
fn shared_columns<'a>(header: &HashSet<&'a str>, format: SourceFormat) -> Vec<&'a str> {
    let mut shared: Vec<&str> = vocabulary_for(format)
        .iter()
        .filter_map(|column| header.get(column).copied())
        .collect();
    shared.sort_unstable();
    shared
}

fn print_text_result(header: &HashSet<&str>, candidates: &[SourceFormat], verbose: bool) {
    if let [format] = candidates {
        println!("Detected format: {} ({})", format.id(), format.display_name());
    }

    if verbose {
        for format in candidates {
            eprintln!(
                "  {} matched on: {}",
                format.id(),
                shared_columns(header, *format).join(", ")
            );
        }
    }
}

fn print_json_result(
    args: &DetectArgs,
    header: &HashSet<&str>,
    candidates: &[SourceFormat],
    detected: Option<&SourceFormat>,
) -> anyhow::Result<()> {
    let matches: Vec<serde_json::Value> = candidates
        .iter()
        .map(|format| {
            serde_json::json!({
                "format": format,
                "display_name": format.display_name(),
                "shared_columns": shared_columns(header, *format),
            })
        })
        .collect();

    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "column_count": header.len(),
        "detected": detected,
        "candidates": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

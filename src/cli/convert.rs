use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::convert::{convert, ConvertOptions, Conversion};
use crate::core::types::{Chain, Organism};
use crate::detection::{detect, SourceFormat};
use crate::genes::GeneTable;
use crate::parsing::delimited::{read_header, read_table, write_table};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input repertoire file (CSV or TSV, optionally gzipped)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Receptor chain in the input
    #[arg(short, long, value_enum, default_value = "beta")]
    pub chain: Chain,

    /// Organism used to resolve Adaptive gene names
    #[arg(short, long, value_enum, default_value = "human")]
    pub species: Organism,

    /// Extra input columns to keep after the CDR3/V/J columns (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub extra: Vec<String>,

    /// Output file path (.csv or .tsv, optionally .gz)
    #[arg(short, long, default_value = "./tcr_converter_out.csv")]
    pub output: PathBuf,

    /// Path to a custom gene name table (JSON)
    #[arg(long)]
    pub gene_table: Option<PathBuf>,

    /// Input format: 10x, adaptive_v4 or airr (detected from the header by default)
    #[arg(long, value_parser = parse_source_format)]
    pub input_format: Option<SourceFormat>,
}

fn parse_source_format(id: &str) -> Result<SourceFormat, String> {
    SourceFormat::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = SourceFormat::ALL.iter().map(|f| f.id()).collect();
        format!("unknown format '{id}', expected one of: {}", known.join(", "))
    })
}

/// Execute convert subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, its format cannot be
/// determined, a required column is missing, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let source_format = resolve_format(&args)?;
    info!("Detected format: {source_format}");
    if matches!(format, OutputFormat::Text) {
        println!("Detected format: {}", source_format.id());
    }

    let genes = load_gene_table(args.gene_table.as_deref())?;
    if verbose {
        eprintln!(
            "Loaded gene table with {} {} gene names",
            genes.len(args.species),
            args.species
        );
    }

    let table = read_table(&args.input)?;
    if verbose {
        eprintln!(
            "Loaded {} rows and {} columns from {}",
            table.len(),
            table.columns().len(),
            args.input.display()
        );
    }

    let options = ConvertOptions::new(args.chain, args.species)
        .with_extra_columns(args.extra.iter().cloned());
    let conversion = convert(source_format, &table, &options, &genes)?;

    if verbose {
        eprintln!(
            "Kept {} rows, dropped {}, skipped {} from other chains, {} unresolved gene names",
            conversion.table.len(),
            conversion.dropped_rows,
            conversion.filtered_rows,
            conversion.unresolved_genes
        );
    }

    match format {
        OutputFormat::Text => {
            println!("Writing output to: \"{}\"", args.output.display());
            write_table(&args.output, &conversion.table)?;
        }
        OutputFormat::Json => {
            write_table(&args.output, &conversion.table)?;
            print_json_summary(&args, source_format, table.len(), &conversion)?;
        }
    }

    Ok(())
}

fn resolve_format(args: &ConvertArgs) -> anyhow::Result<SourceFormat> {
    if let Some(format) = args.input_format {
        return Ok(format);
    }

    let header = read_header(&args.input)?;
    Ok(detect(header.iter().map(String::as_str))?)
}

fn load_gene_table(path: Option<&Path>) -> anyhow::Result<GeneTable> {
    match path {
        Some(path) => Ok(GeneTable::load_from_file(path)?),
        None => Ok(GeneTable::load_embedded()?),
    }
}

fn print_json_summary(
    args: &ConvertArgs,
    source_format: SourceFormat,
    input_rows: usize,
    conversion: &Conversion,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": args.output.display().to_string(),
        "format": source_format,
        "chain": args.chain,
        "organism": args.species,
        "columns": conversion.table.columns(),
        "input_rows": input_rows,
        "output_rows": conversion.table.len(),
        "dropped_rows": conversion.dropped_rows,
        "filtered_rows": conversion.filtered_rows,
        "unresolved_genes": conversion.unresolved_genes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_format() {
        assert_eq!(parse_source_format("10x"), Ok(SourceFormat::TenX));
        assert_eq!(parse_source_format("airr"), Ok(SourceFormat::Airr));

        let err = parse_source_format("adaptive_v3").unwrap_err();
        assert_eq!(
            err,
            "unknown format 'adaptive_v3', expected one of: 10x, adaptive_v2, adaptive_v4, airr"
        );
    }
}

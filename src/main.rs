use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod core;
mod detection;
mod genes;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tcr_converter=debug,info")
    } else {
        EnvFilter::new("tcr_converter=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Convert(args) => {
            cli::convert::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Detect(args) => {
            cli::detect::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}

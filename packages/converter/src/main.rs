//! CLI entry point for the converter.

use clap::Parser;
use patternpedia_converter::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with WARN level by default (DEBUG with -v), respecting RUST_LOG
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::execute(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

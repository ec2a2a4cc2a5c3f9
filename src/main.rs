//! CLI entry point for the weakness chart batch

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;
use weakmap::io::cli::{BatchProcessor, Cli};

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> weakmap::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let processor = BatchProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}

//! Stylometer - stylometric text analysis CLI
//!
//! Profiles the writing style of a plain-text document: feature
//! vectors, readability indices, style classification, and
//! recommendations. 100% local, no model downloads.

use anyhow::Result;
use clap::Parser;
use stylometer::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(args)
}

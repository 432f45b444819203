//! TallySleuth — cross-tool comparison tables for forensic inventories.
//!
//! Thin binary entry point. All logic lives in the `tallysleuth-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Initialise structured logging. Logs go to stderr so they never mix
    // with anything a caller pipes from stdout.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("TallySleuth starting with {} sources", args.labeled_inventories.len());

    let config = args
        .into_config()
        .context("invalid inventory specification")?;
    cli::run(&config)
}

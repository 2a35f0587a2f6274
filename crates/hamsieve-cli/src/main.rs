//! Hamsieve CLI
//!
//! Command-line interface for training and running Naive Bayes spam
//! classifiers over directory corpora.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hamsieve_cli::commands::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    hamsieve_cli::commands::run(cli)
}

//! datecast - Main Entry Point
//!
//! Loads the trained classifier and baseline averages, collects the form's
//! ratings, and prints the predicted verdict with its sensitivity breakdown.

use clap::Parser;
use datecast::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datecast=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

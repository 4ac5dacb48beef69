//! Binary crate for the `weather-dashboard` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search session
//! - Console rendering of display models

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(cli::log_filter(cmd.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run().await
}

//! almanac CLI entrypoint
//!
//! Query output goes to stdout and logs go to stderr, so `--json` output can
//! be piped. Exit status: 0 found, 1 error, 2 no data for the query.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use almanac::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load progress is only interesting with RUST_LOG set
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Cli::parse().execute().await
}

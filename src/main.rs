//! langdoc - Compile the language documentation tree into one markdown file
//!
//! langdoc provides:
//! - Recursive markdown discovery under docs/10_language
//! - Deterministic, path-sorted concatenation with per-file headings
//! - Output to stdout or to a file (parent directories created)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());
    cli::run(cli)
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

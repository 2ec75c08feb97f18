//! # ratechart
//!
//! A command-line tool rendering throughput logs as MB/s line charts.
//!
//! ## Usage
//!
//! ```bash
//! # Render one log into export/quic-full.png
//! ratechart plot log/quic-full.json -o export
//!
//! # Render every chart listed in a config file
//! ratechart batch charts.toml
//!
//! # Print statistics about a log
//! ratechart info log/quic-full.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

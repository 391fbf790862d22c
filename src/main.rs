//! recheck CLI
//!
//! Usage: recheck [-v...] <CONFIG>
//!
//! Writes diagnostics of the transformed project to stderr.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use recheck::{LocalFs, MiniTs, RecheckUseCase};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let use_case = RecheckUseCase::new(MiniTs, LocalFs::new());
    let output = use_case.recheck(&cli.config, &[]);
    eprint!("{}", output.concat());
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use std::path::PathBuf;

use clap::Parser;

/// Type check a project after transforming its sources
#[derive(Parser, Debug)]
#[command(name = "recheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the project configuration (tsconfig.json)
    pub config: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

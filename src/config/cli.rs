//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Detect brute-force login attempts in an authentication log
#[derive(Debug, Parser)]
#[command(name = "loghunter", version)]
#[command(about = "Detect brute-force failed-password bursts in authentication logs")]
pub struct Cli {
    /// Authentication log to scan (plain text, one entry per line)
    #[arg(long, value_name = "PATH")]
    pub logs: PathBuf,

    /// YAML rule file with `threshold` and `window_minutes`
    #[arg(long, value_name = "PATH")]
    pub rules: PathBuf,

    /// Destination for the JSON alert document
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the hf CLI installer.
#[derive(Parser)]
#[command(name = "hfup")]
#[command(about = "Install and manage the Hugging Face hf CLI")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output (shows pip output)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

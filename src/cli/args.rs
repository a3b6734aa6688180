//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Convert XMind mind maps into flat test case tables (CSV)
#[derive(Parser, Debug)]
#[command(name = "xmind2case")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Mind map file to convert (.xmind)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output table file (default: input path with .csv extension)
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<Shell>,
}

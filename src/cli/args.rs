//! Command line argument parsing for the Spyglass CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spyglass - find words in a text file, with surrounding context
#[derive(Parser, Debug, Clone)]
#[command(name = "spyglass")]
#[command(about = "Index a text file in parallel and search it for words in context")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpyglassArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpyglassArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a file for one or more words
    Search(SearchArgs),

    /// Show statistics about how a file is segmented and indexed
    Stats(StatsArgs),
}

/// Options controlling how the document is indexed
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Path to the text file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Searcher configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of segments indexed in parallel
    #[arg(long, value_name = "N")]
    pub max_segments: Option<usize>,

    /// Split tokens on any whitespace instead of spaces only
    #[arg(long)]
    pub whitespace: bool,
}

/// Arguments for searching
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub index: IndexArgs,

    /// Words to search for
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Number of words of context on each side of a match
    #[arg(short = 'c', long = "context", default_value = "0")]
    pub context_words: usize,
}

/// Arguments for index statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub index: IndexArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

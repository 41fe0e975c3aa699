//! CLI command definitions and implementations.

use clap::{Parser, Subcommand};

pub mod exit;
pub mod list;
pub mod replay;
pub mod show;

pub use exit::{exit_code_for_error, Exit};

/// Storymap — Step through endangered-species habitats on a terminal map
#[derive(Parser, Debug)]
#[command(name = "storymap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, short = 'c', env = "STORYMAP_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file path
    #[arg(long)]
    pub log: Option<std::path::PathBuf>,

    /// Color theme
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Directory that local media references are resolved against
    #[arg(long)]
    pub media_dir: Option<std::path::PathBuf>,

    /// Map click tolerance in decimal degrees
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the species in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the story view for one record
    Show {
        /// Record id (0-based)
        id: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a sequence of events to a fresh session
    Replay {
        /// Events: next, prev, click:LAT,LNG
        #[arg(required = true, allow_hyphen_values = true)]
        events: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

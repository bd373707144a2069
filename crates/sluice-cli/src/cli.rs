//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Diagnostic CLI for the Sluice companion API.
///
/// Fetches badges, server descriptors, and collection goals; watches the
/// resource-pack fingerprint; submits resource increments.
#[derive(Debug, Parser)]
#[command(name = "sluice", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a player's badge (cache-aside).
    Badge {
        /// The player's UUID.
        player: Uuid,
    },

    /// Show the configured server's descriptor.
    Server,

    /// Show collection goals and which categories are active.
    Goals,

    /// Watch the resource-pack fingerprint until interrupted.
    Watch,

    /// Classify item counts and submit eligible increments.
    Collect {
        /// JSON file mapping raw item kinds to resource categories.
        #[arg(long)]
        mapping: PathBuf,

        /// Item counts as kind=count pairs (e.g. oak_log=10).
        #[arg(required = true)]
        items: Vec<String>,
    },
}

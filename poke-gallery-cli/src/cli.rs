//! Command-line argument definitions

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommands;
use crate::output::OutputFormat;

/// Browse the PokeAPI catalog from the terminal
#[derive(Debug, Parser)]
#[command(name = "poke-gallery", version, about, long_about = None)]
pub struct Cli {
    /// Catalog API root (overrides the config file)
    #[arg(long, global = true, env = "POKE_GALLERY_API_URL")]
    pub api_url: Option<String>,

    /// Entries per page (overrides the config file)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive gallery: load more, search, open details
    Browse,

    /// Load one or more pages and print the gallery
    List {
        /// Number of pages to load
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },

    /// Search by name or number
    Search {
        /// Name or number to look up
        query: String,
    },

    /// Search and open the detailed stats view
    Show {
        /// Name or number to look up
        query: String,
    },

    /// Configuration management
    Config(ConfigCommands),
}

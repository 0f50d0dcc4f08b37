//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// menutree - storefront navigation menu inspector
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of a text outline
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the menu comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Menu payload (JSON array of entries or {"menus": [...]})
    #[arg(short, long)]
    pub input: PathBuf,

    /// Menu identifier inside a multi-menu payload
    #[arg(short, long)]
    pub menu: Option<String>,

    /// Config file (defaults to ./menutree.toml, then the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and annotate a menu for a location
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Current page path, compared exactly against node URLs
        #[arg(short, long, default_value = "/")]
        location: String,

        /// URL suffix for category nodes
        #[arg(long)]
        category_suffix: Option<String>,

        /// URL suffix for product nodes
        #[arg(long)]
        product_suffix: Option<String>,

        /// Maximum number of levels to render
        #[arg(long)]
        max_levels: Option<usize>,
    },

    /// Report dangling parents and duplicate ids
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookload")]
#[command(about = "Import library book records from CSV files into a catalog database", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database file (default: from settings.toml, else the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import books from one or more CSV files into the catalog
    Import {
        /// Path(s) to one or more CSV files
        files: Vec<PathBuf>,

        /// Folder containing CSV files to import (after any explicit files)
        #[arg(long)]
        folder: Option<PathBuf>,

        /// Preview the changes without saving to the database
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List books in the catalog
    List {
        /// Only show books in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List categories and how many books each holds
    Categories,

    /// Show catalog statistics
    Stats,

    /// Show recent file imports
    History {
        /// Maximum number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Print the settings file path
    Path,
}

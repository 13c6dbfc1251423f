use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "railboard")]
#[command(version, about = "Train management dashboard for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List trains matching a search and status filter
    List {
        /// Case-insensitive text matched against name, number, origin and destination
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Status filter (all, delayed, ontime)
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the summary counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the whole dashboard once
    Show {
        /// Case-insensitive text matched against name, number, origin and destination
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Status filter (all, delayed, ontime)
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Active tab (schedule, live, manage)
        #[arg(long, short = 't')]
        tab: Option<String>,
    },

    /// Start an interactive session on stdin
    Console,
}

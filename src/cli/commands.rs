use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Source;

#[derive(Parser)]
#[command(name = "mrt-shops")]
#[command(about = "Search shop directories by MRT station and append the listings to CSV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List MRT lines and their station counts
    Lines,

    /// List unique stations across the selected lines
    Stations {
        /// Only include stations on this line (repeatable)
        #[arg(short = 'l', long = "line")]
        lines: Vec<String>,
    },

    /// Search every station on each shop directory and append results
    Run {
        /// Directory to search: stellarlifestyle or sbstransit (repeatable, default: both)
        #[arg(short = 's', long = "source")]
        sources: Vec<Source>,

        /// Only search stations on this line (repeatable)
        #[arg(short = 'l', long = "line")]
        lines: Vec<String>,

        /// Directory for the CSV files (overrides MRT_OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Dry run - print the requests that would be sent, without sending them
        #[arg(long)]
        dry_run: bool,
    },
}

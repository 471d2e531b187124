//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Armstrong: functional-dependency analysis for relational schemas
#[derive(Parser)]
#[command(name = "armstrong")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis on a relation file
    Analyze {
        /// Path to the relation description (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Include the closure of every attribute subset
        #[arg(long)]
        closures: bool,
    },

    /// Compute the closure of a set of attributes
    Closure {
        /// Path to the relation description (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Attributes to close (space or comma separated)
        #[arg(value_name = "ATTRS", required = true, value_delimiter = ',')]
        attributes: Vec<String>,
    },

    /// List minimal keys and prime attributes
    Keys {
        /// Path to the relation description (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the normal form and its violations
    Classify {
        /// Path to the relation description (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a decomposition preserves the dependencies
    Decompose {
        /// Path to the relation description (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Named decomposition from the file (default: all of them)
        #[arg(short, long, conflicts_with = "pieces")]
        name: Option<String>,

        /// Ad-hoc piece as comma-separated attributes; repeat per piece
        #[arg(short, long = "piece", value_name = "A,B,C")]
        pieces: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

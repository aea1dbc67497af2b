//! CLI parse: clap types for treesum. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Treesum CLI - content-addressed tree manifests and comparison
#[derive(Parser)]
#[command(name = "treesum")]
#[command(about = "Build content-addressed manifests of directory trees and compare them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging, including a line per file read (default: off)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a manifest of a file or directory tree
    Generate {
        /// Root path to record (file or directory)
        #[arg(long)]
        path: PathBuf,

        /// Where to write the manifest JSON
        #[arg(long)]
        output: PathBuf,

        /// Newline-delimited file of directory names to skip
        #[arg(long)]
        skip_file: Option<PathBuf>,
    },
    /// Compare two manifests and report drift
    Compare {
        /// Source manifest path
        #[arg(long)]
        source: PathBuf,

        /// Dest manifest path
        #[arg(long)]
        dest: PathBuf,

        /// Where to write the diff report JSON
        #[arg(long)]
        output: PathBuf,
    },
}

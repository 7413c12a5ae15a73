//! CLI argument parsing for booktools

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for checker reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "booktools")]
#[command(version)]
#[command(about = "Helpers for building and checking an mdBook book", long_about = None)]
pub struct Cli {
    /// Enable debug tracing output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert `**Term**` / `: definition` pairs into `## Term` headings
    Glossary {
        /// Glossary markdown file, rewritten in place
        path: PathBuf,

        /// Print the converted text instead of writing it back
        #[arg(long)]
        dry_run: bool,
    },

    /// Check markdown files for known misspellings and grammar slips
    Check {
        /// Directory to scan recursively for .md files
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output format (text or json)
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,

        /// Exit with status 1 when any file has issues
        #[arg(long)]
        strict: bool,

        /// TOML file extending the allowed words and misspellings
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

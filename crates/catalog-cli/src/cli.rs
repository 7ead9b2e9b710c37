//! CLI argument definitions for the catalog importer.

use std::path::PathBuf;

use catalog_ingest::DEFAULT_BUFFER_SIZE;
use catalog_transform::DEFAULT_IDENTIFIER_BASE;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Course catalog importer - index XCRI-CAP course feeds",
    long_about = "Import an XCRI-CAP 1.2 course catalog into a search index.\n\n\
                  Every presentation in the feed becomes one flat JSON document carrying\n\
                  its course and provider fields. Documents are written as JSON lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a catalog feed and write normalized documents.
    Import(ImportArgs),

    /// List the fields captured from a catalog feed.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Catalog XML file, or `-` to read standard input.
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// Write JSON lines to this file instead of standard output.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// URI prefix removed from identifiers before they are flattened.
    #[arg(
        long = "identifier-base",
        value_name = "URI",
        default_value = DEFAULT_IDENTIFIER_BASE
    )]
    pub identifier_base: String,

    /// Read buffer capacity in bytes.
    #[arg(long = "buffer-size", value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Parse and normalize without writing any documents.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl ImportArgs {
    /// Whether documents go to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        !self.dry_run && self.output.is_none()
    }

    pub fn reads_stdin(&self) -> bool {
        self.feed.as_os_str() == "-"
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

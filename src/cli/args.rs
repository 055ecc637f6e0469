//! Command-line argument definitions for the cable processor
//!
//! Defines the CLI interface using the clap derive API: a `convert` command
//! for CSV-to-XML conversion and a `validate` command for checking dropped
//! archive files for consistent record shape.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the cable processor
///
/// Converts archives of diplomatic cable messages from delimited CSV
/// records into structured XML documents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cable-processor",
    version,
    about = "Convert diplomatic cable archives from CSV to structured XML",
    long_about = "Parses delimited cable archive files - eight fields per record covering \
                  identifier, timestamp, reference, origin, classification, sources, header \
                  and body text - into a validated document tree and renders it as XML. \
                  Records with unparseable optional sections are kept with those sections \
                  omitted; a record with the wrong field count stops the file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands for the cable processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a cable archive from CSV to XML (main command)
    Convert(ConvertArgs),
    /// Validate CSV files for consistent record shape
    Validate(ValidateArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Cable archive CSV file to convert
    #[arg(value_name = "INPUT", help = "Cable archive CSV file to convert")]
    pub input: PathBuf,

    /// Output XML file path
    ///
    /// Defaults to the input path with an .xml extension.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output XML file path (default: input with .xml extension)"
    )]
    pub output: Option<PathBuf>,

    /// Replace an existing output file
    #[arg(long = "overwrite", help = "Replace an existing output file")]
    pub overwrite: bool,

    /// Print parse statistics as JSON on stdout
    #[arg(long = "stats-json", help = "Print parse statistics as JSON")]
    pub stats_json: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// CSV file, or directory to scan for CSV files
    #[arg(
        value_name = "INPUT",
        help = "CSV file, or directory to scan for CSV files"
    )]
    pub input: PathBuf,

    /// Directory to move files that pass validation into
    #[arg(
        long = "success-dir",
        value_name = "PATH",
        help = "Move passing files here and write a report alongside"
    )]
    pub success_dir: Option<PathBuf>,

    /// Directory to move files that fail validation into
    #[arg(
        long = "failure-dir",
        value_name = "PATH",
        help = "Move failing files here and write a report alongside"
    )]
    pub failure_dir: Option<PathBuf>,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub format: OutputFormat,
}

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal summary
    Human,
    /// Machine-readable JSON
    Json,
}

impl ValidateArgs {
    /// Validate argument consistency before running
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        // Moving requires both destinations so every file has somewhere to go.
        if self.success_dir.is_some() != self.failure_dir.is_some() {
            return Err(Error::configuration(
                "--success-dir and --failure-dir must be given together".to_string(),
            ));
        }

        Ok(())
    }

    /// True when validated files should be moved to the outcome directories
    pub fn moves_files(&self) -> bool {
        self.success_dir.is_some() && self.failure_dir.is_some()
    }
}

//! File-level parsing orchestration
//!
//! Reads one cable archive file, checks each record's shape, and assembles
//! the document. The parser never panics and never propagates a per-record
//! failure: recoverable conditions are collected as warnings, and the only
//! fatal conditions (wrong field count, empty input) halt the current file
//! while still returning the partial document built so far. `Err` is
//! reserved for genuine I/O and CSV-reader failures.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use super::field_parsers::check_field_count;
use super::record_parser::parse_cable_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Document;
use crate::constants::{CSV_DELIMITER, CSV_ESCAPE, CSV_QUOTE};
use crate::{Error, Result};

/// Parser for cable archive CSV files
///
/// Stateless between records and between files: each call owns its document
/// for the duration of the parse and hands it back whole. Parsing the same
/// input twice produces structurally identical documents.
#[derive(Debug, Default)]
pub struct CableCsvParser;

impl CableCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a cable archive file into a document with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing cable archive: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path)
            .map_err(|e| Error::io(format!("failed to read {}", file_path.display()), e))?;

        self.parse_str(&content, &file_path.display().to_string())
    }

    /// Parse cable archive content from memory.
    ///
    /// `source_name` labels the input in diagnostics. The first row is a
    /// column-header row and is skipped, as in the source archives.
    ///
    /// Diagnostics number records by their one-based data-record index, not
    /// by physical file line. Quoted content blobs span many lines, so the
    /// two differ for every archive with more than one record.
    pub fn parse_str(&self, content: &str, source_name: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut document = Document::new();

        // No header row at all is the empty-input member of the fatal
        // malformed-record class; the (empty) document is still returned.
        if content.trim().is_empty() {
            let failure = Error::empty_input(source_name);
            warn!("{}", failure);
            stats.failure = Some(failure.to_string());
            return Ok(ParseResult { document, stats });
        }

        // flexible() defers field-count enforcement to check_field_count so
        // a short row becomes the typed halt condition, not a reader error.
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .quote(CSV_QUOTE)
            .escape(Some(CSV_ESCAPE))
            .flexible(true)
            .has_headers(true)
            .from_reader(content.as_bytes());

        for (index, result) in csv_reader.records().enumerate() {
            let record_number = (index + 1) as u64;
            stats.records_seen += 1;

            let record = result.map_err(|e| {
                Error::csv_parsing(
                    source_name,
                    format!("read failure at record {}", record_number),
                    Some(e),
                )
            })?;

            if let Err(failure) = check_field_count(&record, record_number) {
                warn!("{}: {}", source_name, failure);
                stats.failure = Some(failure.to_string());
                break;
            }

            let (cable, warnings) = parse_cable_record(&record);
            for warning in &warnings {
                warn!("record {}: {}", record_number, warning);
                stats
                    .warnings
                    .push(format!("record {}: {}", record_number, warning));
            }

            document.push(cable);
            stats.cables_parsed += 1;
            debug!(
                "record {}: cable '{}' assembled with {} warning(s)",
                record_number,
                record.get(0).unwrap_or_default(),
                warnings.len()
            );
        }

        info!(
            "Parsed {} cables from {} records ({} warnings{})",
            stats.cables_parsed,
            stats.records_seen,
            stats.warnings.len(),
            if stats.is_complete() {
                ""
            } else {
                ", halted early"
            }
        );

        Ok(ParseResult { document, stats })
    }
}

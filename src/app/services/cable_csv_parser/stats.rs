//! Parse statistics, warnings, and result structures
//!
//! This module provides the types that carry a parse operation's outcome:
//! the assembled document, per-record recoverable warnings, and the optional
//! fatal failure that halted the file early.

use crate::app::models::Document;

/// Parse result carrying the document and its statistics.
///
/// The document is always returned, even when the parse halted early on a
/// malformed record; it then contains exactly the cables assembled before
/// the failure point.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Document assembled from successfully parsed records
    pub document: Document,

    /// Statistics and diagnostics for the parse
    pub stats: ParseStats,
}

/// Statistics for one file parse
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered (excluding the header row)
    pub records_seen: usize,

    /// Number of cables successfully assembled
    pub cables_parsed: usize,

    /// Recoverable per-record warnings, in order of occurrence
    pub warnings: Vec<String>,

    /// Fatal condition that halted the file, if any
    pub failure: Option<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            records_seen: 0,
            cables_parsed: 0,
            warnings: Vec::new(),
            failure: None,
        }
    }

    /// True when the whole file was consumed without a fatal condition
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Fraction of encountered records that became cables, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.records_seen == 0 {
            0.0
        } else {
            (self.cables_parsed as f64 / self.records_seen as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Recoverable conditions encountered while parsing one record.
///
/// Warnings are reported (logged and recorded in [`ParseStats`]) but never
/// abort a record or a file; the affected field is simply absent from the
/// cable node.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Timestamp field was not in `MM/DD/YYYY HH:MM` format
    #[error("time/date field '{value}' provided in invalid format")]
    TimestampFormat { value: String },

    /// Header blob did not match the header grammar in full
    #[error("header provided in invalid format")]
    HeaderFormat,

    /// One of the optional content fields was not found in the body
    #[error("{0} not found within cable content")]
    ContentFieldMissing(ContentField),
}

/// The four optional content fields, in extraction order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    EoLine,
    Tags,
    Subject,
    Ref,
}

impl std::fmt::Display for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContentField::EoLine => "E.O. line",
            ContentField::Tags => "TAGS",
            ContentField::Subject => "SUBJECT",
            ContentField::Ref => "REF",
        };
        f.write_str(name)
    }
}

//! Cable Processor Library
//!
//! A Rust library for converting archives of diplomatic cable messages from
//! delimited CSV records into structured XML documents.
//!
//! This library provides tools for:
//! - Parsing 8-field cable records with strict field-count validation
//! - Extracting the structured header block (routing reference, date,
//!   FM/TO/INFO institution lists) with all-or-nothing matching
//! - Extracting optional content fields (E.O. line, TAGS, SUBJECT, REF)
//!   from free-form body text with graceful degradation
//! - Rendering the assembled document tree as indented XML
//! - Validating dropped CSV files for consistent record shape

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cable_csv_parser;
        pub mod xml_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Cable, ContentBlock, Document, HeaderBlock};
pub use app::services::cable_csv_parser::{CableCsvParser, ParseResult, ParseStats};
pub use config::ConversionConfig;

/// Result type alias for the cable processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cable processing operations
///
/// Only the record-shape errors (`MalformedRecordCount`, `EmptyInput`) are
/// fatal to a file's parse; everything the parser can degrade gracefully on
/// is reported as a [`ParseWarning`](app::services::cable_csv_parser::ParseWarning)
/// instead and never surfaces here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader error (quoting/escaping problems in the row source)
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A record did not have the expected number of fields.
    ///
    /// Fatal to the remainder of the current file: a wrong column count
    /// signals structural corruption rather than a single bad row.
    #[error("record {record} has {found} fields, expected {expected}; remaining records skipped")]
    MalformedRecordCount {
        record: u64,
        found: usize,
        expected: usize,
    },

    /// Input file contained no records at all
    #[error("input is empty: {path}")]
    EmptyInput { path: String },

    /// XML serialization failed
    #[error("XML writing error: {message}")]
    XmlWriting {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Nothing to serialize: the document holds no cables
    #[error("document contains no cables; no XML file generated")]
    EmptyDocument,

    /// Input file not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON report encoding failed
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed-record-count error
    pub fn malformed_record_count(record: u64, found: usize) -> Self {
        Self::MalformedRecordCount {
            record,
            found,
            expected: constants::RECORD_FIELD_COUNT,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create an XML writing error with context
    pub fn xml_writing(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::XmlWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "directory traversal failed".to_string(),
            source: error,
        }
    }
}

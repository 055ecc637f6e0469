//! CSV parser for cable archive files
//!
//! This module converts one delimited archive file into a [`Document`] of
//! cable nodes. Each record must carry exactly eight fields; within a
//! well-formed record every extraction step degrades gracefully, so a cable
//! with an unparseable timestamp or header still lands in the document with
//! those fields absent.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File-level orchestration and the halt-on-malformed-record policy
//! - [`record_parser`] - Assembly of one record into a cable node
//! - [`field_parsers`] - Field-count check and scalar field converters
//! - [`header`] - All-or-nothing header block extraction
//! - [`content`] - Sequential content field extraction over body lines
//! - [`stats`] - Parse statistics, warnings, and result structures
//!
//! ## Usage
//!
//! ```rust
//! use cable_processor::app::services::cable_csv_parser::CableCsvParser;
//!
//! # fn example() -> cable_processor::Result<()> {
//! let parser = CableCsvParser::new();
//! let result = parser.parse_file(std::path::Path::new("cables.csv"))?;
//!
//! println!("Parsed {} cables from {} records",
//!          result.stats.cables_parsed,
//!          result.stats.records_seen);
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::CableCsvParser;
pub use stats::{ContentField, ParseResult, ParseStats, ParseWarning};

//! Assembly of one CSV record into a cable node
//!
//! Pure composition of the scalar parsers, header extractor, and content
//! extractor. No field is synthesized beyond what the sub-components
//! produce, and no cross-field validation occurs: a record with a valid
//! sources list but an unparseable header still yields a cable, with the
//! header absent.

use csv::StringRecord;

use super::content::extract_content;
use super::field_parsers::{parse_datetime, parse_sources};
use super::header::extract_header;
use super::stats::ParseWarning;
use crate::app::models::Cable;
use crate::constants::field_index;

/// Assemble a cable from one record, together with the recoverable
/// warnings raised along the way.
///
/// The record's field count must already have been checked; fields are
/// addressed positionally.
pub fn parse_cable_record(record: &StringRecord) -> (Cable, Vec<ParseWarning>) {
    let mut warnings = Vec::new();

    let field = |index: usize| record.get(index).unwrap_or_default();

    let raw_datetime = field(field_index::DATETIME);
    let datetime = parse_datetime(raw_datetime);
    if datetime.is_none() {
        warnings.push(ParseWarning::TimestampFormat {
            value: raw_datetime.to_string(),
        });
    }

    let header = extract_header(field(field_index::HEADER));
    if header.is_none() {
        warnings.push(ParseWarning::HeaderFormat);
    }

    let (content, content_warnings) = extract_content(field(field_index::CONTENT));
    warnings.extend(content_warnings);

    let cable = Cable {
        id_in_source: field(field_index::ID).to_string(),
        datetime,
        reference: field(field_index::REFERENCE).to_string(),
        origin: field(field_index::ORIGIN).to_string(),
        classification: field(field_index::CLASSIFICATION).to_string(),
        sources: parse_sources(field(field_index::SOURCES)),
        header,
        content,
    };

    (cable, warnings)
}

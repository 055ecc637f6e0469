//! Field-count validation and scalar field parsers
//!
//! This module provides the record shape check and the independent
//! converters for the timestamp and sources fields. The scalar parsers are
//! deliberately infallible at the type level: a value that does not parse
//! yields `None`/empty and the caller records the warning.

use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::StringRecord;

use crate::app::models::CableDateTime;
use crate::constants::{CABLE_DATETIME_FORMAT, RECORD_FIELD_COUNT, SOURCES_SEPARATOR};
use crate::{Error, Result};

/// Check that a record carries exactly the expected number of fields.
///
/// A mismatch is fatal to the remainder of the file: once a column count is
/// established, a break signals structural corruption rather than a single
/// bad row, so the caller must stop consuming records.
pub fn check_field_count(record: &StringRecord, record_number: u64) -> Result<()> {
    if record.len() == RECORD_FIELD_COUNT {
        Ok(())
    } else {
        Err(Error::malformed_record_count(record_number, record.len()))
    }
}

/// Parse the fixed-format cable timestamp into its five components.
///
/// Returns `None` on any format deviation; the cable's datetime is then
/// omitted entirely (all-or-nothing, never partial).
pub fn parse_datetime(value: &str) -> Option<CableDateTime> {
    let dt = NaiveDateTime::parse_from_str(value, CABLE_DATETIME_FORMAT).ok()?;

    Some(CableDateTime {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        hour: dt.hour(),
        minute: dt.minute(),
    })
}

/// Split the `|`-separated sources field into an ordered list.
///
/// An empty field yields an empty list (count 0 is still recorded in the
/// output). Elements are passed through unmodified.
pub fn parse_sources(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value
            .split(SOURCES_SEPARATOR)
            .map(|s| s.to_string())
            .collect()
    }
}

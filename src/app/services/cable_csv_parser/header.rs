//! Cable header block extraction
//!
//! Attempts one structured match over the whole header blob. Extraction is
//! strictly all-or-nothing: the three institution lists depend on the same
//! match to stay order-consistent, so no partial header is ever emitted.

use std::sync::OnceLock;

use regex::Regex;

use crate::app::models::HeaderBlock;

/// Header grammar, matched against the full blob rather than line-by-line:
/// a reference-and-date fragment ending in a 3-letter month and 2-digit
/// year, a mandatory FM line, a mandatory TO line, and an optional INFO
/// line. Institution lists may span multiple lines.
const HEADER_PATTERN: &str = concat!(
    r"^(?P<ref>(?:.+) (?P<month>\D{3}) (?P<year>\d{2})(?: .+)?)",
    r"[\r\n]+FM (?P<from>[\w\s]+)",
    r"[\r\n]+TO (?P<to>[\w\s]+?)",
    r"(?:(?:[\r\n]+INFO) (?P<info>[\w\s]+))?$",
);

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"))
}

/// Extract the structured header block from a header blob.
///
/// Returns `None` when the grammar does not match in full; the caller
/// records the warning and the cable carries no header. On success the
/// scalar groups are trimmed and each institution group is split on line
/// breaks into an ordered, per-element-trimmed list. An unmatched optional
/// group yields a present-but-empty list, distinguishing "no entries" from
/// "whole header missing".
pub fn extract_header(blob: &str) -> Option<HeaderBlock> {
    let caps = header_regex().captures(blob)?;

    Some(HeaderBlock {
        reference: caps["ref"].trim().to_string(),
        month: caps["month"].to_string(),
        year: caps["year"].to_string(),
        from: split_institutions(caps.name("from")),
        to: split_institutions(caps.name("to")),
        info: split_institutions(caps.name("info")),
    })
}

fn split_institutions(group: Option<regex::Match<'_>>) -> Vec<String> {
    match group {
        Some(m) => m
            .as_str()
            .trim()
            .split('\n')
            .map(|line| line.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

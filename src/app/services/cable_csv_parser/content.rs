//! Content field extraction from cable body text
//!
//! A forward-scanning extractor over the body's line sequence. Four target
//! fields are sought in a fixed order (E.O. line, TAGS, SUBJECT, REF), each
//! matched by its own line-prefix pattern; every field is independently
//! optional. The whole body is always retained as an escaped, trimmed
//! `full_text` capture regardless of which fields were found.

use std::sync::OnceLock;

use regex::Regex;

use super::stats::{ContentField, ParseWarning};
use crate::app::models::ContentBlock;

// Line-prefix patterns for the four target fields.
const EOLINE_PATTERN: &str = r"^(E\.\s?O\. .+)";
const TAGS_PATTERN: &str = r"^TAGS: (.+)";
const SUBJECT_PATTERN: &str = r"^(?:SUBJECT:|SUBJ:) (.+)";
const REF_PATTERN: &str = r"^REF: (.+)";

/// Tag tokens are word characters terminated by ", " or end of the list.
const TAG_TOKEN_PATTERN: &str = r"(\w+)(?:,\s|$)";

fn regex_for(pattern: &'static str, cell: &'static OnceLock<Regex>) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("content pattern is valid"))
}

fn eoline_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex_for(EOLINE_PATTERN, &RE)
}

fn tags_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex_for(TAGS_PATTERN, &RE)
}

fn subject_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex_for(SUBJECT_PATTERN, &RE)
}

fn ref_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex_for(REF_PATTERN, &RE)
}

fn tag_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex_for(TAG_TOKEN_PATTERN, &RE)
}

/// Extract the optional content fields and the full-text capture from a
/// cable body.
///
/// Never fails: a field that cannot be found is recorded absent along with
/// a warning, and extraction of the remaining fields continues.
pub fn extract_content(body: &str) -> (ContentBlock, Vec<ParseWarning>) {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut cursor = 0usize;
    let mut warnings = Vec::new();

    let eoline = scan(&lines, &mut cursor, eoline_regex());
    if eoline.is_none() {
        warnings.push(ParseWarning::ContentFieldMissing(ContentField::EoLine));
    }

    let tags = scan(&lines, &mut cursor, tags_regex()).map(|list| parse_tag_tokens(&list));
    if tags.is_none() {
        warnings.push(ParseWarning::ContentFieldMissing(ContentField::Tags));
    }

    let subject = scan(&lines, &mut cursor, subject_regex());
    if subject.is_none() {
        warnings.push(ParseWarning::ContentFieldMissing(ContentField::Subject));
    }

    let ref_line = scan(&lines, &mut cursor, ref_regex());
    if ref_line.is_none() {
        warnings.push(ParseWarning::ContentFieldMissing(ContentField::Ref));
    }

    let content = ContentBlock {
        eoline,
        tags,
        subject,
        ref_line,
        full_text: escape_body(body),
    };

    (content, warnings)
}

/// Scan forward from the cursor for the first line matching `pattern`.
///
/// On a match the cursor advances to the line after it, so the next field's
/// scan starts there. On a miss the cursor resets to the very start of the
/// line sequence: a missing field consumes no lines, and a later field may
/// legitimately match earlier in the text than the missing one would have.
/// This reset-on-miss policy is an observed contract of the extraction
/// grammar and is preserved exactly.
fn scan(lines: &[&str], cursor: &mut usize, pattern: &Regex) -> Option<String> {
    for (offset, line) in lines[*cursor..].iter().enumerate() {
        if let Some(caps) = pattern.captures(line) {
            *cursor += offset + 1;
            return Some(caps[1].trim().to_string());
        }
    }

    *cursor = 0;
    None
}

/// Split a matched TAGS list into its ordered tokens.
fn parse_tag_tokens(list: &str) -> Vec<String> {
    tag_token_regex()
        .captures_iter(list.trim())
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Whitespace-trim the body and escape control characters so the capture
/// survives as a single XML text node.
fn escape_body(body: &str) -> String {
    let trimmed = body.trim();
    let mut out = String::with_capacity(trimmed.len());

    for ch in trimmed.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }

    out
}

//! Tests for the content field extractor and its cursor policy

use super::sample_content_blob;
use crate::app::services::cable_csv_parser::content::extract_content;
use crate::app::services::cable_csv_parser::stats::{ContentField, ParseWarning};

#[test]
fn test_all_fields_present() {
    let (content, warnings) = extract_content(sample_content_blob());

    assert_eq!(content.eoline.as_deref(), Some("E. O. 11652: N/A"));
    assert_eq!(
        content.tags,
        Some(vec!["PFOR".to_string(), "PINT".to_string()])
    );
    assert_eq!(content.subject.as_deref(), Some("GRAIN SHIPMENTS"));
    assert_eq!(content.ref_line.as_deref(), Some("STATE 106206"));
    assert!(warnings.is_empty());
}

#[test]
fn test_eo_line_without_space_variant() {
    let (content, _) = extract_content("E.O. 11652: GDS");
    assert_eq!(content.eoline.as_deref(), Some("E.O. 11652: GDS"));
}

#[test]
fn test_subj_prefix_variant() {
    let (content, _) = extract_content("SUBJ: SHIPPING PROBLEMS");
    assert_eq!(content.subject.as_deref(), Some("SHIPPING PROBLEMS"));
}

#[test]
fn test_cursor_reset_benefits_next_field_only() {
    // TAGS appears after SUBJECT and there is no E.O. line. The E.O. miss
    // resets the cursor, so TAGS is found at line 1 and the cursor moves to
    // line 2. The SUBJECT scan starts there, sees no lines, and records
    // SUBJECT absent; its reset only helps the REF scan, which also misses.
    // A field the cursor has already passed is not recovered.
    let (content, warnings) = extract_content("SUBJECT: Hello\nTAGS: a, b");

    assert_eq!(content.eoline, None);
    assert_eq!(content.tags, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(content.subject, None);
    assert_eq!(content.ref_line, None);

    assert_eq!(
        warnings,
        vec![
            ParseWarning::ContentFieldMissing(ContentField::EoLine),
            ParseWarning::ContentFieldMissing(ContentField::Subject),
            ParseWarning::ContentFieldMissing(ContentField::Ref),
        ]
    );
}

#[test]
fn test_match_consumes_lines_for_next_field() {
    // SUBJECT appears before and after TAGS: the TAGS match moves the
    // cursor past line 1, so the SUBJECT scan starts at line 2 and takes
    // the second occurrence. The first is behind the cursor and ignored.
    let (content, _) = extract_content("SUBJECT: First\nTAGS: a\nSUBJECT: Second");

    assert_eq!(content.tags, Some(vec!["a".to_string()]));
    assert_eq!(content.subject.as_deref(), Some("Second"));
}

#[test]
fn test_no_fields_still_captures_full_text() {
    let body = "  1. ORDINARY BODY TEXT\n2. NOTHING STRUCTURED HERE  ";
    let (content, warnings) = extract_content(body);

    assert_eq!(content.eoline, None);
    assert_eq!(content.tags, None);
    assert_eq!(content.subject, None);
    assert_eq!(content.ref_line, None);
    assert_eq!(
        content.full_text,
        "1. ORDINARY BODY TEXT\\n2. NOTHING STRUCTURED HERE"
    );
    assert_eq!(warnings.len(), 4);
}

#[test]
fn test_full_text_escapes_control_characters() {
    let (content, _) = extract_content("A\\B\n\tC\r\n");
    assert_eq!(content.full_text, "A\\\\B\\n\\tC");
}

#[test]
fn test_tags_comma_space_separated() {
    let (content, _) = extract_content("TAGS: AID, PFOR, US");
    assert_eq!(
        content.tags,
        Some(vec![
            "AID".to_string(),
            "PFOR".to_string(),
            "US".to_string()
        ])
    );
}

#[test]
fn test_tags_space_separated_yields_final_token() {
    // Tokens must end with ", " or end-of-list; space-only separation is
    // outside the tag grammar, so only the final token qualifies.
    let (content, _) = extract_content("TAGS: AID PFOR US");
    assert_eq!(content.tags, Some(vec!["US".to_string()]));
}

#[test]
fn test_field_prefix_must_start_the_line() {
    let (content, _) = extract_content("SEE TAGS: PFOR\nNOTE SUBJECT: X");
    assert_eq!(content.tags, None);
    assert_eq!(content.subject, None);
}

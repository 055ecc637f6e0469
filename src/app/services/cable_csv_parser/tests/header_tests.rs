//! Tests for the all-or-nothing header block extraction

use super::sample_header_blob;
use crate::app::services::cable_csv_parser::header::extract_header;

#[test]
fn test_full_header_extraction() {
    let header = extract_header(sample_header_blob()).unwrap();

    assert_eq!(header.reference, "R 220927Z AUG 72");
    assert_eq!(header.month, "AUG");
    assert_eq!(header.year, "72");
    assert_eq!(header.from, vec!["AMEMBASSY BUENOS AIRES"]);
    assert_eq!(header.to, vec!["SECSTATE WASHDC 9461"]);
    assert_eq!(header.info, vec!["AMCONSUL CORDOBA"]);
}

#[test]
fn test_multiple_institutions_split_on_line_breaks() {
    let blob = "P 041200Z DEC 72\nFM AMEMBASSY TEHRAN\nAMEMBASSY MOSCOW\nTO SECSTATE WASHDC\nINFO AMCONSUL KHORRAMSHAHR\nAMCONSUL TABRIZ";

    let header = extract_header(blob).unwrap();
    assert_eq!(header.from, vec!["AMEMBASSY TEHRAN", "AMEMBASSY MOSCOW"]);
    assert_eq!(header.to, vec!["SECSTATE WASHDC"]);
    assert_eq!(
        header.info,
        vec!["AMCONSUL KHORRAMSHAHR", "AMCONSUL TABRIZ"]
    );
}

#[test]
fn test_missing_info_yields_present_but_empty_list() {
    let blob = "R 220927Z AUG 72\nFM AMEMBASSY BUENOS AIRES\nTO SECSTATE WASHDC 9461";

    let header = extract_header(blob).unwrap();
    assert_eq!(header.to, vec!["SECSTATE WASHDC 9461"]);
    // "No entries" is distinct from "whole header missing"
    assert!(header.info.is_empty());
}

#[test]
fn test_missing_to_line_fails_whole_header() {
    let blob = "R 220927Z AUG 72\nFM AMEMBASSY BUENOS AIRES";
    assert_eq!(extract_header(blob), None);
}

#[test]
fn test_missing_fm_line_fails_whole_header() {
    let blob = "R 220927Z AUG 72\nTO SECSTATE WASHDC 9461";
    assert_eq!(extract_header(blob), None);
}

#[test]
fn test_free_text_does_not_match() {
    assert_eq!(extract_header("this is not a cable header"), None);
    assert_eq!(extract_header(""), None);
}

#[test]
fn test_reference_fragment_with_trailing_section() {
    // The reference line may continue after the year token
    let blob = "R 220927Z AUG 72 XYZ1\nFM AMEMBASSY TEHRAN\nTO SECSTATE WASHDC 9461";

    let header = extract_header(blob).unwrap();
    assert_eq!(header.reference, "R 220927Z AUG 72 XYZ1");
    assert_eq!(header.month, "AUG");
    assert_eq!(header.year, "72");
}

#[test]
fn test_carriage_return_line_endings() {
    let blob =
        "R 220927Z AUG 72\r\nFM AMEMBASSY BUENOS AIRES\r\nTO SECSTATE WASHDC 9461\r\nINFO AMCONSUL CORDOBA";

    let header = extract_header(blob).unwrap();
    assert_eq!(header.from, vec!["AMEMBASSY BUENOS AIRES"]);
    assert_eq!(header.to, vec!["SECSTATE WASHDC 9461"]);
    assert_eq!(header.info, vec!["AMCONSUL CORDOBA"]);
}

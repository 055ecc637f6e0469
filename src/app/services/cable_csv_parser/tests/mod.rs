//! Test utilities and fixtures for cable CSV parser testing
//!
//! Shared sample blobs and record builders used across the test modules.

use csv::StringRecord;

// Test modules
mod content_tests;
mod header_tests;

/// A well-formed header blob with FM, TO, and INFO sections
pub fn sample_header_blob() -> &'static str {
    "R 220927Z AUG 72\nFM AMEMBASSY BUENOS AIRES\nTO SECSTATE WASHDC 9461\nINFO AMCONSUL CORDOBA"
}

/// A well-formed content blob with all four optional fields present
pub fn sample_content_blob() -> &'static str {
    "E. O. 11652: N/A\nTAGS: PFOR, PINT\nSUBJECT: GRAIN SHIPMENTS\nREF: STATE 106206\n\n1. DETAILS FOLLOW."
}

/// The eight fields of a fully valid cable record, in order
pub fn sample_record_fields() -> Vec<String> {
    vec![
        "1".to_string(),
        "12/28/1966 18:48".to_string(),
        "66BUENOSAIRES2481".to_string(),
        "Embassy Buenos Aires".to_string(),
        "UNCLASSIFIED".to_string(),
        "66STATE106206".to_string(),
        sample_header_blob().to_string(),
        sample_content_blob().to_string(),
    ]
}

/// Build a `StringRecord` from owned field values
pub fn record_from(fields: Vec<String>) -> StringRecord {
    StringRecord::from(fields)
}

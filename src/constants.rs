//! Application constants for the cable processor
//!
//! Record grammar constants, CSV dialect settings, and output defaults used
//! throughout the application.

// =============================================================================
// Record Grammar
// =============================================================================

/// Number of fields every cable record must carry
pub const RECORD_FIELD_COUNT: usize = 8;

/// Positions of the eight fields within a cable record
pub mod field_index {
    /// Opaque identifier, copied verbatim into the cable node
    pub const ID: usize = 0;

    /// Timestamp in `MM/DD/YYYY HH:MM` format
    pub const DATETIME: usize = 1;

    /// Reference code (e.g. "66BUENOSAIRES2481")
    pub const REFERENCE: usize = 2;

    /// Originating post (e.g. "Embassy Buenos Aires")
    pub const ORIGIN: usize = 3;

    /// Classification level (e.g. "UNCLASSIFIED")
    pub const CLASSIFICATION: usize = 4;

    /// `|`-separated source references, may be empty
    pub const SOURCES: usize = 5;

    /// Multi-line header blob (ref/date line, FM, TO, optional INFO)
    pub const HEADER: usize = 6;

    /// Free-text message body
    pub const CONTENT: usize = 7;
}

/// Timestamp format of the datetime field (24-hour, no seconds)
pub const CABLE_DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Separator between entries in the sources field
pub const SOURCES_SEPARATOR: char = '|';

// =============================================================================
// CSV Dialect
// =============================================================================

/// Field delimiter in cable archive files
pub const CSV_DELIMITER: u8 = b',';

/// Quote character wrapping multi-line field values
pub const CSV_QUOTE: u8 = b'"';

/// Escape character used inside quoted values
pub const CSV_ESCAPE: u8 = b'\\';

// =============================================================================
// Output
// =============================================================================

/// Root element name of the generated XML document
pub const XML_ROOT_ELEMENT: &str = "root";

/// Extension given to generated XML files
pub const XML_OUTPUT_EXTENSION: &str = "xml";

/// Extension of cable archive input files
pub const CSV_INPUT_EXTENSION: &str = "csv";

/// Suffix of the per-file report written by the validate command
pub const VALIDATION_REPORT_SUFFIX: &str = ".report.txt";

//! Data models for cable processing
//!
//! This module contains the document tree produced by the parser: a
//! [`Document`] of [`Cable`] nodes, each assembled from one 8-field CSV
//! record. Every optional field is either fully populated or fully absent;
//! no empty placeholders are ever emitted.

// =============================================================================
// Document Tree
// =============================================================================

/// Ordered, append-only collection of parsed cables.
///
/// Owned exclusively by a single parse operation for its lifetime, then
/// handed whole to the XML writer. There is no process-wide document state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    cables: Vec<Cable>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self { cables: Vec::new() }
    }

    /// Append a parsed cable. Cables are never mutated after this point.
    pub fn push(&mut self, cable: Cable) {
        self.cables.push(cable);
    }

    /// Number of cables in the document
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    /// True when no cables have been appended
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    /// Iterate cables in append order
    pub fn cables(&self) -> impl Iterator<Item = &Cable> {
        self.cables.iter()
    }
}

// =============================================================================
// Cable Node
// =============================================================================

/// One parsed cable message
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    /// Identifier from the source archive, copied verbatim
    pub id_in_source: String,

    /// Decomposed send timestamp; absent when the timestamp field did not
    /// parse (all-or-nothing, no partial dates)
    pub datetime: Option<CableDateTime>,

    /// Reference code, copied verbatim
    pub reference: String,

    /// Originating post, copied verbatim
    pub origin: String,

    /// Classification level, copied verbatim
    pub classification: String,

    /// Source references in order of appearance; empty when the field was
    /// empty (count 0 is still recorded in the output)
    pub sources: Vec<String>,

    /// Structured header block; absent when the header pattern did not
    /// match in full (no partial header is ever emitted)
    pub header: Option<HeaderBlock>,

    /// Message body block, always present
    pub content: ContentBlock,
}

/// Decomposed cable timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CableDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

// =============================================================================
// Header Block
// =============================================================================

/// Structured header extracted from a cable's preamble.
///
/// Exists only when the whole header grammar matched. Within a matched
/// header an institution list may still be empty (count 0), which is
/// distinct from the header being absent altogether.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBlock {
    /// Routing reference and date fragment (e.g. "R 220927Z AUG 72")
    pub reference: String,

    /// Three-letter month token from the reference fragment
    pub month: String,

    /// Two-digit year from the reference fragment
    pub year: String,

    /// Sending institutions, in order of appearance
    pub from: Vec<String>,

    /// Receiving institutions, in order of appearance
    pub to: Vec<String>,

    /// Info-copy institutions, in order of appearance
    pub info: Vec<String>,
}

// =============================================================================
// Content Block
// =============================================================================

/// Fields extracted from a cable's free-text body.
///
/// Each of the first four fields is independently optional; a missing field
/// never suppresses the others. `full_text` is always captured.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    /// Classification authority line (begins "E.O." or "E. O."), trimmed
    pub eoline: Option<String>,

    /// Tag tokens from the TAGS line, in order; `Some(vec![])` when the
    /// TAGS line matched but carried no parseable tokens
    pub tags: Option<Vec<String>>,

    /// Subject line (begins "SUBJECT:" or "SUBJ:"), trimmed
    pub subject: Option<String>,

    /// Body reference line (begins "REF:"); distinct from the header ref
    pub ref_line: Option<String>,

    /// Whitespace-trimmed, control-escaped copy of the entire body
    pub full_text: String,
}

//! XML serialization of cable documents
//!
//! Renders an assembled [`Document`](crate::app::models::Document) into
//! indented XML and writes it to disk. Serialization failures are reported
//! to the caller but never affect the parser's state or output.

pub mod writer;

pub use writer::XmlWriter;

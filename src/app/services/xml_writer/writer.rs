//! Document-tree-to-XML rendering
//!
//! Walks the document tree and emits one `<cable>` element per record.
//! Optional blocks (datetime scalars, header) are omitted entirely when
//! absent; list blocks always carry an explicit `count` attribute so an
//! empty list is distinguishable downstream.

use std::io;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use crate::app::models::{Cable, ContentBlock, Document, HeaderBlock};
use crate::constants::XML_ROOT_ELEMENT;
use crate::{Error, Result};

/// XML writer for cable documents
#[derive(Debug, Clone)]
pub struct XmlWriter {
    indent_size: usize,
}

impl XmlWriter {
    /// Create a writer producing 2-space-indented output
    pub fn new() -> Self {
        Self { indent_size: 2 }
    }

    /// Render a document as an indented XML string.
    ///
    /// An empty document is the "nothing to serialize" condition and is
    /// reported as [`Error::EmptyDocument`] rather than producing a bare
    /// root element.
    pub fn to_string(&self, document: &Document) -> Result<String> {
        if document.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent_size);
        self.write_document(&mut writer, document)?;

        String::from_utf8(writer.into_inner()).map_err(|e| {
            Error::xml_writing("generated XML is not valid UTF-8", Some(Box::new(e)))
        })
    }

    /// Render a document and write it to `path`, overwriting any existing
    /// file at that location.
    pub fn write_file(&self, document: &Document, path: &Path) -> Result<()> {
        let xml = self.to_string(document)?;

        std::fs::write(path, xml)
            .map_err(|e| Error::io(format!("unable to write XML file {}", path.display()), e))?;

        info!(
            "Wrote {} cable(s) to {}",
            document.len(),
            path.display()
        );
        Ok(())
    }

    fn write_document<W: io::Write>(&self, w: &mut Writer<W>, document: &Document) -> Result<()> {
        w.write_event(Event::Start(BytesStart::new(XML_ROOT_ELEMENT)))
            .map_err(event_error)?;

        for cable in document.cables() {
            self.write_cable(w, cable)?;
        }

        w.write_event(Event::End(BytesEnd::new(XML_ROOT_ELEMENT)))
            .map_err(event_error)?;
        Ok(())
    }

    fn write_cable<W: io::Write>(&self, w: &mut Writer<W>, cable: &Cable) -> Result<()> {
        let mut open = BytesStart::new("cable");
        open.push_attribute(("idInSource", cable.id_in_source.as_str()));
        w.write_event(Event::Start(open)).map_err(event_error)?;

        if let Some(dt) = &cable.datetime {
            text_element(w, "year", &dt.year.to_string())?;
            text_element(w, "month", &dt.month.to_string())?;
            text_element(w, "day", &dt.day.to_string())?;
            text_element(w, "hour", &dt.hour.to_string())?;
            text_element(w, "minute", &dt.minute.to_string())?;
        }

        text_element(w, "reference", &cable.reference)?;
        text_element(w, "origin", &cable.origin)?;
        text_element(w, "classification", &cable.classification)?;

        counted_list(w, "sources", "source", &cable.sources)?;

        if let Some(header) = &cable.header {
            self.write_header(w, header)?;
        }

        self.write_content(w, &cable.content)?;

        w.write_event(Event::End(BytesEnd::new("cable")))
            .map_err(event_error)?;
        Ok(())
    }

    fn write_header<W: io::Write>(&self, w: &mut Writer<W>, header: &HeaderBlock) -> Result<()> {
        w.write_event(Event::Start(BytesStart::new("header")))
            .map_err(event_error)?;

        text_element(w, "ref", &header.reference)?;
        text_element(w, "month", &header.month)?;
        text_element(w, "year", &header.year)?;

        counted_list(w, "from", "institution", &header.from)?;
        counted_list(w, "to", "institution", &header.to)?;
        counted_list(w, "info", "institution", &header.info)?;

        w.write_event(Event::End(BytesEnd::new("header")))
            .map_err(event_error)?;
        Ok(())
    }

    fn write_content<W: io::Write>(&self, w: &mut Writer<W>, content: &ContentBlock) -> Result<()> {
        w.write_event(Event::Start(BytesStart::new("content")))
            .map_err(event_error)?;

        if let Some(eoline) = &content.eoline {
            text_element(w, "eoline", eoline)?;
        }

        if let Some(tags) = &content.tags {
            counted_list(w, "tags", "tag", tags)?;
        }

        if let Some(subject) = &content.subject {
            text_element(w, "subject", subject)?;
        }

        if let Some(ref_line) = &content.ref_line {
            text_element(w, "ref", ref_line)?;
        }

        text_element(w, "fullText", &content.full_text)?;

        w.write_event(Event::End(BytesEnd::new("content")))
            .map_err(event_error)?;
        Ok(())
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `<name>value</name>`
fn text_element<W: io::Write>(w: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))
        .map_err(event_error)?;
    w.write_event(Event::Text(BytesText::new(value)))
        .map_err(event_error)?;
    w.write_event(Event::End(BytesEnd::new(name)))
        .map_err(event_error)?;
    Ok(())
}

/// Write a list block carrying an explicit count attribute, e.g.
/// `<sources count="2"><source>A</source><source>B</source></sources>`.
fn counted_list<W: io::Write>(
    w: &mut Writer<W>,
    block_name: &str,
    entry_name: &str,
    entries: &[String],
) -> Result<()> {
    let mut open = BytesStart::new(block_name);
    open.push_attribute(("count", entries.len().to_string().as_str()));

    if entries.is_empty() {
        w.write_event(Event::Empty(open)).map_err(event_error)?;
        return Ok(());
    }

    w.write_event(Event::Start(open)).map_err(event_error)?;
    for entry in entries {
        text_element(w, entry_name, entry)?;
    }
    w.write_event(Event::End(BytesEnd::new(block_name)))
        .map_err(event_error)?;
    Ok(())
}

fn event_error<E>(source: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::xml_writing("failed to write XML event", Some(Box::new(source)))
}

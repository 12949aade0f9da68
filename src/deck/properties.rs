//! Document properties (docProps parts).

use crate::common::escape_xml;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

/// Document core properties (metadata).
///
/// Stored in `docProps/core.xml`. Timestamps are only emitted when set, so a
/// presentation built from fixed inputs serializes to identical bytes on
/// every run.
#[derive(Debug, Clone, Default)]
pub struct DocProperties {
    /// Document title
    pub title: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocProperties {
    /// Create a new empty properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set who last modified the document.
    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    /// Set the creation date.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the modification date.
    pub fn modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn core_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        if let Some(ref title) = self.title {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_xml(title));
            xml.push_str("</dc:title>");
        }

        if let Some(ref creator) = self.creator {
            xml.push_str("<dc:creator>");
            xml.push_str(&escape_xml(creator));
            xml.push_str("</dc:creator>");
        }

        if let Some(ref last_modified_by) = self.last_modified_by {
            xml.push_str("<cp:lastModifiedBy>");
            xml.push_str(&escape_xml(last_modified_by));
            xml.push_str("</cp:lastModifiedBy>");
        }

        if let Some(ref created) = self.created {
            xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&created.format("%Y-%m-%dT%H:%M:%SZ").to_string());
            xml.push_str("</dcterms:created>");
        }

        if let Some(ref modified) = self.modified {
            xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&modified.format("%Y-%m-%dT%H:%M:%SZ").to_string());
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Generate app.xml (extended properties) content.
    pub fn app_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>hacktrack-deck</Application>");
        xml.push_str("<PresentationFormat>Widescreen</PresentationFormat>");
        let _ = write!(xml, "<Slides>{}</Slides>", slide_count);
        xml.push_str("</Properties>");
        xml
    }
}

//! The presentation object.

use crate::common::units::inches;
use crate::deck::error::Result;
use crate::deck::properties::DocProperties;
use crate::deck::slide::{Layout, Slide};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// A presentation under construction.
///
/// Slide dimensions are in EMUs (English Metric Units, 914400 EMU = 1 inch).
#[derive(Debug)]
pub struct Presentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document properties (docProps parts)
    properties: DocProperties,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(10.0),
            slide_height: inches(7.5),
            properties: DocProperties::new(),
        }
    }

    /// Create a new empty presentation at 10" x 5.625" (16:9).
    pub fn new_widescreen() -> Self {
        let mut pres = Self::new();
        pres.slide_height = inches(5.625);
        pres
    }

    /// Add a new slide based on the given layout.
    pub fn add_slide(&mut self, layout: Layout) -> &mut Slide {
        // Slide IDs must be >= 256 per the PresentationML schema
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id, layout));
        self.slides.last_mut().unwrap()
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Get the document properties.
    pub fn properties(&self) -> &DocProperties {
        &self.properties
    }

    /// Get a mutable reference to the document properties.
    pub fn properties_mut(&mut self) -> &mut DocProperties {
        &mut self.properties
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - Relationship IDs for the slides, in slide order.
    ///   The slide master is always rId1; slide rels are created after it by
    ///   the package assembler.
    pub(crate) fn presentation_xml(&self, slide_rel_ids: &[String]) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids
                    .get(index)
                    .map(|s| s.as_str())
                    .unwrap_or("rId2");
                let _ = write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                );
            }
            xml.push_str("</p:sldIdLst>");
        }

        let _ = write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        );
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        xml
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::deck::package::to_bytes(self)
    }

    /// Save the presentation to a .pptx file, replacing any existing file at
    /// that path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::deck::package::save(self, path)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_widescreen_dimensions() {
        let pres = Presentation::new_widescreen();
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 5_143_500);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = Presentation::new_widescreen();
        pres.add_slide(Layout::Blank);
        pres.add_slide(Layout::TitleAndBody);
        assert_eq!(pres.slide(0).unwrap().slide_id(), 256);
        assert_eq!(pres.slide(1).unwrap().slide_id(), 257);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new_widescreen();
        pres.add_slide(Layout::TitleAndBody);
        pres.add_slide(Layout::Blank);

        let xml = pres.presentation_xml(&["rId2".to_string(), "rId3".to_string()]);
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
    }

    #[test]
    fn test_empty_presentation_has_no_slide_list() {
        let pres = Presentation::new_widescreen();
        let xml = pres.presentation_xml(&[]);
        assert!(!xml.contains("<p:sldIdLst>"));
    }
}

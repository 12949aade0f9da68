//! Slide types and XML generation.

use crate::deck::format::TextFormat;
use crate::deck::shape::{Paragraph, TextBox, write_run_props};
use std::fmt::Write as FmtWrite;

/// The slide layout a slide is based on.
///
/// Only the two layouts the deck actually uses are shipped in the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Title placeholder plus a bulleted body placeholder.
    TitleAndBody,
    /// No placeholders; content is added as free text boxes.
    Blank,
}

impl Layout {
    /// Index of the layout part (`slideLayout<N>.xml`).
    pub(crate) fn part_index(self) -> usize {
        match self {
            Self::TitleAndBody => 1,
            Self::Blank => 2,
        }
    }
}

/// A slide in a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier within the presentation)
    pub(crate) slide_id: u32,
    /// Layout this slide is based on
    layout: Layout,
    /// Title placeholder text, if set
    title: Option<(String, TextFormat)>,
    /// Body placeholder paragraphs (bullets)
    body: Vec<Paragraph>,
    /// Free text boxes
    shapes: Vec<TextBox>,
}

impl Slide {
    // Shape IDs within a slide: 1 = group, 2 = title, 3 = body, 4+ = text boxes.
    const FIRST_TEXT_BOX_ID: u32 = 4;

    pub(crate) fn new(slide_id: u32, layout: Layout) -> Self {
        Self {
            slide_id,
            layout,
            title: None,
            body: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the layout this slide is based on.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Set the title placeholder text.
    pub fn set_title(&mut self, title: &str, format: TextFormat) {
        self.title = Some((title.to_string(), format));
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(|(t, _)| t.as_str())
    }

    /// Append a bullet paragraph to the body placeholder.
    ///
    /// Empty strings are kept: they render as blank lines so the bullet
    /// count in the file matches the supplied list.
    pub fn add_body_paragraph(&mut self, text: &str, size: f64) {
        self.body.push(Paragraph::new(text, TextFormat::new().size(size)));
    }

    /// Set the body placeholder from a newline-separated block, one
    /// paragraph per line.
    pub fn set_body_text(&mut self, text: &str, size: f64) {
        self.body = text
            .split('\n')
            .map(|line| Paragraph::new(line, TextFormat::new().size(size)))
            .collect();
    }

    /// Get the number of body paragraphs.
    pub fn body_paragraph_count(&self) -> usize {
        self.body.len()
    }

    /// Add a text box to the slide. Position and extent are in EMUs.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut TextBox {
        let shape_id = self.shapes.len() as u32 + Self::FIRST_TEXT_BOX_ID;
        self.shapes.push(TextBox::new(shape_id, x, y, width, height));
        self.shapes.last_mut().unwrap()
    }

    /// Get the number of text boxes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate the `p:sld` part XML for this slide.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some((ref title, ref format)) = self.title {
            self.write_title_shape(&mut xml, title, format);
        }

        if !self.body.is_empty() {
            self.write_body_shape(&mut xml);
        }

        for shape in &self.shapes {
            shape.write_xml(&mut xml);
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        xml
    }

    /// Write the title placeholder shape.
    fn write_title_shape(&self, xml: &mut String, title: &str, format: &TextFormat) {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p>");
        if let Some(align) = format.align {
            let _ = write!(xml, r#"<a:pPr algn="{}"/>"#, align.attr());
        }
        xml.push_str("<a:r>");
        write_run_props(xml, format);
        let _ = write!(xml, "<a:t>{}</a:t>", crate::common::escape_xml(title));
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
    }

    /// Write the body placeholder shape with one paragraph per bullet.
    fn write_body_shape(&self, xml: &mut String) {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Content Placeholder 2"/>"#);
        xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
        xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for para in &self.body {
            para.write_xml(xml);
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
    }
}

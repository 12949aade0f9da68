//! Text box shapes and paragraph rendering.

use crate::common::escape_xml;
use crate::common::units::centipoints;
use crate::deck::format::TextFormat;
use std::fmt::Write as FmtWrite;

/// A single paragraph of styled text.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) format: TextFormat,
    /// Indent level (0 = top level)
    pub(crate) level: u8,
}

impl Paragraph {
    /// Create a paragraph at the top indent level.
    pub fn new(text: &str, format: TextFormat) -> Self {
        Self {
            text: text.to_string(),
            format,
            level: 0,
        }
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render this paragraph as an `a:p` element.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:p>");

        // Paragraph properties: indent level and alignment
        if self.level > 0 || self.format.align.is_some() {
            xml.push_str("<a:pPr");
            if self.level > 0 {
                let _ = write!(xml, r#" lvl="{}""#, self.level);
            }
            if let Some(align) = self.format.align {
                let _ = write!(xml, r#" algn="{}""#, align.attr());
            }
            xml.push_str("/>");
        }

        if self.text.is_empty() {
            // An empty line still counts as a paragraph in the output
            xml.push_str("<a:endParaRPr lang=\"en-US\"");
            if let Some(size) = self.format.size {
                let _ = write!(xml, " sz=\"{}\"", centipoints(size));
            }
            xml.push_str("/>");
        } else {
            xml.push_str("<a:r>");
            write_run_props(xml, &self.format);
            let _ = write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text));
            xml.push_str("</a:r>");
        }

        xml.push_str("</a:p>");
    }
}

/// Render run properties (`a:rPr`) for a format.
pub(crate) fn write_run_props(xml: &mut String, format: &TextFormat) {
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

    if let Some(size) = format.size {
        let _ = write!(xml, " sz=\"{}\"", centipoints(size));
    }
    if format.bold == Some(true) {
        xml.push_str(" b=\"1\"");
    }
    if format.italic == Some(true) {
        xml.push_str(" i=\"1\"");
    }
    if format.underline == Some(true) {
        xml.push_str(" u=\"sng\"");
    }

    xml.push('>');

    if let Some(color) = format.color {
        let _ = write!(
            xml,
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            color.to_hex()
        );
    }
    if let Some(ref font) = format.font {
        let _ = write!(xml, "<a:latin typeface=\"{}\"/>", escape_xml(font));
    }

    xml.push_str("</a:rPr>");
}

/// A text box shape on a slide.
///
/// Unlike placeholder text, a text box carries its own position and extent
/// in EMUs and may hold several paragraphs.
#[derive(Debug, Clone)]
pub struct TextBox {
    /// Shape ID (unique within the slide)
    pub(crate) shape_id: u32,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) paragraphs: Vec<Paragraph>,
}

impl TextBox {
    pub(crate) fn new(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            paragraphs: Vec::new(),
        }
    }

    /// Set the text of this box, one paragraph per line.
    ///
    /// A newline-separated block becomes one paragraph per line, each with
    /// the same format.
    pub fn set_text(&mut self, text: &str, format: TextFormat) -> &mut Self {
        self.paragraphs = text
            .split('\n')
            .map(|line| Paragraph::new(line, format.clone()))
            .collect();
        self
    }

    /// Append a single paragraph.
    pub fn add_paragraph(&mut self, text: &str, format: TextFormat) -> &mut Self {
        self.paragraphs.push(Paragraph::new(text, format));
        self
    }

    /// Get the number of paragraphs in this box.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Render this text box as a `p:sp` element.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        let _ = write!(
            xml,
            r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
            self.shape_id, self.shape_id
        );
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        let _ = write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y);
        let _ = write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height);
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            xml.push_str("<a:p><a:endParaRPr lang=\"en-US\"/></a:p>");
        } else {
            for para in &self.paragraphs {
                para.write_xml(xml);
            }
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
    }
}

//! Format types for presentation text.

use crate::deck::error::{DeckError, Result};

/// An RGB color, serialized as six uppercase hex digits (`a:srgbClr val`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    /// Create a color from component values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a six-hex-digit string such as `"666EF1"`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DeckError::InvalidColor(format!(
                "expected six hex digits, got '{}'",
                hex
            )));
        }
        // Length checked above, the slices are in bounds
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap();
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap();
        Ok(Self { r, g, b })
    }

    /// Format as six uppercase hex digits.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// The `algn` attribute value for this alignment.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Text formatting properties for a paragraph and its run.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color
    pub color: Option<RgbColor>,
    /// Paragraph alignment
    pub align: Option<Align>,
}

impl TextFormat {
    /// Create an empty format (everything inherited from the layout).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// Set the font size in points.
    pub fn size(mut self, points: f64) -> Self {
        self.size = Some(points);
        self
    }

    /// Set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underline.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the paragraph alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

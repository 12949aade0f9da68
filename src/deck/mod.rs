//! Presentation object model and .pptx writer.
//!
//! A [`Presentation`] is built slide by slide, then serialized into an OPC
//! package: generated parts (presentation.xml, one part per slide, document
//! properties) plus static parts (slide master, layouts, theme, view/pres
//! properties) embedded at compile time.

pub mod error;
pub mod format;
pub mod package;
pub mod pres;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod template;

pub use error::{DeckError, Result};
pub use format::{Align, RgbColor, TextFormat};
pub use pres::Presentation;
pub use properties::DocProperties;
pub use shape::TextBox;
pub use slide::{Layout, Slide};

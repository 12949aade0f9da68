//! hacktrack-deck - Builds the HackTrack pitch deck as a .pptx file
//!
//! This crate generates the HackTrack presentation (title slide, bulleted
//! content slides, screenshot placeholders, closing slide) and writes it as
//! an Office Open XML presentation package.
//!
//! # Example - Building and saving the deck
//!
//! ```no_run
//! use hacktrack_deck::config::DeckConfig;
//! use hacktrack_deck::content;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig::default();
//! let pres = content::build_deck(&config);
//! pres.save(&config.output.path)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a presentation by hand
//!
//! ```
//! use hacktrack_deck::deck::{Layout, Presentation};
//! use hacktrack_deck::deck::format::TextFormat;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = Presentation::new_widescreen();
//! let slide = pres.add_slide(Layout::TitleAndBody);
//! slide.set_title("Agenda", TextFormat::default());
//! slide.add_body_paragraph("First item", 18.0);
//! let bytes = pres.to_bytes()?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

/// Shared helpers: XML escaping and measurement unit conversions.
pub mod common;

/// Runtime configuration (output path, presenter details).
pub mod config;

/// The fixed HackTrack deck content.
pub mod content;

/// Presentation object model and .pptx writer.
pub mod deck;

/// Logging setup for the CLI.
pub mod logging;

/// Open Packaging Conventions (OPC) layer: parts, relationships, ZIP
/// serialization.
pub mod opc;

// Re-export commonly used types for convenience
pub use config::DeckConfig;
pub use deck::{DeckError, Layout, Presentation, Slide};

//! Helpers shared across the OPC and presentation layers.

pub mod units;
pub mod xml;

pub use xml::escape_xml;

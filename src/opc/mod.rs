//! Open Packaging Conventions (OPC) support.
//!
//! An OPC package is a ZIP archive of parts plus relationship metadata. This
//! module covers the write side only: building parts in memory and
//! serializing them, their relationships, and `[Content_Types].xml` into a
//! `.pptx` container.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use packuri::PackUri;
pub use part::{BlobPart, Part};
pub use pkgwriter::PackageWriter;

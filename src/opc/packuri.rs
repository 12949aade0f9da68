//! The PackUri value type for part names within an OPC package.
//!
//! Pack URIs always begin with a forward slash and use forward slashes as
//! path separators, following the OPC specification.

use crate::opc::error::{OpcError, Result};

/// The pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// Partname of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// A partname within an OPC package (e.g. `/ppt/slides/slide1.xml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackUri {
    uri: String,
}

impl PackUri {
    /// Create a new PackUri. The URI must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "partname must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackUri { uri })
    }

    /// Get the base URI (directory portion), e.g. `/ppt/slides` for
    /// `/ppt/slides/slide1.xml`. For the package pseudo-partname `/`,
    /// returns `/`.
    pub fn base_uri(&self) -> &str {
        if self.uri == "/" {
            return "/";
        }
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Get the filename portion, e.g. `slide1.xml`.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Get the extension (without the leading period), e.g. `xml`.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// Get the ZIP member name for this partname (the URI without its
    /// leading slash).
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Get the partname of the relationships part for this part.
    ///
    /// For `/ppt/presentation.xml` this is
    /// `/ppt/_rels/presentation.xml.rels`; for the package itself it is
    /// `/_rels/.rels`.
    pub fn rels_uri(&self) -> Result<PackUri> {
        let base = self.base_uri();
        let rels = if base == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base, self.filename())
        };
        PackUri::new(rels)
    }

    /// Get the URI as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

//! Package parts.
//!
//! Parts are the fundamental units of content in an OPC package. Each part
//! has a unique partname (PackUri), a content type, and may have
//! relationships to other parts.

use crate::opc::packuri::PackUri;
use crate::opc::rel::Relationships;

/// Trait representing a part in an OPC package.
pub trait Part {
    /// Get the partname of this part.
    fn partname(&self) -> &PackUri;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns its rId. Otherwise creates a new relationship and returns the
    /// new rId.
    fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        let rel = self.rels_mut().get_or_add(reltype, target_ref);
        rel.r_id().to_string()
    }
}

/// A part that stores its content as a byte vector.
///
/// All generated parts in this crate are blobs: the XML is rendered to a
/// string before the part is added to the package.
#[derive(Debug)]
pub struct BlobPart {
    /// The partname (URI) of this part
    partname: PackUri,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl BlobPart {
    /// Create a new BlobPart.
    pub fn new(partname: PackUri, content_type: String, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels: Relationships::new(),
        }
    }

    /// Replace the binary content of this part.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackUri {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_part() {
        let uri = PackUri::new("/ppt/presentation.xml").unwrap();
        let part = BlobPart::new(uri, "application/xml".to_string(), b"<xml/>".to_vec());

        assert_eq!(part.partname().as_str(), "/ppt/presentation.xml");
        assert_eq!(part.content_type(), "application/xml");
        assert_eq!(part.blob(), b"<xml/>");
        assert!(part.rels().is_empty());
    }

    #[test]
    fn test_relate_to() {
        let uri = PackUri::new("/ppt/presentation.xml").unwrap();
        let mut part = BlobPart::new(uri, "application/xml".to_string(), Vec::new());

        let rid = part.relate_to("slides/slide1.xml", "http://example/slide");
        assert_eq!(rid, "rId1");

        // Same target and type yields the same rId
        let again = part.relate_to("slides/slide1.xml", "http://example/slide");
        assert_eq!(again, "rId1");
    }
}

//! The in-memory OPC package.
//!
//! `OpcPackage` holds package-level relationships and the set of parts to be
//! serialized. Parts keep their insertion order so that repeated saves of
//! the same logical package produce identical archives.

use crate::opc::error::{OpcError, Result};
use crate::opc::packuri::PackUri;
use crate::opc::part::Part;
use crate::opc::rel::Relationships;

/// An Open Packaging Convention package under construction.
pub struct OpcPackage {
    /// Package-level relationships (serialized as `/_rels/.rels`)
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(),
            parts: Vec::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Returns an error if a part with the same partname is already present.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Check whether the package contains a part with the given partname.
    pub fn contains(&self, partname: &PackUri) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Get an iterator over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|b| &**b as &dyn Part)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get mutable access to the package-level relationships.
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Add or get a package-level relationship.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        let rel = self.rels.get_or_add(reltype, target_ref);
        rel.r_id().to_string()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

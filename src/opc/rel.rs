//! Relationship objects for OPC packages.
//!
//! Every part that refers to another part does so through a relationship,
//! stored in a sibling `.rels` part. Relationship IDs take the form `rIdN`.

use crate::common::escape_xml;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source part.
#[derive(Debug, Default)]
pub struct Relationships {
    /// Map of relationship ID to Relationship
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship with an explicit ID.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
    ) -> &Relationship {
        let rel = Relationship::new(r_id.clone(), reltype, target_ref);
        self.rels.insert(r_id.clone(), rel);
        // Safe to unwrap since we just inserted it
        self.rels.get(r_id.as_str()).unwrap()
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get or add a relationship to a target part.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns that relationship. Otherwise creates a new one with the next
    /// available rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        // Check if matching relationship already exists
        for rel in self.rels.values() {
            if rel.reltype() == reltype && rel.target_ref() == target_ref {
                // Return the rId to look it up again (to avoid borrow checker issues)
                let r_id = rel.r_id().to_string();
                return self.rels.get(&r_id).unwrap();
            }
        }

        // Create new relationship with next available rId
        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id)
    }

    /// Get the next available relationship ID.
    ///
    /// Generates IDs in the format "rId1", "rId2", etc., filling in gaps if
    /// any exist.
    fn next_r_id(&self) -> String {
        let mut used_numbers: Vec<u32> = self
            .rels
            .keys()
            .filter_map(|r_id| r_id.strip_prefix("rId").and_then(|n| n.parse().ok()))
            .collect();
        used_numbers.sort_unstable();

        // Find first gap or use next number
        let mut next_num = 1u32;
        for &num in &used_numbers {
            match num.cmp(&next_num) {
                std::cmp::Ordering::Equal => next_num += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next_num)
    }

    /// Get an iterator over all relationships.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to XML format.
    ///
    /// Generates the XML for a `.rels` part, with relationships in numeric
    /// rId order for deterministic output.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');

        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by_key(|rel| {
            rel.r_id()
                .strip_prefix("rId")
                .and_then(|n| n.parse::<u32>().ok())
                .unwrap_or(u32::MAX)
        });

        for rel in rels {
            let _ = write!(
                xml,
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            );
            xml.push('\n');
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_r_id() {
        let mut rels = Relationships::new();
        assert_eq!(rels.next_r_id(), "rId1");

        rels.add_relationship("type1".to_string(), "target1".to_string(), "rId1".to_string());
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add_reuses_matching_rel() {
        let mut rels = Relationships::new();

        let rel1 = rels.get_or_add("type1", "target1");
        assert_eq!(rel1.r_id(), "rId1");

        // Getting the same relationship should return the same rId
        let rel2 = rels.get_or_add("type1", "target1");
        assert_eq!(rel2.r_id(), "rId1");

        // Different target should create new relationship
        let rel3 = rels.get_or_add("type1", "target2");
        assert_eq!(rel3.r_id(), "rId2");
    }

    #[test]
    fn test_to_xml_numeric_order() {
        let mut rels = Relationships::new();
        for i in 1..=12 {
            rels.add_relationship(
                "type".to_string(),
                format!("target{}.xml", i),
                format!("rId{}", i),
            );
        }

        let xml = rels.to_xml();
        // rId10 must sort after rId9, not after rId1
        let pos9 = xml.find(r#"Id="rId9""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos9 < pos10);
    }

    #[test]
    fn test_to_xml_shape() {
        let mut rels = Relationships::new();
        rels.get_or_add("http://example/rel", "slides/slide1.xml");

        let xml = rels.to_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}

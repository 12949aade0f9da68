//! Package writer for OPC packages.
//!
//! Serializes an `OpcPackage` to a ZIP archive: `[Content_Types].xml`, the
//! package relationships (`_rels/.rels`), and every part with its
//! relationships.

use crate::common::escape_xml;
use crate::opc::constants::content_type as ct;
use crate::opc::error::Result;
use crate::opc::package::OpcPackage;
use crate::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackUri};
use crate::opc::phys::ZipPkgWriter;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = ZipPkgWriter::new();

        // Write [Content_Types].xml
        Self::write_content_types(&mut phys_writer, package)?;

        // Write package-level relationships (_rels/.rels)
        Self::write_pkg_rels(&mut phys_writer, package)?;

        // Write all parts and their relationships
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    /// Write the [Content_Types].xml part.
    fn write_content_types(phys_writer: &mut ZipPkgWriter, package: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        let blob = cti.to_xml();

        let content_types_uri = PackUri::new(CONTENT_TYPES_URI)?;
        phys_writer.write(&content_types_uri, blob.as_bytes())?;

        Ok(())
    }

    /// Write package-level relationships.
    fn write_pkg_rels(phys_writer: &mut ZipPkgWriter, package: &OpcPackage) -> Result<()> {
        let package_uri = PackUri::new(PACKAGE_URI)?;
        let rels_uri = package_uri.rels_uri()?;
        let rels_xml = package.rels().to_xml();
        phys_writer.write(&rels_uri, rels_xml.as_bytes())?;

        Ok(())
    }

    /// Write all parts and their relationships.
    fn write_parts(phys_writer: &mut ZipPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                let rels_xml = part.rels().to_xml();
                phys_writer.write(&rels_uri, rels_xml.as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: HashMap<String, String>,

    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = HashMap::new();

        // Standard defaults present in every package
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Build ContentTypesItem from an OPC package.
    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }

        cti
    }

    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &PackUri, content_type: &str) {
        let ext = partname.ext();

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Check if an extension/content-type pair is a standard default.
    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!((ext, content_type), ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML))
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push('\n');

        // Write Default elements (sorted by extension)
        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            let content_type = &self.defaults[ext];
            let _ = write!(
                xml,
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
            xml.push('\n');
        }

        // Write Override elements (sorted by partname)
        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            let content_type = &self.overrides[partname];
            let _ = write!(
                xml,
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
            xml.push('\n');
        }

        xml.push_str("</Types>");

        xml
    }
}

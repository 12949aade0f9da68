//! Physical serialization of OPC packages to ZIP archives.

use crate::opc::error::Result;
use crate::opc::packuri::PackUri;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// Physical package writer that streams parts into an in-memory ZIP archive
/// with Deflate compression.
pub struct ZipPkgWriter {
    archive: ZipWriter<std::io::Cursor<Vec<u8>>>,
}

impl ZipPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(std::io::Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the archive.
    ///
    /// Entries carry a fixed modification time so that repeated saves of the
    /// same package are byte-identical.
    pub fn write(&mut self, pack_uri: &PackUri, blob: &[u8]) -> Result<()> {
        let options = FileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.archive.start_file::<_, ()>(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ZipPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_round_trip() {
        let mut writer = ZipPkgWriter::new();
        let pack_uri = PackUri::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let cursor = std::io::Cursor::new(zip_data);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let mut file = archive.by_name("test.txt").unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = ZipPkgWriter::new();

        let content_types = PackUri::new("/[Content_Types].xml").unwrap();
        let rels = PackUri::new("/_rels/.rels").unwrap();
        let pres = PackUri::new("/ppt/presentation.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&pres, b"<presentation/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let cursor = std::io::Cursor::new(zip_data);
        let archive = zip::ZipArchive::new(cursor).unwrap();

        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"_rels/.rels"));
        assert!(names.contains(&"ppt/presentation.xml"));
    }
}

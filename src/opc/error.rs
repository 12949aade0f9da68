//! Error types for OPC package operations.

use thiserror::Error;

/// Result type for OPC operations.
pub type Result<T> = std::result::Result<T, OpcError>;

/// Error types for OPC operations.
#[derive(Error, Debug)]
pub enum OpcError {
    /// Invalid pack URI
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    /// Duplicate part name
    #[error("Duplicate part: {0}")]
    DuplicatePart(String),

    /// Invalid relationship
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

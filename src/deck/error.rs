//! Error types for presentation building and writing.

use thiserror::Error;

/// Result type for presentation operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for presentation operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::OpcError),

    /// Invalid color specification
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

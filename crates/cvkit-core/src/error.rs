//! Error types shared across the cvkit crates.

use thiserror::Error;

/// A shared error type for the cvkit document model and its boundaries.
///
/// Store mutations never produce errors of their own (not-found conditions
/// are silent no-ops); this type covers the import/export and persistence
/// boundaries where parse and I/O failures surface.
#[derive(Error, Debug)]
pub enum CvError {
    /// Entity not found error with type information.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "YAML", etc.
        message: String,
    },

    /// A file offered for import has an extension we do not handle.
    #[error("Unsupported file format: '{file_name}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat { file_name: String },

    /// Export failure (rendering collaborator failed or output could not be produced).
    #[error("Export error: {0}")]
    Export(String),

    /// Storage/persistence layer error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error (should not happen in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CvError {
    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Serialization error.
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates an UnsupportedFormat error.
    pub fn unsupported_format(file_name: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            file_name: file_name.into(),
        }
    }

    /// Creates an Export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }

    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is an unsupported-format error.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Check if this is an export error.
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

impl From<std::io::Error> for CvError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CvError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CvError>`.
pub type Result<T> = std::result::Result<T, CvError>;

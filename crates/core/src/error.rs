//! Common error types shared across the portal crates

/// Standard result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by token storage backends
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

impl StorageError {
    /// Create an unavailable-backend error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a write failure error
    pub fn write_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}

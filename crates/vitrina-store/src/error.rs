//! Error types for store backends.

use vitrina_core::CatalogError;

/// Errors that can occur when working with a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An item with the same name already exists.
    #[error("duplicate item name: {0}")]
    DuplicateName(String),

    /// The store is not available.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a transient error that might succeed on retry.
    /// The catalog core never retries; this is for callers that do.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Io(_))
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::store(err.to_string())
    }
}

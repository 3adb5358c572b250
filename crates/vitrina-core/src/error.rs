//! Error types for the Vitrina catalog.
//!
//! This module defines the error taxonomy used throughout the catalog
//! service. All errors implement the standard `std::error::Error` trait
//! via `thiserror`.
//!
//! # Error Handling Philosophy
//!
//! Vitrina follows Rust's explicit error handling approach:
//! - Operations that can fail return `Result<T, CatalogError>`
//! - Not-found and validation outcomes are values, not control flow
//! - Errors are mapped to HTTP responses at the server boundary
//!
//! # Example
//!
//! ```
//! use vitrina_core::{CatalogError, Result};
//!
//! fn lookup(name: &str) -> Result<String> {
//!     if name.is_empty() {
//!         return Err(CatalogError::not_found(name));
//!     }
//!     Ok(format!("item {}", name))
//! }
//!
//! match lookup("") {
//!     Ok(item) => println!("found: {}", item),
//!     Err(e) => assert!(e.is_not_found()),
//! }
//! ```

use thiserror::Error;

/// Main error type for catalog operations.
///
/// `Clone` is derived so that a failure computed once under the
/// single-flight guarantee can be handed to every concurrent caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A creation request carried an invalid name, price or stock.
    #[error("{0}")]
    Validation(String),

    /// A listing request named a sort field outside the allow-list.
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    /// No item with the given name exists.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The underlying persistence layer failed.
    #[error("store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an invalid-sort-field error carrying the offending token.
    pub fn invalid_sort_field(field: impl Into<String>) -> Self {
        Self::InvalidSortField(field.into())
    }

    /// Creates a not-found error for the given item name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Creates a store error with the given reason.
    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store(reason.into())
    }

    /// Returns true if this error is a not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if the caller is at fault (bad request data).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidSortField(_))
    }
}

/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

//! # Vitrina Store
//!
//! Persistence backends for the Vitrina catalog server.
//!
//! This crate defines the async trait-based store abstraction the catalog
//! service talks to, plus an in-memory backend used as the default
//! persistence engine and as the test double of choice.
//!
//! ## Example
//!
//! ```
//! use vitrina_core::{Item, PageQuery};
//! use vitrina_store::{ItemStore, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), vitrina_store::StoreError> {
//! let store = MemoryStore::new();
//! let saved = store.save(Item::new("Apple", 1.99, 50)).await?;
//! assert!(saved.id().is_some());
//!
//! let (items, total) = store.find_page(&PageQuery::default()).await?;
//! assert_eq!(total, 1);
//! assert_eq!(items[0].name(), "Apple");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod store;

// Re-exports
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::ItemStore;

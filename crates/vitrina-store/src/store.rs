//! Item store trait definition.

use async_trait::async_trait;

use vitrina_core::{Item, PageQuery};

use crate::error::StoreError;

/// A persistent store of catalog items.
///
/// This trait abstracts over persistence engines (in-memory, SQL, ...)
/// so the catalog service can look up and save items without knowing the
/// underlying storage. Implementations must tolerate concurrent calls.
///
/// # Implementors
///
/// - [`MemoryStore`](crate::MemoryStore) - in-memory backend
/// - (Future) `SqlStore` - relational backend
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists an item.
    ///
    /// An item without an id is inserted and gets one assigned; an item
    /// carrying an id replaces the stored row. Item names are unique.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateName` if another item already uses the name
    /// - `StoreError::Unavailable` if the backend is not reachable
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Looks up a single item by its exact name.
    ///
    /// Returns `Ok(None)` when no item with that name exists; absence is
    /// not an error at this layer.
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError>;

    /// Returns one page of items for the given query, together with the
    /// total number of items in the store.
    ///
    /// Sort fields are assumed validated by the caller; unknown fields do
    /// not contribute to the ordering.
    async fn find_page(&self, query: &PageQuery) -> Result<(Vec<Item>, u64), StoreError>;

    /// Performs a health check on the store.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Returns the name of this store backend, for logging.
    fn name(&self) -> &str;
}

//! Application state.

use std::sync::Arc;

use vitrina_store::ItemStore;

use crate::cache::CacheConfig;
use crate::catalog::CatalogService;

/// Application state shared across all handlers.
///
/// The store and both cache regions are constructed once at process start
/// and live for the lifetime of the process; handlers reach them only
/// through the catalog service.
#[derive(Clone)]
pub struct AppState {
    service: Arc<CatalogService>,
}

impl AppState {
    /// Creates the state, wiring the store into a new catalog service.
    pub fn new(store: Arc<dyn ItemStore>, cache_config: CacheConfig) -> Self {
        Self {
            service: Arc::new(CatalogService::new(store, cache_config)),
        }
    }

    /// Returns a reference to the catalog service.
    pub fn service(&self) -> &CatalogService {
        &self.service
    }
}

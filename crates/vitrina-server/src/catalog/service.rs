//! Catalog service.

use std::sync::Arc;

use tracing::{debug, info};

use vitrina_core::{CatalogError, NewItem, PageQuery, validate_sort};
use vitrina_store::ItemStore;

use crate::cache::{CacheConfig, CacheRegion, PageCacheKey};
use crate::handlers::response::{ItemPageResponse, ItemResponse};

/// Orquesta el store persistente y las dos regiones de cache.
///
/// El servicio es el unico dueño de las regiones; ninguna otra parte del
/// server muta estado de cache directamente. Protocolo de invalidacion:
/// todo write vacia la region de paginas completa (cualquier pagina
/// cacheada puede haber quedado obsoleta), y un update de stock ademas
/// evicta la entry puntual del item.
pub struct CatalogService {
    store: Arc<dyn ItemStore>,
    item_cache: CacheRegion<String, ItemResponse>,
    page_cache: CacheRegion<PageCacheKey, ItemPageResponse>,
}

impl CatalogService {
    /// Crea el servicio con sus dos regiones de cache.
    pub fn new(store: Arc<dyn ItemStore>, config: CacheConfig) -> Self {
        info!(store = store.name(), "Catalog service initialized");
        Self {
            store,
            item_cache: CacheRegion::new("items", config.clone()),
            page_cache: CacheRegion::new("pages", config),
        }
    }

    /// Alta de un item nuevo.
    ///
    /// Valida la request, persiste, vacia la region de paginas y puebla
    /// la region puntual con el item recien persistido.
    pub async fn add_item(&self, request: NewItem) -> Result<ItemResponse, CatalogError> {
        request.validate()?;

        let item = self.store.save(request.into_item()).await?;

        self.page_cache.invalidate_all();
        let view = ItemResponse::from(&item);
        self.item_cache.insert(view.name.clone(), view.clone()).await;

        debug!(name = %view.name, "Item added");
        Ok(view)
    }

    /// Lookup puntual read-through sobre la region de items.
    pub async fn get_item(&self, name: &str) -> Result<ItemResponse, CatalogError> {
        let view = self
            .item_cache
            .get_or_compute(name.to_string(), || async {
                match self.store.find_by_name(name).await? {
                    Some(item) => Ok(ItemResponse::from(&item)),
                    None => Err(CatalogError::not_found(name)),
                }
            })
            .await?;

        Ok((*view).clone())
    }

    /// Listado paginado/ordenado, read-through sobre la region de paginas.
    ///
    /// Un sort field fuera del allow-list corta antes de tocar store o
    /// cache.
    pub async fn list_items(&self, query: &PageQuery) -> Result<ItemPageResponse, CatalogError> {
        validate_sort(query)?;

        let key = PageCacheKey::from_query(query);
        let page = self
            .page_cache
            .get_or_compute(key, || async {
                let (items, total_elements) = self.store.find_page(query).await?;
                Ok(ItemPageResponse::new(&items, query, total_elements))
            })
            .await?;

        Ok((*page).clone())
    }

    /// Actualiza el stock de un item existente.
    ///
    /// Tras persistir, evicta la entry puntual y vacia la region de
    /// paginas: el cambio de stock puede alterar el orden o el contenido
    /// de cualquier pagina cacheada.
    pub async fn update_stock(&self, name: &str, stock: u32) -> Result<ItemResponse, CatalogError> {
        let mut item = self
            .store
            .find_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::not_found(name))?;

        item.set_stock(stock);
        let item = self.store.save(item).await?;

        self.item_cache.invalidate(&name.to_string()).await;
        self.page_cache.invalidate_all();

        debug!(name = %name, stock = stock, "Stock updated");
        Ok(ItemResponse::from(&item))
    }

    /// Evicta una entry puntual de la region de items.
    pub async fn evict_item(&self, name: &str) {
        self.item_cache.invalidate(&name.to_string()).await;
    }

    /// Vacia la region de items. Retorna el numero aproximado de entries
    /// que contenia.
    pub fn evict_items(&self) -> u64 {
        let count = self.item_cache.entry_count();
        self.item_cache.invalidate_all();
        count
    }

    /// Vacia la region de paginas. Retorna el numero aproximado de
    /// entries que contenia.
    pub fn evict_pages(&self) -> u64 {
        let count = self.page_cache.entry_count();
        self.page_cache.invalidate_all();
        count
    }

    /// Vacia ambas regiones.
    pub fn evict_all(&self) -> u64 {
        self.evict_items() + self.evict_pages()
    }

    /// Numero aproximado de entries en la region de items.
    pub fn item_entry_count(&self) -> u64 {
        self.item_cache.entry_count()
    }

    /// Numero aproximado de entries en la region de paginas.
    pub fn page_entry_count(&self) -> u64 {
        self.page_cache.entry_count()
    }
}

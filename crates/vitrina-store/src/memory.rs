//! In-memory store backend.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;
use ordered_float::OrderedFloat;
use parking_lot::RwLock;
use tracing::debug;

use vitrina_core::{Item, PageQuery, SortDirection, SortOrder};

use crate::error::StoreError;
use crate::store::ItemStore;

/// In-memory item store.
///
/// Rows live in a `BTreeMap` keyed by the assigned id; a monotonic
/// counter hands out identifiers. Name uniqueness is enforced on save,
/// the way a relational backend would through a unique constraint.
pub struct MemoryStore {
    items: RwLock<BTreeMap<u64, Item>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the number of stored items.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn save(&self, mut item: Item) -> Result<Item, StoreError> {
        let mut items = self.items.write();

        // Name uniqueness: another row may not carry the same name.
        let taken = items
            .values()
            .any(|other| other.name() == item.name() && other.id() != item.id());
        if taken {
            return Err(StoreError::DuplicateName(item.name().to_string()));
        }

        let id = match item.id() {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
                item.set_id(id);
                id
            },
        };
        items.insert(id, item.clone());

        debug!(id = id, name = %item.name(), "Item saved");
        Ok(item)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        let items = self.items.read();
        Ok(items.values().find(|item| item.name() == name).cloned())
    }

    async fn find_page(&self, query: &PageQuery) -> Result<(Vec<Item>, u64), StoreError> {
        let mut rows: Vec<Item> = self.items.read().values().cloned().collect();
        let total = rows.len() as u64;

        rows.sort_by(|a, b| compare_items(a, b, query.sort()));

        let offset = query.page() as usize * query.size() as usize;
        let content: Vec<Item> = rows
            .into_iter()
            .skip(offset)
            .take(query.size() as usize)
            .collect();

        debug!(%query, total = total, returned = content.len(), "Page query");
        Ok((content, total))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Applies the sort orders in sequence until one of them breaks the tie.
/// Fields are validated upstream; an unknown field does not order.
fn compare_items(a: &Item, b: &Item, orders: &[SortOrder]) -> Ordering {
    for order in orders {
        let ordering = match order.field() {
            "name" => a.name().cmp(b.name()),
            "price" => OrderedFloat(a.price()).cmp(&OrderedFloat(b.price())),
            "stock" => a.stock().cmp(&b.stock()),
            _ => Ordering::Equal,
        };
        let ordering = match order.direction() {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

//! Item model and creation requests.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Maximum accepted length of an item name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A catalog item as persisted by a store backend.
///
/// The identifier is assigned by the store on first save; `name`, `price`
/// and `stock` are always present on a persisted item.
///
/// # Example
///
/// ```
/// use vitrina_core::Item;
///
/// let item = Item::new("Apple", 1.99, 50);
/// assert_eq!(item.id(), None);
/// assert_eq!(item.name(), "Apple");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: Option<u64>,
    name: String,
    price: f64,
    stock: u32,
}

impl Item {
    /// Creates a new, not yet persisted item.
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Returns a copy of this item carrying the given store identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the store identifier, if the item has been persisted.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the unique item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the stock quantity.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Assigns the store identifier.
    pub fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    /// Replaces the stock quantity.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }
}

/// Request payload for creating an item.
///
/// Validation happens before any store or cache interaction; the messages
/// match the catalog API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    /// Checks the creation constraints: non-blank name of at most
    /// [`MAX_NAME_LENGTH`] characters and a strictly positive, finite price.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::validation("Item name cannot be blank"));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(CatalogError::validation("Invalid item name size"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CatalogError::validation("Price must be a positive number"));
        }
        Ok(())
    }

    /// Converts the request into a not yet persisted [`Item`].
    pub fn into_item(self) -> Item {
        Item::new(self.name, self.price, self.stock)
    }
}

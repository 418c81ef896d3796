//! # Store
//!
//! The aggregate that owns the catalog and fulfils multi-item orders.
//!
//! ## Order Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order([(A, 3), (B, 1000), (C, 1)])                               │
//! │                                                                         │
//! │   line 1: A.purchase(3)    ✓  stock A -= 3, total += charge             │
//! │   line 2: B.purchase(1000) ✗  InsufficientStock ── returned to caller   │
//! │   line 3: never processed                                               │
//! │                                                                         │
//! │   A keeps its decrement. Nothing is rolled back.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Each line is validated only by `CatalogItem::purchase`; the store does no
//! pre-check of its own.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::item::{CatalogItem, ItemId};

/// One requested line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(item_id: ItemId, quantity: i64) -> Self {
        OrderLine { item_id, quantity }
    }
}

/// Ordered collection of catalog items.
#[derive(Debug, Clone, Default)]
pub struct Store {
    items: Vec<CatalogItem>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Builds a store holding `items` in the given order.
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Store {
            items: items.into_iter().collect(),
        }
    }

    /// Appends an item and returns its id.
    pub fn add_item(&mut self, item: CatalogItem) -> ItemId {
        let id = item.id();
        debug!(item_id = %id, name = item.name(), "item added to store");
        self.items.push(item);
        id
    }

    /// Removes the item with this id. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: ItemId) -> Option<CatalogItem> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(position);
        debug!(item_id = %id, name = item.name(), "item removed from store");
        Some(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut CatalogItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Every item, active or not, in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the active items, in catalog order.
    pub fn list_active(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.is_active()).collect()
    }

    /// Sum of finite stock across the catalog. Unlimited items add nothing.
    ///
    /// Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .filter_map(|item| item.quantity().units())
            .fold(0i64, i64::saturating_add)
    }

    /// Purchases every line left to right and returns the summed charge.
    ///
    /// The first failing line aborts the order with its error. Lines
    /// already purchased stay purchased.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{CatalogItem, OrderLine, Store};
    ///
    /// let mut store = Store::new();
    /// let pixel = store.add_item(CatalogItem::tracked("Google Pixel 7", 500.0, 250).unwrap());
    /// let total = store.place_order(&[OrderLine::new(pixel, 2)]).unwrap();
    /// assert_eq!(total, 1000.0);
    /// ```
    pub fn place_order(&mut self, lines: &[OrderLine]) -> CoreResult<f64> {
        let mut total = 0.0;
        for line in lines {
            let item = self
                .get_mut(line.item_id)
                .ok_or(CoreError::ItemNotFound(line.item_id))?;
            total += item.purchase(line.quantity)?;
        }
        debug!(lines = lines.len(), total, "order placed");
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

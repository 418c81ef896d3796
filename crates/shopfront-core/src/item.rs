//! # Catalog Items
//!
//! One purchasable line in the store, with its stock behaviour.
//!
//! ## Stock Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         StockPolicy                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐   │
//! │  │    Tracked      │   │    Unlimited    │   │       Capped         │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │   │
//! │  │  quantity ≥ 0   │   │  no stock       │   │  quantity ≥ 0        │   │
//! │  │  decrements     │   │  never runs out │   │  max_per_order > 0   │   │
//! │  │  off at zero    │   │  not settable   │   │  off at zero         │   │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Active Flag
//! ```text
//!              stock hits 0 / deactivate()
//!   ┌────────┐ ──────────────────────────► ┌──────────┐
//!   │ Active │                             │ Inactive │
//!   └────────┘ ◄────────────────────────── └──────────┘
//!                     activate()
//! ```
//! A tracked item built with zero stock starts Inactive. Purchasing and
//! restocking never re-activate an item.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::pricing::PricingRule;
use crate::validation::{
    validate_item_name, validate_order_cap, validate_price, validate_quantity, validate_stock,
};

// =============================================================================
// Item Identity
// =============================================================================

/// Identity of an item inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Stock Policy
// =============================================================================

/// How an item's available quantity behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPolicy {
    /// Finite stock.
    Tracked { quantity: i64 },
    /// Non-stocked goods (licences, services).
    Unlimited,
    /// Finite stock with a limit on any single purchase.
    Capped { quantity: i64, max_per_order: i64 },
}

/// Available units as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Units(i64),
    Unlimited,
}

impl StockLevel {
    /// Finite unit count, `None` for unlimited stock.
    pub fn units(&self) -> Option<i64> {
        match self {
            StockLevel::Units(n) => Some(*n),
            StockLevel::Unlimited => None,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, StockLevel::Unlimited)
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::Units(n) => write!(f, "{}", n),
            StockLevel::Unlimited => write!(f, "Unlimited"),
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A product offered by the store.
///
/// Name and price are fixed at construction. Stock and the active flag
/// change through purchases; the promotion may be swapped at any time.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    id: ItemId,
    name: String,
    price: f64,
    policy: StockPolicy,
    active: bool,
    promotion: Option<Arc<PricingRule>>,
}

impl CatalogItem {
    /// Creates an item with finite stock.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{CatalogItem, StockLevel};
    ///
    /// let mut item = CatalogItem::tracked("Widget", 10.0, 5).unwrap();
    /// assert_eq!(item.purchase(3).unwrap(), 30.0);
    /// assert_eq!(item.quantity(), StockLevel::Units(2));
    /// assert!(item.is_active());
    /// ```
    pub fn tracked(name: impl Into<String>, price: f64, quantity: i64) -> CoreResult<Self> {
        validate_stock(quantity)?;
        Self::new(name, price, StockPolicy::Tracked { quantity })
    }

    /// Creates an item that never runs out of stock.
    pub fn unlimited(name: impl Into<String>, price: f64) -> CoreResult<Self> {
        Self::new(name, price, StockPolicy::Unlimited)
    }

    /// Creates an item with finite stock and a per-order limit.
    pub fn capped(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        max_per_order: i64,
    ) -> CoreResult<Self> {
        validate_stock(quantity)?;
        validate_order_cap(max_per_order)?;
        Self::new(
            name,
            price,
            StockPolicy::Capped {
                quantity,
                max_per_order,
            },
        )
    }

    fn new(name: impl Into<String>, price: f64, policy: StockPolicy) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        let mut item = CatalogItem {
            id: ItemId::new(),
            name,
            price,
            policy,
            active: true,
            promotion: None,
        };
        if let Some(quantity) = item.quantity().units() {
            item.store_stock(quantity);
        }
        Ok(item)
    }

    /// Attaches a promotion, builder style.
    pub fn with_promotion(mut self, rule: Arc<PricingRule>) -> Self {
        self.promotion = Some(rule);
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price before any promotion.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    /// Units currently available.
    pub fn quantity(&self) -> StockLevel {
        match self.policy {
            StockPolicy::Tracked { quantity } | StockPolicy::Capped { quantity, .. } => {
                StockLevel::Units(quantity)
            }
            StockPolicy::Unlimited => StockLevel::Unlimited,
        }
    }

    /// Overwrites the stock level. Reaching zero deactivates the item; a
    /// positive value does not re-activate it.
    ///
    /// ## Errors
    /// - `UnsupportedOperation` for unlimited items
    /// - `InvalidArgument` for a negative quantity
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if matches!(self.policy, StockPolicy::Unlimited) {
            return Err(CoreError::UnsupportedOperation {
                name: self.name.clone(),
                operation: "set quantity".to_string(),
            });
        }
        validate_stock(quantity)?;
        self.store_stock(quantity);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the item purchasable. Stock is left as is.
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn promotion(&self) -> Option<&PricingRule> {
        self.promotion.as_deref()
    }

    pub fn set_promotion(&mut self, rule: Arc<PricingRule>) {
        self.promotion = Some(rule);
    }

    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }

    /// One-line summary used by listings.
    ///
    /// Format: `<name>, Price: <price>, Quantity: <qty|Unlimited>`
    /// followed by `, Promotion: <name>` and `, Max per order: <n>` when
    /// they apply.
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{}, Price: {}, Quantity: {}",
            self.name,
            self.price,
            self.quantity()
        );
        if let Some(rule) = &self.promotion {
            line.push_str(&format!(", Promotion: {}", rule.name()));
        }
        if let StockPolicy::Capped { max_per_order, .. } = self.policy {
            line.push_str(&format!(", Max per order: {}", max_per_order));
        }
        line
    }

    /// Buys `quantity` units and returns the total charge.
    ///
    /// ## Checks (in order)
    /// ```text
    /// purchase(q)
    ///   │
    ///   ├── inactive?                 → InactiveItem
    ///   ├── q <= 0?                   → InvalidArgument
    ///   ├── capped and q > max?       → OrderCapExceeded
    ///   ├── finite and q > stock?     → InsufficientStock
    ///   │
    ///   ├── charge = promotion.apply(price, q) or price × q
    ///   └── finite: stock -= q (deactivates at zero)
    /// ```
    /// A failed purchase leaves the item untouched.
    pub fn purchase(&mut self, quantity: i64) -> CoreResult<f64> {
        if !self.active {
            return Err(CoreError::InactiveItem {
                name: self.name.clone(),
            });
        }
        validate_quantity(quantity)?;

        if let StockPolicy::Capped { max_per_order, .. } = self.policy {
            if quantity > max_per_order {
                return Err(CoreError::OrderCapExceeded {
                    name: self.name.clone(),
                    max_per_order,
                    requested: quantity,
                });
            }
        }

        let remaining = match self.quantity().units() {
            Some(available) if quantity > available => {
                return Err(CoreError::InsufficientStock {
                    name: self.name.clone(),
                    available,
                    requested: quantity,
                });
            }
            Some(available) => Some(available - quantity),
            None => None,
        };

        let total = match &self.promotion {
            Some(rule) => rule.apply(self.price, quantity),
            None => self.price * quantity as f64,
        };

        if let Some(remaining) = remaining {
            self.store_stock(remaining);
        }
        Ok(total)
    }

    // Finite policies only; callers have already validated `quantity`.
    fn store_stock(&mut self, new_quantity: i64) {
        match &mut self.policy {
            StockPolicy::Tracked { quantity } | StockPolicy::Capped { quantity, .. } => {
                *quantity = new_quantity;
            }
            StockPolicy::Unlimited => return,
        }
        if new_quantity == 0 {
            self.deactivate();
        }
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn thirty_off() -> Arc<PricingRule> {
        Arc::new(PricingRule::percent_discount("30% off!", 30.0).unwrap())
    }

    #[test]
    fn test_widget_lifecycle() {
        let mut item = CatalogItem::tracked("Widget", 10.0, 5).unwrap();

        assert_eq!(item.purchase(3).unwrap(), 30.0);
        assert_eq!(item.quantity(), StockLevel::Units(2));
        assert!(item.is_active());

        assert_eq!(item.purchase(2).unwrap(), 20.0);
        assert_eq!(item.quantity(), StockLevel::Units(0));
        assert!(!item.is_active());

        let err = item.purchase(1).unwrap_err();
        assert!(matches!(err, CoreError::InactiveItem { .. }));
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            CatalogItem::tracked("", 100.0, 10),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(CatalogItem::tracked("Test Product", -100.0, 10).is_err());
        assert!(CatalogItem::tracked("Test Product", 0.0, 10).is_err());
        assert!(CatalogItem::tracked("Test Product", 100.0, -10).is_err());
        assert!(CatalogItem::unlimited("", 125.0).is_err());
        assert!(CatalogItem::capped("Shipping", 10.0, 250, 0).is_err());
        assert!(CatalogItem::capped("Shipping", 10.0, -1, 1).is_err());
    }

    #[test]
    fn test_zero_stock_at_construction_deactivates() {
        let item = CatalogItem::tracked("Empty Shelf", 5.0, 0).unwrap();
        assert!(!item.is_active());

        let item = CatalogItem::capped("Empty Capped", 5.0, 0, 2).unwrap();
        assert!(!item.is_active());
    }

    #[test]
    fn test_purchase_rejects_non_positive_quantity() {
        let mut tracked = CatalogItem::tracked("A", 1.0, 10).unwrap();
        let mut unlimited = CatalogItem::unlimited("B", 1.0).unwrap();
        let mut capped = CatalogItem::capped("C", 1.0, 10, 3).unwrap();

        for item in [&mut tracked, &mut unlimited, &mut capped] {
            assert!(matches!(item.purchase(0), Err(CoreError::InvalidArgument(_))));
            assert!(matches!(item.purchase(-4), Err(CoreError::InvalidArgument(_))));
        }
        assert_eq!(tracked.quantity(), StockLevel::Units(10));
    }

    #[test]
    fn test_purchase_too_large() {
        let mut item = CatalogItem::tracked("Test Product", 100.0, 5).unwrap();
        let err = item.purchase(10).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 5,
                requested: 10,
                ..
            }
        ));
        assert_eq!(item.quantity(), StockLevel::Units(5));
        assert!(item.is_active());
    }

    #[test]
    fn test_inactive_item_rejects_purchase_despite_stock() {
        let mut item = CatalogItem::tracked("Paused", 3.0, 100)
            .unwrap()
            .with_promotion(thirty_off());
        item.deactivate();
        assert!(matches!(item.purchase(1), Err(CoreError::InactiveItem { .. })));

        item.activate();
        assert!(item.purchase(1).is_ok());
    }

    #[test]
    fn test_unlimited_item() {
        let mut item = CatalogItem::unlimited("Windows License", 125.0).unwrap();
        assert!(item.quantity().is_unlimited());

        assert_eq!(item.purchase(1000).unwrap(), 125_000.0);
        assert_eq!(item.quantity(), StockLevel::Unlimited);
        assert!(item.is_active());

        let err = item.set_quantity(10).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_capped_item() {
        let mut item = CatalogItem::capped("Shipping", 10.0, 250, 1).unwrap();

        let err = item.purchase(2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::OrderCapExceeded {
                max_per_order: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(item.purchase(1).unwrap(), 10.0);
        assert_eq!(item.quantity(), StockLevel::Units(249));
    }

    #[test]
    fn test_capped_checks_cap_before_stock() {
        let mut item = CatalogItem::capped("Rare", 1.0, 1, 2).unwrap();
        assert!(matches!(item.purchase(3), Err(CoreError::OrderCapExceeded { .. })));
        assert!(matches!(item.purchase(2), Err(CoreError::InsufficientStock { .. })));
    }

    #[test]
    fn test_set_quantity() {
        let mut item = CatalogItem::tracked("Bose QuietComfort Earbuds", 250.0, 500).unwrap();
        item.set_quantity(1000).unwrap();
        assert_eq!(item.quantity(), StockLevel::Units(1000));

        item.set_quantity(0).unwrap();
        assert!(!item.is_active());

        // restocking does not re-activate
        item.set_quantity(10).unwrap();
        assert!(!item.is_active());

        assert!(matches!(item.set_quantity(-1), Err(CoreError::InvalidArgument(_))));
        assert_eq!(item.quantity(), StockLevel::Units(10));
    }

    #[test]
    fn test_purchase_with_promotion() {
        let mut item = CatalogItem::unlimited("Windows License", 125.0)
            .unwrap()
            .with_promotion(thirty_off());
        assert_eq!(item.purchase(2).unwrap(), 175.0);

        item.clear_promotion();
        assert_eq!(item.purchase(2).unwrap(), 250.0);
    }

    #[test]
    fn test_promotion_is_shared() {
        let rule = Arc::new(PricingRule::third_unit_free("Third One Free!").unwrap());
        let a = CatalogItem::tracked("A", 1.0, 1).unwrap().with_promotion(rule.clone());
        let mut b = CatalogItem::tracked("B", 1.0, 1).unwrap();
        b.set_promotion(rule.clone());

        assert_eq!(Arc::strong_count(&rule), 3);
        assert_eq!(a.promotion().map(PricingRule::name), Some("Third One Free!"));
        assert_eq!(b.promotion(), a.promotion());
    }

    #[test]
    fn test_describe() {
        let item = CatalogItem::tracked("MacBook Air M2", 1450.0, 100).unwrap();
        assert_eq!(item.describe(), "MacBook Air M2, Price: 1450, Quantity: 100");

        let item = CatalogItem::unlimited("Windows License", 125.0)
            .unwrap()
            .with_promotion(thirty_off());
        assert_eq!(
            item.describe(),
            "Windows License, Price: 125, Quantity: Unlimited, Promotion: 30% off!"
        );

        let item = CatalogItem::capped("Shipping", 10.5, 250, 1).unwrap();
        assert_eq!(
            item.to_string(),
            "Shipping, Price: 10.5, Quantity: 250, Max per order: 1"
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = CatalogItem::unlimited("A", 1.0).unwrap();
        let b = CatalogItem::unlimited("A", 1.0).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_unlimited_half_price_max_quantity() {
        let rule = Arc::new(PricingRule::second_unit_half_price("Second Half price!").unwrap());
        let mut item = CatalogItem::unlimited("License", 1.0)
            .unwrap()
            .with_promotion(rule);

        let total = item.purchase(i64::MAX).unwrap();
        assert!(total.is_finite() && total > 0.0);
        assert_eq!(item.quantity(), StockLevel::Unlimited);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// A successful purchase removes exactly q units and the item
            /// goes inactive iff nothing is left.
            #[test]
            fn purchase_decrements_exactly(stock in 1i64..10_000, pick in 0.0f64..1.0) {
                let qty = ((stock as f64 * pick) as i64).clamp(1, stock);
                let mut item = CatalogItem::tracked("Prop", 2.5, stock).unwrap();

                item.purchase(qty).unwrap();

                let left = stock - qty;
                prop_assert_eq!(item.quantity(), StockLevel::Units(left));
                prop_assert_eq!(item.is_active(), left != 0);
            }

            /// Unlimited stock never changes, whatever is bought.
            #[test]
            fn unlimited_never_changes(qty in 1i64..1_000_000) {
                let mut item = CatalogItem::unlimited("Prop", 1.0).unwrap();
                item.purchase(qty).unwrap();
                prop_assert_eq!(item.quantity(), StockLevel::Unlimited);
                prop_assert!(item.is_active());
            }

            /// Over-cap purchases fail even with plenty of stock.
            #[test]
            fn cap_enforced(cap in 1i64..100, over in 1i64..100) {
                let mut item = CatalogItem::capped("Prop", 1.0, 1_000_000, cap).unwrap();
                let result = item.purchase(cap + over);
                let is_cap_error = matches!(result, Err(CoreError::OrderCapExceeded { .. }));
                prop_assert!(is_cap_error);
                prop_assert_eq!(item.quantity(), StockLevel::Units(1_000_000));
            }
        }
    }
}

//! # Catalog Specifications
//!
//! Serializable description of a catalog, turned into a [`Store`] at
//! startup.
//!
//! ## Document Shape
//! ```json
//! {
//!   "promotions": [
//!     { "name": "30% off!", "kind": "percent_discount", "percent": 30 }
//!   ],
//!   "items": [
//!     { "name": "Google Pixel 7", "price": 500,
//!       "stock": { "policy": "tracked", "quantity": 250 } },
//!     { "name": "Windows License", "price": 125,
//!       "stock": { "policy": "unlimited" }, "promotion": "30% off!" },
//!     { "name": "Shipping", "price": 10,
//!       "stock": { "policy": "capped", "quantity": 250, "max_per_order": 1 } }
//!   ]
//! }
//! ```
//! Items name their promotion; every item naming the same promotion
//! shares one `Arc<PricingRule>`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::item::CatalogItem;
use crate::pricing::PricingRule;
use crate::store::Store;

/// Stock policy as written in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum StockSpec {
    Tracked { quantity: i64 },
    Unlimited,
    Capped { quantity: i64, max_per_order: i64 },
}

/// One catalog line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub price: f64,
    pub stock: StockSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

impl ItemSpec {
    pub fn tracked(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        ItemSpec {
            name: name.into(),
            price,
            stock: StockSpec::Tracked { quantity },
            promotion: None,
        }
    }

    pub fn unlimited(name: impl Into<String>, price: f64) -> Self {
        ItemSpec {
            name: name.into(),
            price,
            stock: StockSpec::Unlimited,
            promotion: None,
        }
    }

    pub fn capped(name: impl Into<String>, price: f64, quantity: i64, max_per_order: i64) -> Self {
        ItemSpec {
            name: name.into(),
            price,
            stock: StockSpec::Capped {
                quantity,
                max_per_order,
            },
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }

    fn to_item(&self) -> CoreResult<CatalogItem> {
        match self.stock {
            StockSpec::Tracked { quantity } => CatalogItem::tracked(&self.name, self.price, quantity),
            StockSpec::Unlimited => CatalogItem::unlimited(&self.name, self.price),
            StockSpec::Capped {
                quantity,
                max_per_order,
            } => CatalogItem::capped(&self.name, self.price, quantity, max_per_order),
        }
    }
}

/// A full catalog: promotions plus items in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub promotions: Vec<PricingRule>,
    pub items: Vec<ItemSpec>,
}

impl CatalogSpec {
    /// Parses a catalog document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The demo catalog.
    pub fn sample() -> CoreResult<Self> {
        Ok(CatalogSpec {
            promotions: vec![
                PricingRule::second_unit_half_price("Second Half price!")?,
                PricingRule::third_unit_free("Third One Free!")?,
                PricingRule::percent_discount("30% off!", 30.0)?,
            ],
            items: vec![
                ItemSpec::tracked("MacBook Air M2", 1450.0, 100)
                    .with_promotion("Second Half price!"),
                ItemSpec::tracked("Bose QuietComfort Earbuds", 250.0, 500)
                    .with_promotion("Third One Free!"),
                ItemSpec::tracked("Google Pixel 7", 500.0, 250),
                ItemSpec::unlimited("Windows License", 125.0).with_promotion("30% off!"),
                ItemSpec::capped("Shipping", 10.0, 250, 1),
            ],
        })
    }

    /// Validates every entry and builds the store.
    ///
    /// ## Errors
    /// - `InvalidArgument` for a bad promotion or item, two promotions
    ///   sharing a name, or an item naming a promotion the catalog does
    ///   not define
    pub fn build(self) -> CoreResult<Store> {
        let mut promotions: HashMap<String, Arc<PricingRule>> = HashMap::new();
        for rule in self.promotions {
            rule.validate()?;
            let name = rule.name().to_string();
            if promotions.insert(name.clone(), Arc::new(rule)).is_some() {
                return Err(ValidationError::InvalidFormat {
                    field: "promotion".to_string(),
                    reason: format!("'{}' is defined more than once", name),
                }
                .into());
            }
        }

        let mut store = Store::new();
        for spec in &self.items {
            let mut item = spec.to_item()?;
            if let Some(name) = &spec.promotion {
                let rule = promotions.get(name).ok_or_else(|| {
                    let mut allowed: Vec<String> = promotions.keys().cloned().collect();
                    allowed.sort();
                    ValidationError::NotAllowed {
                        field: "promotion".to_string(),
                        allowed,
                    }
                })?;
                item.set_promotion(Arc::clone(rule));
            }
            store.add_item(item);
        }
        Ok(store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

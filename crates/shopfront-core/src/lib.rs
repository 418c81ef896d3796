//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! Catalog items with stock policies, promotional pricing, and the store's
//! order routine. No I/O happens in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    apps/cli (text menu)                         │    │
//! │  │    list ──► total quantity ──► order ──► quit                   │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  pricing  │  │   item    │  │   store   │  │  catalog  │    │    │
//! │  │   │PricingRule│  │CatalogItem│  │   Store   │  │CatalogSpec│    │    │
//! │  │   │           │  │StockPolicy│  │ OrderLine │  │ ItemSpec  │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO GLOBAL STATE • TYPED ERRORS                       │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - `CatalogItem` and its stock policies
//! - [`pricing`] - Promotions (`PricingRule`)
//! - [`store`] - `Store` and order fulfilment
//! - [`catalog`] - Serializable catalog documents
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shopfront_core::{CatalogItem, OrderLine, PricingRule, Store};
//!
//! let thirty_off = Arc::new(PricingRule::percent_discount("30% off!", 30.0).unwrap());
//!
//! let mut store = Store::new();
//! let license = store.add_item(
//!     CatalogItem::unlimited("Windows License", 125.0)
//!         .unwrap()
//!         .with_promotion(thirty_off),
//! );
//! let shipping = store.add_item(CatalogItem::capped("Shipping", 10.0, 250, 1).unwrap());
//!
//! let total = store
//!     .place_order(&[OrderLine::new(license, 2), OrderLine::new(shipping, 1)])
//!     .unwrap();
//! assert_eq!(total, 185.0);
//! assert_eq!(store.total_quantity(), 249);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod pricing;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogSpec, ItemSpec, StockSpec};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{CatalogItem, ItemId, StockLevel, StockPolicy};
pub use pricing::{PricingKind, PricingRule};
pub use store::{OrderLine, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item or promotion name, in characters.
pub const MAX_NAME_LEN: usize = 200;

//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Bad arguments (wrapped as InvalidArgument)      │
//! │                                                                         │
//! │  CLI (apps/cli)                                                         │
//! │  └── anyhow::Error    - Startup failures with context                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CLI prints message, menu continues │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, stock, requested)
//! 3. Errors are enum variants, never String
//! 4. Errors are returned, never logged by the core

use thiserror::Error;

use crate::item::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is raised at the point of violation and returned to the
/// immediate caller. `Store::place_order` does not recover from any of them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An argument failed validation.
    ///
    /// ## When This Occurs
    /// - Empty item name, non-positive price, negative stock
    /// - Non-positive per-order cap or discount percent
    /// - Purchase quantity of zero or less
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Purchase attempted on a deactivated item.
    #[error("{name} is not active")]
    InactiveItem { name: String },

    /// Requested quantity exceeds the tracked stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line: Google Pixel 7 x 1000
    ///      │
    ///      ▼
    /// Check stock: available=250
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Google Pixel 7", available: 250, requested: 1000 }
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Requested quantity exceeds the item's per-order limit.
    #[error("{name} allows at most {max_per_order} per order, requested {requested}")]
    OrderCapExceeded {
        name: String,
        max_per_order: i64,
        requested: i64,
    },

    /// Operation is not available for this item's stock policy.
    #[error("Cannot {operation} for {name}")]
    UnsupportedOperation { name: String, operation: String },

    /// No item with this id is held by the store.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// A catalog document could not be parsed.
    #[error("Malformed catalog: {0}")]
    CatalogFormat(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::CatalogFormat(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. NaN price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

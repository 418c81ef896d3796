//! # Validation Module
//!
//! Argument validation shared by item constructors, pricing rules and
//! the purchase path.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_item_name, validate_quantity};
//!
//! validate_item_name("MacBook Air M2").unwrap();
//! validate_quantity(5).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most `MAX_NAME_LEN` characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Must be a finite number strictly above zero.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    validate_positive_float("price", price)
}

/// Validates a discount percentage. Any finite positive number passes;
/// values of 100 or more are accepted.
pub fn validate_percent(percent: f64) -> ValidationResult<()> {
    validate_positive_float("percent", percent)
}

/// Validates a stock level (zero allowed).
pub fn validate_stock(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-order cap.
pub fn validate_order_cap(max_per_order: i64) -> ValidationResult<()> {
    if max_per_order <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "max per order".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase quantity.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order line: Bose QuietComfort Earbuds x ?                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(qty) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"                │
/// │       │                                                                 │
/// │       └── OK → cap check, stock check, pricing                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// There is no upper bound here; stock and per-order caps are enforced by
/// the item itself.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

fn validate_positive_float(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

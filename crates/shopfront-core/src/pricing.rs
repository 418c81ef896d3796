//! # Pricing Rules
//!
//! Promotions that compute the total charge for a purchase from the unit
//! price and the requested quantity.
//!
//! ## Rule Catalogue
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind                    Formula (p = unit price, q = quantity)         │
//! │  ─────────────────────   ─────────────────────────────────────────────  │
//! │  PercentDiscount(pct)    (p - p × pct / 100) × q                        │
//! │  SecondUnitHalfPrice     ⌈q/2⌉ × p + ⌊q/2⌋ × p × 0.5                    │
//! │  ThirdUnitFree           (q - ⌊q/3⌋) × p                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are pure and hold no state besides their parameters, so one rule
//! is shared (`Arc<PricingRule>`) by every item it is attached to.
//! A quantity of zero or less is rejected by the item before a rule is
//! ever consulted.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::validation::{validate_item_name, validate_percent, ValidationResult};

// =============================================================================
// Pricing Kind
// =============================================================================

/// The closed set of promotion behaviours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingKind {
    /// Flat percentage off every unit.
    PercentDiscount { percent: f64 },
    /// Every second unit costs half.
    SecondUnitHalfPrice,
    /// Every third unit is free.
    ThirdUnitFree,
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// A named promotion.
///
/// ## Serialization
/// ```json
/// { "name": "30% off!", "kind": "percent_discount", "percent": 30.0 }
/// { "name": "Third One Free!", "kind": "third_unit_free" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    name: String,
    #[serde(flatten)]
    kind: PricingKind,
}

impl PricingRule {
    /// Creates a percentage discount.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::PricingRule;
    ///
    /// let rule = PricingRule::percent_discount("30% off", 30.0).unwrap();
    /// assert_eq!(rule.apply(125.0, 2), 175.0);
    /// ```
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> CoreResult<Self> {
        Self::new(name, PricingKind::PercentDiscount { percent })
    }

    /// Creates a "second unit half price" promotion.
    pub fn second_unit_half_price(name: impl Into<String>) -> CoreResult<Self> {
        Self::new(name, PricingKind::SecondUnitHalfPrice)
    }

    /// Creates a "third unit free" promotion.
    pub fn third_unit_free(name: impl Into<String>) -> CoreResult<Self> {
        Self::new(name, PricingKind::ThirdUnitFree)
    }

    /// Creates a rule of any kind, validating its name and parameters.
    pub fn new(name: impl Into<String>, kind: PricingKind) -> CoreResult<Self> {
        let rule = PricingRule {
            name: name.into(),
            kind,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Checks the invariants a deserialized rule may not have been built
    /// with.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_name(&self.name)?;
        if let PricingKind::PercentDiscount { percent } = self.kind {
            validate_percent(percent)?;
        }
        Ok(())
    }

    /// Display name, shown in item listings.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PricingKind {
        &self.kind
    }

    /// Total charge for `quantity` units at `unit_price`.
    ///
    /// Callers must pass a positive quantity.
    pub fn apply(&self, unit_price: f64, quantity: i64) -> f64 {
        match self.kind {
            PricingKind::PercentDiscount { percent } => {
                let discount = unit_price * percent / 100.0;
                (unit_price - discount) * quantity as f64
            }
            PricingKind::SecondUnitHalfPrice => {
                let full_price_count = quantity / 2 + quantity % 2;
                let half_price_count = quantity / 2;
                full_price_count as f64 * unit_price + half_price_count as f64 * unit_price * 0.5
            }
            PricingKind::ThirdUnitFree => {
                let free_count = quantity / 3;
                (quantity - free_count) as f64 * unit_price
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_percent_discount() {
        let rule = PricingRule::percent_discount("30% off!", 30.0).unwrap();
        assert!(approx_eq(rule.apply(100.0, 1), 70.0));
        assert_eq!(rule.apply(125.0, 2), 175.0);
    }

    #[test]
    fn test_second_unit_half_price() {
        let rule = PricingRule::second_unit_half_price("Second Half price!").unwrap();
        assert_eq!(rule.apply(10.0, 1), 10.0);
        assert_eq!(rule.apply(10.0, 2), 15.0);
        assert_eq!(rule.apply(10.0, 3), 25.0);
        assert_eq!(rule.apply(10.0, 4), 30.0);
    }

    #[test]
    fn test_third_unit_free() {
        let rule = PricingRule::third_unit_free("Third One Free!").unwrap();
        assert_eq!(rule.apply(250.0, 2), 500.0);
        assert_eq!(rule.apply(250.0, 3), 500.0);
        assert_eq!(rule.apply(250.0, 7), 1250.0);
    }

    #[test]
    fn test_percent_must_be_positive() {
        let err = PricingRule::percent_discount("nothing off", 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(PricingRule::percent_discount("negative", -5.0).is_err());
    }

    #[test]
    fn test_name_is_required() {
        assert!(PricingRule::third_unit_free("").is_err());
    }

    #[test]
    fn test_serde_shape() {
        let rule = PricingRule::percent_discount("30% off!", 30.0).unwrap();
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["name"], "30% off!");
        assert_eq!(json["kind"], "percent_discount");
        assert_eq!(json["percent"], 30.0);

        let parsed: PricingRule =
            serde_json::from_str(r#"{"name":"Third One Free!","kind":"third_unit_free"}"#).unwrap();
        assert_eq!(parsed.kind(), &PricingKind::ThirdUnitFree);
        assert_eq!(parsed.name(), "Third One Free!");
    }

    #[test]
    fn test_validate_catches_deserialized_bad_percent() {
        let parsed: PricingRule =
            serde_json::from_str(r#"{"name":"broken","kind":"percent_discount","percent":-1}"#)
                .unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_half_price_at_max_quantity() {
        let rule = PricingRule::second_unit_half_price("half").unwrap();
        let total = rule.apply(1.0, i64::MAX);
        assert!(total.is_finite());
        assert!(total > 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Promotions never charge more than the undiscounted total.
            #[test]
            fn never_exceeds_list_price(price in 0.01f64..10_000.0, qty in 1i64..1_000) {
                let full = price * qty as f64;
                let rules = [
                    PricingRule::percent_discount("pct", 15.0).unwrap(),
                    PricingRule::second_unit_half_price("half").unwrap(),
                    PricingRule::third_unit_free("free").unwrap(),
                ];
                for rule in &rules {
                    prop_assert!(rule.apply(price, qty) <= full + 1e-6);
                }
            }

            /// Third unit free charges for exactly q - floor(q/3) units.
            #[test]
            fn third_unit_free_unit_count(qty in 1i64..10_000) {
                let rule = PricingRule::third_unit_free("free").unwrap();
                prop_assert_eq!(rule.apply(1.0, qty), (qty - qty / 3) as f64);
            }
        }
    }
}

//! # Validation Module
//!
//! Input validation for promotion configuration and item data.
//!
//! ## What Gets Validated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Promotion config (ENFORCED by PromotionConfig::build_scheme)          │
//! │  ├── eligible names present          validate_item_name                │
//! │  ├── bundle names distinct           validate_bundle_pair              │
//! │  ├── 0 < pay < buy                   validate_multi_buy_ratio          │
//! │  └── discount ≤ 100%                 validate_discount_bps             │
//! │                                                                         │
//! │  Item data (AVAILABLE to callers, never enforced by scan)              │
//! │  ├── validate_price_cents                                              │
//! │  └── validate_weight / validate_price_per_unit                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A promotion that names an item nobody ever scans is valid: it simply
//! never discounts anything.
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_item_name, validate_multi_buy_ratio};
//!
//! assert!(validate_item_name("Beans (8oz Can)").is_ok());
//! assert!(validate_multi_buy_ratio(3, 2).is_ok());
//! assert!(validate_multi_buy_ratio(2, 2).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::BPS_PER_WHOLE;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name as used by scans and promotion rules.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_ITEM_NAME_LEN` characters
///
/// Names are matched exactly (case and whitespace included), so the value is
/// not trimmed for matching, only for the blank check.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the two names of a bundle promotion.
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_bundle_pair;
///
/// assert!(validate_bundle_pair("Ketchup", "Mustard").is_ok());
/// assert!(validate_bundle_pair("Ketchup", "Ketchup").is_err());
/// assert!(validate_bundle_pair("Ketchup", "").is_err());
/// ```
pub fn validate_bundle_pair(first: &str, second: &str) -> ValidationResult<()> {
    validate_item_name(first)?;
    validate_item_name(second)?;

    if first == second {
        return Err(ValidationError::Duplicate {
            field: "bundle item".to_string(),
            value: first.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a buy-N-pay-M ratio.
///
/// ## Rules
/// - `buy` must be positive
/// - `pay` must be positive and strictly less than `buy`
///   (pay == buy would be a promotion that discounts nothing)
pub fn validate_multi_buy_ratio(buy: u32, pay: u32) -> ValidationResult<()> {
    if buy == 0 {
        return Err(ValidationError::MustBePositive {
            field: "buy".to_string(),
        });
    }

    if pay == 0 {
        return Err(ValidationError::MustBePositive {
            field: "pay".to_string(),
        });
    }

    if pay >= buy {
        return Err(ValidationError::OutOfRange {
            field: "pay".to_string(),
            min: 1,
            max: buy as i64 - 1,
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > BPS_PER_WHOLE {
        return Err(ValidationError::OutOfRange {
            field: "discount_bps".to_string(),
            min: 0,
            max: BPS_PER_WHOLE as i64,
        });
    }

    Ok(())
}

/// Validates a fixed item price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(199).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a weight reading from the scale.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (an empty scale reads 0)
pub fn validate_weight(weight: f64) -> ValidationResult<()> {
    validate_non_negative_quantity("weight", weight)
}

/// Validates a per-unit price in major units (dollars per pound, etc.).
pub fn validate_price_per_unit(price_per_unit: f64) -> ValidationResult<()> {
    validate_non_negative_quantity("price per unit", price_per_unit)
}

fn validate_non_negative_quantity(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  Pricing (scan, subtotal, total, output)  →  NEVER fails                │
//! │    Missing scheme / missing items fall back to full price               │
//! │                                                                         │
//! │  Configuration edges                      →  CoreError                  │
//! │  ├── ValidationError  - malformed promotion or item input               │
//! │  ├── ConfigParse      - promotion JSON did not parse                    │
//! │  └── InvalidPromotion - rule is well-formed JSON but unusable           │
//! │                                                                         │
//! │  SharedRegister                           →  RegisterUnavailable        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, item name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors for the pricing engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A promotion rule cannot be turned into a pricing scheme.
    #[error("Invalid promotion '{kind}': {reason}")]
    InvalidPromotion { kind: String, reason: String },

    /// Promotion configuration could not be parsed.
    #[error("Failed to parse promotion config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The shared register's lock was poisoned by a panicking holder.
    ///
    /// ## When This Occurs
    /// A thread panicked while scanning or finalizing. The receipt it was
    /// working on may be half-updated, so the register refuses further work.
    #[error("Register is unavailable: {0}")]
    RegisterUnavailable(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when promotion configuration or item input does not meet
/// requirements.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-finite weight).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., a bundle naming the same item twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPromotion {
            kind: "multi_buy".to_string(),
            reason: "pay must be less than buy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid promotion 'multi_buy': pay must be less than buy"
        );

        let err = CoreError::RegisterUnavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Register is unavailable: lock poisoned");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item name".to_string(),
        };
        assert_eq!(err.to_string(), "item name is required");

        let err = ValidationError::Duplicate {
            field: "bundle item".to_string(),
            value: "Ketchup".to_string(),
        };
        assert_eq!(err.to_string(), "bundle item 'Ketchup' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "buy".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::ConfigParse(_)));
    }
}

//! # Items
//!
//! Everything the register can scan implements [`Sku`]: a display name plus a
//! price in cents.
//!
//! ## Item Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Sku (trait)                                   │
//! │                     name() ──► &str                                     │
//! │                     price() ──► Money                                   │
//! │                               ▲                                         │
//! │               ┌───────────────┴───────────────┐                         │
//! │        ┌──────┴──────┐                 ┌──────┴──────┐                  │
//! │        │    Item     │                 │WeightedItem │                  │
//! │        │ fixed price │                 │ $/lb × lb   │                  │
//! │        │ Beans $1.99 │                 │ Steak 1.1lb │                  │
//! │        └─────────────┘                 └─────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are immutable after construction, and `price()` is pure: pricing
//! schemes may call it as often as they like.

use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{
    validate_item_name, validate_price_cents, validate_price_per_unit, validate_weight,
};

/// Something that can be scanned and priced.
///
/// Two scanned units with the same `name()` are treated as the same product
/// by the pricing schemes; the register keeps them as separate entries.
pub trait Sku: fmt::Debug + Send + Sync {
    /// Display name, also the key promotions match on.
    fn name(&self) -> &str;

    /// Price of this unit in cents.
    fn price(&self) -> Money;
}

/// Type alias for a scanned item (dynamic dispatch).
pub type BoxedSku = Box<dyn Sku>;

// =============================================================================
// Fixed-Price Item
// =============================================================================

/// An item sold at a fixed price per unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price_each: Money,
}

impl Item {
    /// Creates an item priced in cents. No validation: zero and negative
    /// prices are accepted as given.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::item::{Item, Sku};
    ///
    /// let beans = Item::new("Beans (8oz Can)", 199);
    /// assert_eq!(beans.price().cents(), 199);
    /// ```
    pub fn new(name: impl Into<String>, price_each_cents: i64) -> Self {
        Item {
            name: name.into(),
            price_each: Money::from_cents(price_each_cents),
        }
    }

    /// Creates an item after validating its name and price.
    pub fn try_new(name: impl Into<String>, price_each_cents: i64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_each_cents)?;
        Ok(Item::new(name, price_each_cents))
    }
}

impl Sku for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price_each
    }
}

// =============================================================================
// Weighted Item
// =============================================================================

/// An item sold by weight (or any other fractional quantity).
///
/// ## Pricing
/// ```text
/// price = trunc(price_per_unit × weight × 100) cents
///
/// Steak:  $8.99/lb × 1.1 lb  = 988.9 → 988
/// Apples: $2.99/lb × 0.75 lb = 224.25 → 224
/// ```
/// The fraction of a cent is always dropped, never rounded up.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    name: String,
    price_per_unit: f64,
    weight: f64,
}

impl WeightedItem {
    /// Creates a weighted item. `price_per_unit` is in major units
    /// (dollars), `weight` in whatever unit the price is quoted per.
    pub fn new(name: impl Into<String>, price_per_unit: f64, weight: f64) -> Self {
        WeightedItem {
            name: name.into(),
            price_per_unit,
            weight,
        }
    }

    /// Creates a weighted item after validating name, price and weight
    /// (finite, non-negative).
    pub fn try_new(name: impl Into<String>, price_per_unit: f64, weight: f64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_per_unit(price_per_unit)?;
        validate_weight(weight)?;
        Ok(WeightedItem::new(name, price_per_unit, weight))
    }

    /// Price per unit of weight, in major units.
    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    /// Measured weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Sku for WeightedItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        Money::from_major_units_truncated(self.price_per_unit * self.weight)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

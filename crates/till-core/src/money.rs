//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, subtotal and discount is an i64 number of cents.        │
//! │    Floats only appear while weighing produce, and the result is         │
//! │    truncated to whole cents immediately.                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let beans = Money::from_cents(199); // $1.99
//! let three: Money = beans * 3_i64;
//! assert_eq!(three.cents(), 597);
//! assert_eq!(three.to_string(), "$5.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Basis points in 100%.
pub const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values are legal (refund-style items are not
///   rejected), and `subtotal - total` is how a receipt reports its discount
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Item::price() ──┬──► PricingScheme::price() ──► Receipt::total()
///                 │
///                 └──► Register::subtotal() (running total, no promotions)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a fractional major-unit amount (dollars) to cents by
    /// truncating toward zero. No rounding of any kind is applied.
    ///
    /// This is the only place a float becomes money.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// // $8.99/lb × 1.1 lb = $9.889 → 988 cents (not 989)
    /// assert_eq!(Money::from_major_units_truncated(8.99 * 1.1).cents(), 988);
    /// assert_eq!(Money::from_major_units_truncated(0.0).cents(), 0);
    /// ```
    #[inline]
    pub fn from_major_units_truncated(amount: f64) -> Self {
        // `as` truncates toward zero and saturates (NaN becomes 0)
        Money((amount * 100.0) as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(199);
    /// assert_eq!(unit_price.multiply_quantity(4).cents(), 796);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns this amount with a percentage discount taken off, truncating
    /// the fractional cent.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Truncation, not rounding
    /// ```text
    /// $1.99 at 10% off = 199 × 9000 / 10000 = 179.1 → 179
    /// $0.15 at 10% off =  15 × 9000 / 10000 =  13.5 →  13
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(300).discounted_truncated(1000).cents(), 270);
    /// assert_eq!(Money::from_cents(199).discounted_truncated(1000).cents(), 179);
    /// ```
    pub fn discounted_truncated(&self, discount_bps: u32) -> Money {
        // i128 keeps large baskets from overflowing before the division
        let keep_bps = BPS_PER_WHOLE as i128 - discount_bps as i128;
        let cents = self.0 as i128 * keep_bps / BPS_PER_WHOLE as i128;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC` with exactly two decimals; negatives as `-$D.CC`.
///
/// Receipts rely on this format, so it is part of the public contract.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by a `usize` count (basket lengths, name frequencies).
impl Mul<usize> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: usize) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

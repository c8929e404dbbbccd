//! # till-core: Point-of-Sale Pricing Engine
//!
//! Prices a basket of scanned items under a configurable promotion and
//! renders the receipt. Everything here is pure, synchronous and in-memory.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        till-core                                        │
//! │                                                                         │
//! │   Register ──scan──► Receipt ──total()──► PricingScheme ──► Money       │
//! │      │                  │                      ▲                        │
//! │      │                  └── items: Vec<BoxedSku>                        │
//! │      │                                         │                        │
//! │      └── PromotionConfig ──build_scheme()──────┘                        │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │   money   │  │   item    │  │  pricing  │  │  receipt  │           │
//! │   │   Money   │  │ Item      │  │ MultiBuy  │  │  Receipt  │           │
//! │   │           │  │ Weighted  │  │ Bundle    │  │  Summary  │           │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`item`] - The `Sku` trait, fixed-price and weighted items
//! - [`pricing`] - Promotions as pricing strategies
//! - [`receipt`] - One transaction, its total and its printed form
//! - [`register`] - Scanning, running subtotal, checkout
//! - [`config`] - Promotion configuration (JSON)
//! - [`validation`] - Input checks for configuration and items
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Item, MultiBuyScheme, Register};
//!
//! let mut register = Register::new();
//! register.apply_pricing_scheme(MultiBuyScheme::new("Beans (8oz Can)"));
//! for _ in 0..3 {
//!     register.scan(Item::new("Beans (8oz Can)", 199));
//! }
//! assert_eq!(register.subtotal().cents(), 597);
//!
//! let receipt = register.total();
//! assert_eq!(receipt.total().cents(), 398);
//! assert!(receipt.output().ends_with("TOTAL: $3.98"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{PromotionConfig, PromotionRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{BoxedSku, Item, Sku, WeightedItem};
pub use money::Money;
pub use pricing::{
    price_individually, BundleDiscountScheme, MultiBuyScheme, PricingScheme, SharedPricingScheme,
};
pub use receipt::{Receipt, ReceiptLine, ReceiptSummary};
pub use register::{Register, SharedRegister};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Units that must be bought for a default multi-buy to kick in.
pub const DEFAULT_MULTI_BUY_BUY: u32 = 3;

/// Units charged per completed default multi-buy group.
pub const DEFAULT_MULTI_BUY_PAY: u32 = 2;

/// Default bundle discount: 10% off each paired unit.
pub const DEFAULT_BUNDLE_DISCOUNT_BPS: u32 = 1000;

/// Longest item name accepted by `validation::validate_item_name`.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// First line of every rendered receipt.
pub const RECEIPT_HEADER: &str = "Receipt:";

/// Line between the items and the TOTAL line.
pub const RECEIPT_SEPARATOR: &str = "------------------";

//! # Receipt
//!
//! One transaction: the scanned items in scan order plus the promotion that
//! was active when they were rung up.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Receipt Lifecycle                                 │
//! │                                                                         │
//! │  1. OPEN      Register creates an empty receipt (new id, timestamp)     │
//! │  2. SCAN      Register appends items, may attach a pricing scheme       │
//! │  3. FINALIZE  Register::total() hands the receipt to the caller and     │
//! │               opens a fresh one; the handed-off receipt never changes   │
//! │  4. READ      total(), output(), summary()                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendered Output
//! ```text
//! Receipt:
//! Beans (8oz Can): $1.99
//! Pencil: $0.99
//! ------------------
//! TOTAL: $2.98
//! ```
//! Item lines show each entry's own price; only the TOTAL line reflects the
//! promotion.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::item::BoxedSku;
use crate::money::Money;
use crate::pricing::{price_individually, SharedPricingScheme};
use crate::{RECEIPT_HEADER, RECEIPT_SEPARATOR};

/// A transaction's items and its active pricing scheme.
#[derive(Debug)]
pub struct Receipt {
    id: Uuid,
    opened_at: DateTime<Utc>,
    items: Vec<BoxedSku>,
    pricing_scheme: Option<SharedPricingScheme>,
}

impl Receipt {
    /// Creates an empty receipt with no promotion.
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            items: Vec::new(),
            pricing_scheme: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the register opened this receipt.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Scanned items, in scan order.
    pub fn items(&self) -> &[BoxedSku] {
        &self.items
    }

    pub fn pricing_scheme(&self) -> Option<&SharedPricingScheme> {
        self.pricing_scheme.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn push(&mut self, item: BoxedSku) {
        self.items.push(item);
    }

    pub(crate) fn set_pricing_scheme(&mut self, scheme: SharedPricingScheme) {
        self.pricing_scheme = Some(scheme);
    }

    /// Sum of every item's own price, ignoring any promotion.
    pub fn subtotal(&self) -> Money {
        price_individually(&self.items)
    }

    /// Amount due: the active scheme's price, or the subtotal when there is
    /// no scheme.
    pub fn total(&self) -> Money {
        match &self.pricing_scheme {
            Some(scheme) => scheme.price(&self.items),
            None => self.subtotal(),
        }
    }

    /// How much the promotion saved (`subtotal - total`).
    pub fn discount(&self) -> Money {
        self.subtotal() - self.total()
    }

    /// Renders the receipt text. No trailing newline.
    pub fn output(&self) -> String {
        let mut out = String::new();
        out.push_str(RECEIPT_HEADER);
        out.push('\n');

        for item in &self.items {
            out.push_str(&format!("{}: {}\n", item.name(), item.price()));
        }

        out.push_str(RECEIPT_SEPARATOR);
        out.push('\n');
        out.push_str(&format!("TOTAL: {}", self.total()));
        out
    }

    /// Serializable snapshot of this receipt.
    pub fn summary(&self) -> ReceiptSummary {
        let subtotal = self.subtotal();
        let total = self.total();

        ReceiptSummary {
            id: self.id.to_string(),
            opened_at: self.opened_at,
            lines: self
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name().to_string(),
                    price_cents: item.price().cents(),
                })
                .collect(),
            item_count: self.items.len(),
            subtotal_cents: subtotal.cents(),
            discount_cents: (subtotal - total).cents(),
            total_cents: total.cents(),
            promotion: self.pricing_scheme.as_ref().map(|scheme| scheme.describe()),
        }
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output())
    }
}

// =============================================================================
// Summary Types
// =============================================================================

/// One printed line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    /// The item's own price in cents (before promotions).
    pub price_cents: i64,
}

/// Receipt totals for API responses and front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub id: String,
    #[ts(as = "String")]
    pub opened_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub item_count: usize,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    /// Description of the active promotion, if any.
    pub promotion: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Register
//!
//! Accumulates scans into the current receipt and closes transactions.
//!
//! ## Register Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Operations                                  │
//! │                                                                         │
//! │  Caller Action              Register Method           Receipt Change    │
//! │  ─────────────              ───────────────           ──────────────    │
//! │                                                                         │
//! │  Scan barcode ────────────► scan() ─────────────────► items.push(item)  │
//! │                                                                         │
//! │  Show running total ──────► subtotal() ─────────────► (read only)       │
//! │                                                                         │
//! │  Enable promotion ────────► apply_pricing_scheme() ─► scheme = Some(s)  │
//! │                                                                         │
//! │  Checkout ────────────────► total() ────────────────► MOVED to caller,  │
//! │                                                       fresh receipt in  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `total()` is a move, not a copy: the returned receipt is fully detached,
//! and nothing scanned afterwards can reach it.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::config::PromotionConfig;
use crate::error::{CoreError, CoreResult};
use crate::item::{BoxedSku, Sku};
use crate::money::Money;
use crate::pricing::{PricingScheme, SharedPricingScheme};
use crate::receipt::Receipt;

/// A single checkout lane.
#[derive(Debug, Default)]
pub struct Register {
    receipt: Receipt,
    /// Scheme attached to every receipt this register opens.
    standing_promotion: Option<SharedPricingScheme>,
    completed: u64,
}

impl Register {
    /// Creates a register with an empty receipt and no promotion.
    pub fn new() -> Self {
        Register::default()
    }

    /// Creates a register whose every receipt starts with `scheme` applied.
    pub fn with_standing_promotion(scheme: SharedPricingScheme) -> Self {
        let mut register = Register {
            standing_promotion: Some(scheme),
            ..Register::default()
        };
        register.receipt = register.open_receipt();
        register
    }

    /// Creates a register from promotion configuration.
    ///
    /// ## Errors
    /// Returns an error if the configured promotion is malformed.
    pub fn with_promotions(config: &PromotionConfig) -> CoreResult<Self> {
        Ok(match config.build_scheme()? {
            Some(scheme) => Register::with_standing_promotion(scheme),
            None => Register::new(),
        })
    }

    /// Adds an item to the current receipt.
    pub fn scan(&mut self, item: impl Sku + 'static) {
        self.scan_boxed(Box::new(item));
    }

    /// Adds an already boxed item to the current receipt.
    pub fn scan_boxed(&mut self, item: BoxedSku) {
        debug!(name = %item.name(), price = %item.price(), "Scanned item");
        self.receipt.push(item);
    }

    /// Running total of raw item prices. Promotions are NOT applied.
    pub fn subtotal(&self) -> Money {
        self.receipt.subtotal()
    }

    /// Sets the promotion for the current receipt, replacing any previous one.
    pub fn apply_pricing_scheme(&mut self, scheme: impl PricingScheme + 'static) {
        self.apply_shared_pricing_scheme(Arc::new(scheme));
    }

    /// Sets an already shared promotion for the current receipt.
    pub fn apply_shared_pricing_scheme(&mut self, scheme: SharedPricingScheme) {
        debug!(scheme = scheme.name(), receipt_id = %self.receipt.id(), "Applied pricing scheme");
        self.receipt.set_pricing_scheme(scheme);
    }

    /// Finalizes the transaction: hands the current receipt to the caller
    /// and opens a fresh one.
    pub fn total(&mut self) -> Receipt {
        let fresh = self.open_receipt();
        let receipt = std::mem::replace(&mut self.receipt, fresh);
        self.completed += 1;

        info!(
            receipt_id = %receipt.id(),
            items = receipt.item_count(),
            total = %receipt.total(),
            "Transaction finalized"
        );

        receipt
    }

    /// The receipt currently being rung up.
    pub fn current_receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// Number of receipts handed out by `total()`.
    pub fn completed_transactions(&self) -> u64 {
        self.completed
    }

    fn open_receipt(&self) -> Receipt {
        let mut receipt = Receipt::new();
        if let Some(scheme) = &self.standing_promotion {
            receipt.set_pricing_scheme(Arc::clone(scheme));
        }
        receipt
    }
}

// =============================================================================
// Shared Register
// =============================================================================

/// A register shared between threads.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Register>>`. Each operation takes the lock once, so
/// `total()` swaps the receipt atomically with respect to concurrent scans.
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    register: Arc<Mutex<Register>>,
}

impl SharedRegister {
    pub fn new(register: Register) -> Self {
        SharedRegister {
            register: Arc::new(Mutex::new(register)),
        }
    }

    pub fn scan(&self, item: impl Sku + 'static) -> CoreResult<()> {
        self.with_register_mut(|register| register.scan(item))
    }

    pub fn subtotal(&self) -> CoreResult<Money> {
        self.with_register(|register| register.subtotal())
    }

    pub fn apply_pricing_scheme(&self, scheme: impl PricingScheme + 'static) -> CoreResult<()> {
        self.with_register_mut(|register| register.apply_pricing_scheme(scheme))
    }

    pub fn total(&self) -> CoreResult<Receipt> {
        self.with_register_mut(|register| register.total())
    }

    /// Executes a function with read access to the register.
    pub fn with_register<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&Register) -> R,
    {
        let register = self.lock()?;
        Ok(f(&register))
    }

    /// Executes a function with write access to the register.
    pub fn with_register_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Register) -> R,
    {
        let mut register = self.lock()?;
        Ok(f(&mut register))
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, Register>> {
        self.register
            .lock()
            .map_err(|err| CoreError::RegisterUnavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::item::{Item, WeightedItem};
    use crate::pricing::{BundleDiscountScheme, MultiBuyScheme};

    const BEANS: &str = "Beans (8oz Can)";

    #[test]
    fn test_subtotal_runs_as_items_scan() {
        let mut register = Register::new();
        assert!(register.subtotal().is_zero());

        register.scan(Item::new(BEANS, 199));
        assert_eq!(register.subtotal().cents(), 199);
        register.scan(Item::new("Pencil", 99));
        assert_eq!(register.subtotal().cents(), 298);
        register.scan(Item::new("Granols Bars (Box, 8ct)", 499));
        assert_eq!(register.subtotal().cents(), 797);
    }

    #[test]
    fn test_subtotal_ignores_scheme() {
        let mut register = Register::new();
        register.apply_pricing_scheme(MultiBuyScheme::new(BEANS));
        for _ in 0..3 {
            register.scan(Item::new(BEANS, 199));
        }
        assert_eq!(register.subtotal().cents(), 597);
        assert_eq!(register.total().total().cents(), 398);
    }

    #[test]
    fn test_scheme_applied_after_scans_still_counts() {
        let mut register = Register::new();
        register.scan(Item::new("Ketchup", 300));
        register.scan(Item::new("Mustard", 200));
        register.apply_pricing_scheme(BundleDiscountScheme::new("Ketchup", "Mustard"));
        assert_eq!(register.total().total().cents(), 450);
    }

    #[test]
    fn test_total_detaches_receipt() {
        let mut register = Register::new();
        register.scan(Item::new(BEANS, 199));

        let receipt = register.total();
        register.scan(Item::new("Pencil", 99));
        register.scan(WeightedItem::new("Steak", 8.99, 1.1));

        assert_eq!(receipt.item_count(), 1);
        assert_eq!(receipt.total().cents(), 199);
        assert_eq!(register.subtotal().cents(), 99 + 988);
        assert_eq!(register.current_receipt().item_count(), 2);
        assert_ne!(register.current_receipt().id(), receipt.id());
    }

    #[test]
    fn test_scheme_does_not_carry_over() {
        let mut register = Register::new();
        register.apply_pricing_scheme(MultiBuyScheme::new(BEANS));
        let first = register.total();
        assert!(first.pricing_scheme().is_some());

        for _ in 0..3 {
            register.scan(Item::new(BEANS, 199));
        }
        let second = register.total();
        assert!(second.pricing_scheme().is_none());
        assert_eq!(second.total().cents(), 597);
        assert_eq!(register.completed_transactions(), 2);
    }

    #[test]
    fn test_standing_promotion_applies_to_every_receipt() {
        let mut register =
            Register::with_standing_promotion(Arc::new(MultiBuyScheme::new(BEANS)));

        for _ in 0..3 {
            register.scan(Item::new(BEANS, 199));
        }
        assert_eq!(register.total().total().cents(), 398);

        for _ in 0..5 {
            register.scan(Item::new(BEANS, 199));
        }
        assert_eq!(register.total().total().cents(), 796);
    }

    #[test]
    fn test_with_promotions_from_config() {
        let config = PromotionConfig::from_json(
            r#"{ "promotion": { "kind": "bundle", "items": ["Ketchup", "Mustard"] } }"#,
        )
        .unwrap();
        let mut register = Register::with_promotions(&config).unwrap();
        register.scan(Item::new("Ketchup", 300));
        register.scan(Item::new("Mustard", 200));
        assert_eq!(register.total().total().cents(), 450);

        let mut plain = Register::with_promotions(&PromotionConfig::default()).unwrap();
        plain.scan(Item::new("Ketchup", 300));
        assert!(plain.current_receipt().pricing_scheme().is_none());
    }

    #[test]
    fn test_shared_register_across_threads() {
        let shared = SharedRegister::new(Register::new());
        shared.apply_pricing_scheme(MultiBuyScheme::new(BEANS)).unwrap();

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let lane = shared.clone();
                thread::spawn(move || lane.scan(Item::new(BEANS, 199)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(shared.subtotal().unwrap().cents(), 597);
        let receipt = shared.total().unwrap();
        assert_eq!(receipt.total().cents(), 398);
        assert!(shared.subtotal().unwrap().is_zero());
    }

    #[test]
    fn test_poisoned_register_reports_error() {
        let shared = SharedRegister::default();
        let lane = shared.clone();
        let result = thread::spawn(move || {
            let _ = lane.with_register_mut(|_| panic!("scanner crashed"));
        })
        .join();
        assert!(result.is_err());

        assert!(matches!(
            shared.scan(Item::new(BEANS, 199)),
            Err(CoreError::RegisterUnavailable(_))
        ));
    }
}

//! # Pricing Schemes
//!
//! Strategy pattern for promotions. A scheme sees the WHOLE basket every
//! time a total is requested, because discounts depend on how many units of
//! a name were scanned, not on any single item.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PricingScheme (trait)                      │
//! │  ├── price(&[BoxedSku]) -> Money                            │
//! │  ├── name()                                                 │
//! │  └── describe()                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┴─────────────────┐
//!          │                                   │
//!  ┌───────┴────────┐                 ┌────────┴─────────┐
//!  │ MultiBuyScheme │                 │BundleDiscount    │
//!  │ buy 3, pay 2   │                 │Scheme  10% pair  │
//!  └────────────────┘                 └──────────────────┘
//!
//!  No scheme at all ──► price_individually() (identity)
//! ```
//!
//! ## Uniform-Price Policy
//! Both discount schemes price every unit of a name at the price of the
//! FIRST scanned unit with that name. Two "Steak" entries weighing different
//! amounts are therefore charged at the first steak's price inside a scheme.
//! Only the identity path ([`price_individually`]) prices each entry on its
//! own.

mod bundle;
mod multi_buy;

pub use bundle::BundleDiscountScheme;
pub use multi_buy::MultiBuyScheme;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::item::BoxedSku;
use crate::money::Money;

/// A promotion that computes the total for a basket.
///
/// Implementations hold configuration only. They must be pure: the same
/// basket always yields the same total.
pub trait PricingScheme: fmt::Debug + Send + Sync {
    /// Total price of the basket with this promotion applied.
    fn price(&self, items: &[BoxedSku]) -> Money;

    /// Short machine name (for logging and summaries).
    fn name(&self) -> &'static str;

    /// Human-readable description of the configured promotion.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Type alias for a shared pricing scheme (dynamic dispatch).
///
/// Schemes are stateless, so one instance can back many receipts.
pub type SharedPricingScheme = Arc<dyn PricingScheme>;

/// Identity pricing: the sum of every entry's own price.
pub fn price_individually(items: &[BoxedSku]) -> Money {
    items.iter().map(|item| item.price()).sum()
}

// =============================================================================
// Name Tally
// =============================================================================

/// How many units of one name were scanned, and what the first one cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TallyEntry {
    pub count: usize,
    pub first_price: Money,
}

impl TallyEntry {
    /// Every unit at the first unit's price.
    pub fn uniform_total(&self) -> Money {
        self.first_price * self.count
    }
}

/// Per-name unit counts for a basket, in first-scanned order.
#[derive(Debug, Default)]
pub(crate) struct NameTally<'a> {
    order: Vec<&'a str>,
    entries: HashMap<&'a str, TallyEntry>,
}

impl<'a> NameTally<'a> {
    pub fn from_items(items: &'a [BoxedSku]) -> Self {
        let mut tally = NameTally::default();

        for item in items {
            let name = item.name();
            match tally.entries.get_mut(name) {
                Some(entry) => entry.count += 1,
                None => {
                    tally.order.push(name);
                    tally.entries.insert(
                        name,
                        TallyEntry {
                            count: 1,
                            first_price: item.price(),
                        },
                    );
                }
            }
        }

        tally
    }

    pub fn get(&self, name: &str) -> Option<TallyEntry> {
        self.entries.get(name).copied()
    }

    pub fn count(&self, name: &str) -> usize {
        self.get(name).map_or(0, |entry| entry.count)
    }

    /// Entries in the order their names were first scanned.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, TallyEntry)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|entry| (*name, *entry)))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::item::{BoxedSku, Item};

    /// `count` identical fixed-price units.
    pub fn units(name: &str, price_cents: i64, count: usize) -> Vec<BoxedSku> {
        (0..count)
            .map(|_| Box::new(Item::new(name, price_cents)) as BoxedSku)
            .collect()
    }

    pub fn basket(groups: Vec<Vec<BoxedSku>>) -> Vec<BoxedSku> {
        groups.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{basket, units};
    use super::*;
    use crate::item::{Item, WeightedItem};

    #[test]
    fn test_price_individually() {
        let items = basket(vec![
            units("Beans (8oz Can)", 199, 1),
            units("Pencil", 99, 1),
            units("Granols Bars (Box, 8ct)", 499, 1),
        ]);
        assert_eq!(price_individually(&items).cents(), 797);
        assert!(price_individually(&[]).is_zero());
    }

    #[test]
    fn test_price_individually_is_exact_per_entry() {
        let items: Vec<BoxedSku> = vec![
            Box::new(WeightedItem::new("Steak", 8.99, 1.1)),
            Box::new(WeightedItem::new("Steak", 8.99, 2.0)),
        ];
        assert_eq!(price_individually(&items).cents(), 988 + 1798);
    }

    #[test]
    fn test_tally_counts_and_first_price() {
        let items: Vec<BoxedSku> = vec![
            Box::new(Item::new("Ketchup", 300)),
            Box::new(Item::new("Mustard", 200)),
            Box::new(Item::new("Ketchup", 350)),
        ];
        let tally = NameTally::from_items(&items);

        assert_eq!(tally.count("Ketchup"), 2);
        assert_eq!(tally.count("Mustard"), 1);
        assert_eq!(tally.count("Relish"), 0);

        let ketchup = tally.get("Ketchup").unwrap();
        assert_eq!(ketchup.first_price.cents(), 300);
        assert_eq!(ketchup.uniform_total().cents(), 600);

        let order: Vec<&str> = tally.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Ketchup", "Mustard"]);
    }
}

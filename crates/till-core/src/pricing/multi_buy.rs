//! Multi-buy promotion: buy N units of one item, pay for M.

use tracing::debug;

use super::{price_individually, PricingScheme};
use crate::item::BoxedSku;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_multi_buy_ratio, ValidationResult};
use crate::{DEFAULT_MULTI_BUY_BUY, DEFAULT_MULTI_BUY_PAY};

/// "Buy `buy`, pay for `pay`" on a single item name.
///
/// ## Algorithm
/// ```text
/// n units of the eligible name, first unit priced p:
///
///   groups    = n / buy
///   remainder = n % buy
///   charged   = groups × pay × p  +  remainder × p
///
/// 3-for-2 at $1.99:
///   n=2 → 0 groups, 2 left → 2 × 199 = 398  (no discount yet)
///   n=3 → 1 group,  0 left → 2 × 199 = 398
///   n=5 → 1 group,  2 left → 4 × 199 = 796
/// ```
/// Every other item is charged at its own price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiBuyScheme {
    item_name: String,
    buy: u32,
    pay: u32,
}

impl MultiBuyScheme {
    /// The classic "3 for the price of 2" on `item_name`.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::item::{BoxedSku, Item};
    /// use till_core::pricing::{MultiBuyScheme, PricingScheme};
    ///
    /// let scheme = MultiBuyScheme::new("Beans (8oz Can)");
    /// let basket: Vec<BoxedSku> = (0..3)
    ///     .map(|_| Box::new(Item::new("Beans (8oz Can)", 199)) as BoxedSku)
    ///     .collect();
    /// assert_eq!(scheme.price(&basket).cents(), 398);
    /// ```
    pub fn new(item_name: impl Into<String>) -> Self {
        MultiBuyScheme {
            item_name: item_name.into(),
            buy: DEFAULT_MULTI_BUY_BUY,
            pay: DEFAULT_MULTI_BUY_PAY,
        }
    }

    /// A custom ratio. Requires `0 < pay < buy` and a non-blank name.
    pub fn with_ratio(item_name: impl Into<String>, buy: u32, pay: u32) -> ValidationResult<Self> {
        let item_name = item_name.into();
        validate_item_name(&item_name)?;
        validate_multi_buy_ratio(buy, pay)?;

        Ok(MultiBuyScheme {
            item_name,
            buy,
            pay,
        })
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn buy(&self) -> u32 {
        self.buy
    }

    pub fn pay(&self) -> u32 {
        self.pay
    }

    /// How many of `count` eligible units are actually charged.
    pub fn charged_units(&self, count: usize) -> usize {
        let buy = self.buy as usize;
        (count / buy) * self.pay as usize + count % buy
    }
}

impl PricingScheme for MultiBuyScheme {
    fn price(&self, items: &[BoxedSku]) -> Money {
        let (eligible, other): (Vec<&BoxedSku>, Vec<&BoxedSku>) = items
            .iter()
            .partition(|item| item.name() == self.item_name);

        let Some(first) = eligible.first() else {
            return price_individually(items);
        };

        let unit_price = first.price();
        let eligible_total = unit_price * self.charged_units(eligible.len());
        let other_total: Money = other.iter().map(|item| item.price()).sum();
        let total = eligible_total + other_total;

        debug!(
            scheme = self.name(),
            item = %self.item_name,
            eligible = eligible.len(),
            total = %total,
            "Priced basket"
        );

        total
    }

    fn name(&self) -> &'static str {
        "multi_buy"
    }

    fn describe(&self) -> String {
        format!(
            "Buy {} {}, pay for {}",
            self.buy, self.item_name, self.pay
        )
    }
}

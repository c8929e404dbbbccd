//! Bundle promotion: buy two different items together, get a percentage off
//! both.

use tracing::debug;

use super::{NameTally, PricingScheme};
use crate::item::BoxedSku;
use crate::money::Money;
use crate::validation::{validate_bundle_pair, validate_discount_bps, ValidationResult};
use crate::DEFAULT_BUNDLE_DISCOUNT_BPS;

/// Percentage off each unit of a matched pair of names.
///
/// ## Algorithm
/// ```text
/// c1 = count(first), c2 = count(second), paired = min(c1, c2)
///
///   first:  paired × trunc(p1 × 90%)  +  (c1 - paired) × p1
///   second: paired × trunc(p2 × 90%)  +  (c2 - paired) × p2
///   others: count(name) × first_price(name)   for every other name
///
/// Ketchup $3.00 + Mustard $2.00 → 270 + 180 = $4.50
/// Ketchup ×2 + Mustard ×1      → 270 + 300 + 180 = $7.50
/// ```
/// The discounted unit price is truncated to whole cents, not rounded.
/// If either name is missing from the basket nothing is discounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDiscountScheme {
    first: String,
    second: String,
    discount_bps: u32,
}

impl BundleDiscountScheme {
    /// 10% off each unit of `first` that is paired with a unit of `second`.
    ///
    /// Naming the same item twice is accepted here (every unit of it is then
    /// discounted once); use [`BundleDiscountScheme::with_discount`] to
    /// reject that configuration.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        BundleDiscountScheme {
            first: first.into(),
            second: second.into(),
            discount_bps: DEFAULT_BUNDLE_DISCOUNT_BPS,
        }
    }

    /// A custom discount in basis points. Requires two distinct, non-blank
    /// names and a discount of at most 100%.
    pub fn with_discount(
        first: impl Into<String>,
        second: impl Into<String>,
        discount_bps: u32,
    ) -> ValidationResult<Self> {
        let (first, second) = (first.into(), second.into());
        validate_bundle_pair(&first, &second)?;
        validate_discount_bps(discount_bps)?;

        Ok(BundleDiscountScheme {
            first,
            second,
            discount_bps,
        })
    }

    /// The two bundled names.
    pub fn items(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    pub fn discount_bps(&self) -> u32 {
        self.discount_bps
    }

    fn is_bundled(&self, name: &str) -> bool {
        name == self.first || name == self.second
    }

    /// Distinct bundled names (one entry when both sides name the same item).
    fn bundled_names(&self) -> impl Iterator<Item = &str> {
        let second = (self.second != self.first).then_some(self.second.as_str());
        std::iter::once(self.first.as_str()).chain(second)
    }
}

impl PricingScheme for BundleDiscountScheme {
    fn price(&self, items: &[BoxedSku]) -> Money {
        let tally = NameTally::from_items(items);
        let paired = tally.count(&self.first).min(tally.count(&self.second));

        let mut total = Money::zero();

        for name in self.bundled_names() {
            if let Some(entry) = tally.get(name) {
                let discounted = entry.first_price.discounted_truncated(self.discount_bps);
                total += discounted * paired;
                total += entry.first_price * (entry.count - paired);
            }
        }

        for (_, entry) in tally.iter().filter(|(name, _)| !self.is_bundled(name)) {
            total += entry.uniform_total();
        }

        debug!(
            scheme = self.name(),
            first = %self.first,
            second = %self.second,
            paired,
            total = %total,
            "Priced basket"
        );

        total
    }

    fn name(&self) -> &'static str {
        "bundle"
    }

    fn describe(&self) -> String {
        format!(
            "{} + {}: {}.{:02}% off each",
            self.first,
            self.second,
            self.discount_bps / 100,
            self.discount_bps % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::pricing::test_support::{basket, units};

    fn condiments() -> BundleDiscountScheme {
        BundleDiscountScheme::new("Ketchup", "Mustard")
    }

    #[test]
    fn test_single_pair() {
        let items = basket(vec![units("Ketchup", 300, 1), units("Mustard", 200, 1)]);
        assert_eq!(condiments().price(&items).cents(), 450);
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let items = basket(vec![units("Mustard", 200, 1), units("Ketchup", 300, 1)]);
        assert_eq!(condiments().price(&items).cents(), 450);
    }

    #[test]
    fn test_unpaired_units_full_price() {
        let items = basket(vec![units("Ketchup", 300, 2), units("Mustard", 200, 1)]);
        assert_eq!(condiments().price(&items).cents(), 270 + 300 + 180);

        let items = basket(vec![units("Ketchup", 300, 1), units("Mustard", 200, 3)]);
        assert_eq!(condiments().price(&items).cents(), 270 + 180 + 2 * 200);
    }

    #[test]
    fn test_missing_partner_is_no_discount() {
        let items = units("Ketchup", 300, 2);
        assert_eq!(condiments().price(&items).cents(), 600);

        let items = units("Mustard", 200, 1);
        assert_eq!(condiments().price(&items).cents(), 200);

        assert!(condiments().price(&[]).is_zero());
    }

    #[test]
    fn test_discount_truncates_per_unit() {
        // 199 × 0.9 = 179.1 → 179 each, 15 × 0.9 = 13.5 → 13 each
        let items = basket(vec![units("Ketchup", 199, 2), units("Mustard", 15, 2)]);
        assert_eq!(condiments().price(&items).cents(), 2 * 179 + 2 * 13);
    }

    #[test]
    fn test_other_items_charged_by_count() {
        let items = basket(vec![
            units("Ketchup", 300, 1),
            units("Pencil", 99, 2),
            units("Mustard", 200, 1),
            units("Bread", 250, 1),
        ]);
        assert_eq!(condiments().price(&items).cents(), 450 + 198 + 250);
    }

    #[test]
    fn test_first_price_wins_for_every_name() {
        let items: Vec<BoxedSku> = vec![
            Box::new(Item::new("Ketchup", 300)),
            Box::new(Item::new("Ketchup", 400)),
            Box::new(Item::new("Mustard", 200)),
            Box::new(Item::new("Pencil", 99)),
            Box::new(Item::new("Pencil", 150)),
        ];
        // Second ketchup and second pencil are charged at the first unit's price
        assert_eq!(
            condiments().price(&items).cents(),
            270 + 300 + 180 + 2 * 99
        );
    }

    #[test]
    fn test_custom_discount() {
        let scheme = BundleDiscountScheme::with_discount("Chips", "Salsa", 2500).unwrap();
        let items = basket(vec![units("Chips", 400, 1), units("Salsa", 350, 1)]);
        // 400 × 0.75 = 300, 350 × 0.75 = 262.5 → 262
        assert_eq!(scheme.price(&items).cents(), 300 + 262);
        assert_eq!(scheme.discount_bps(), 2500);
        assert_eq!(scheme.items(), ("Chips", "Salsa"));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(BundleDiscountScheme::with_discount("Ketchup", "Ketchup", 1000).is_err());
        assert!(BundleDiscountScheme::with_discount("Ketchup", "", 1000).is_err());
        assert!(BundleDiscountScheme::with_discount("Ketchup", "Mustard", 10_001).is_err());
    }

    #[test]
    fn test_same_name_twice_not_double_charged() {
        let scheme = BundleDiscountScheme::new("Ketchup", "Ketchup");
        let items = units("Ketchup", 300, 2);
        assert_eq!(scheme.price(&items).cents(), 2 * 270);
    }

    #[test]
    fn test_describe() {
        assert_eq!(condiments().name(), "bundle");
        assert_eq!(condiments().describe(), "Ketchup + Mustard: 10.00% off each");
    }
}

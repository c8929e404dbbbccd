//! # Promotion Configuration
//!
//! Describes which promotion a register runs, as JSON.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variable `TILL_PROMOTION` (whole config as JSON)
//! 2. Defaults (no promotion)
//!
//! ## Format
//! ```json
//! { "promotion": { "kind": "multi_buy", "item": "Beans (8oz Can)", "buy": 3, "pay": 2 } }
//! { "promotion": { "kind": "bundle", "items": ["Ketchup", "Mustard"], "discountBps": 1000 } }
//! { }
//! ```
//! `buy`, `pay` and `discountBps` may be omitted (3, 2 and 1000).
//!
//! ## Example
//! ```rust
//! use till_core::config::PromotionConfig;
//!
//! let config = PromotionConfig::from_json(
//!     r#"{ "promotion": { "kind": "multi_buy", "item": "Beans (8oz Can)" } }"#,
//! ).unwrap();
//! let scheme = config.build_scheme().unwrap().unwrap();
//! assert_eq!(scheme.describe(), "Buy 3 Beans (8oz Can), pay for 2");
//! ```

use std::env::{self, VarError};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::pricing::{BundleDiscountScheme, MultiBuyScheme, SharedPricingScheme};
use crate::{DEFAULT_BUNDLE_DISCOUNT_BPS, DEFAULT_MULTI_BUY_BUY, DEFAULT_MULTI_BUY_PAY};

/// Environment variable holding the promotion config JSON.
pub const PROMOTION_ENV_VAR: &str = "TILL_PROMOTION";

/// Register promotion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionConfig {
    /// Promotion attached to every receipt. `None` prices items as scanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionRule>,
}

/// One configured promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionRule {
    /// Buy `buy` units of `item`, pay for `pay`.
    MultiBuy {
        item: String,
        #[serde(default = "default_buy")]
        buy: u32,
        #[serde(default = "default_pay")]
        pay: u32,
    },

    /// `discount_bps` off each unit of a matched pair of items.
    Bundle {
        items: [String; 2],
        #[serde(rename = "discountBps", default = "default_discount_bps")]
        discount_bps: u32,
    },
}

fn default_buy() -> u32 {
    DEFAULT_MULTI_BUY_BUY
}

fn default_pay() -> u32 {
    DEFAULT_MULTI_BUY_PAY
}

fn default_discount_bps() -> u32 {
    DEFAULT_BUNDLE_DISCOUNT_BPS
}

impl PromotionRule {
    /// The `kind` tag as written in config.
    pub fn kind(&self) -> &'static str {
        match self {
            PromotionRule::MultiBuy { .. } => "multi_buy",
            PromotionRule::Bundle { .. } => "bundle",
        }
    }

    /// Validates the rule and builds its pricing scheme.
    ///
    /// ## Errors
    /// `CoreError::InvalidPromotion` naming the rule kind and the failed check.
    pub fn build(&self) -> CoreResult<SharedPricingScheme> {
        let scheme: SharedPricingScheme = match self {
            PromotionRule::MultiBuy { item, buy, pay } => Arc::new(
                MultiBuyScheme::with_ratio(item.as_str(), *buy, *pay)
                    .map_err(|err| self.invalid(err))?,
            ),
            PromotionRule::Bundle {
                items: [first, second],
                discount_bps,
            } => Arc::new(
                BundleDiscountScheme::with_discount(first.as_str(), second.as_str(), *discount_bps)
                    .map_err(|err| self.invalid(err))?,
            ),
        };

        debug!(kind = self.kind(), promotion = %scheme.describe(), "Built pricing scheme");
        Ok(scheme)
    }

    fn invalid(&self, err: ValidationError) -> CoreError {
        CoreError::InvalidPromotion {
            kind: self.kind().to_string(),
            reason: err.to_string(),
        }
    }
}

impl PromotionConfig {
    /// A config running exactly one promotion.
    pub fn with_rule(rule: PromotionRule) -> Self {
        PromotionConfig {
            promotion: Some(rule),
        }
    }

    /// Parses config from a JSON string.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads config from `TILL_PROMOTION`; an unset variable means no
    /// promotion.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_env_var(PROMOTION_ENV_VAR)
    }

    fn from_env_var(key: &str) -> CoreResult<Self> {
        match env::var(key) {
            Ok(json) => Self::from_json(&json),
            Err(VarError::NotPresent) => Ok(PromotionConfig::default()),
            Err(err @ VarError::NotUnicode(_)) => Err(CoreError::InvalidPromotion {
                kind: key.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// Validates the configured rule and builds its scheme, if any.
    pub fn build_scheme(&self) -> CoreResult<Option<SharedPricingScheme>> {
        self.promotion.as_ref().map(PromotionRule::build).transpose()
    }
}

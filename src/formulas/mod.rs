//! Pluggable revenue and bonus formulas.
//!
//! The aggregator never hard-codes how an item's revenue or a seller's bonus
//! is computed. It calls through the two strategy traits defined here, so a
//! caller can pass the reference formulas, a configured variant, or a plain
//! closure.

pub mod bonus;
pub mod revenue;

use crate::aggregator::SellerStats;
use crate::parser::schema::{Item, Product};
use crate::utils::config::{BonusPolicy, DEFAULT_BONUS_FORMULA, DEFAULT_REVENUE_FORMULA};
use crate::utils::error::ConfigError;

// Re-export the reference formulas
pub use bonus::BonusByProfit;
pub use revenue::SimpleRevenue;

/// Realized revenue of one line item
///
/// Implementations must be pure and must not reject valid items.
pub trait RevenueFormula {
    /// Revenue of `item`, given its catalog `product`
    fn revenue(&self, item: &Item, product: &Product) -> f64;

    /// Name recorded in reports
    fn name(&self) -> &str {
        "custom"
    }
}

/// Bonus for a seller at a given profit rank
///
/// Must be pure and total over `0 <= index < total`, `total >= 1`.
pub trait BonusFormula {
    /// Bonus for the seller ranked `index` (0 = highest profit) among `total`
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64;

    /// Name recorded in reports
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> RevenueFormula for F
where
    F: Fn(&Item, &Product) -> f64,
{
    fn revenue(&self, item: &Item, product: &Product) -> f64 {
        self(item, product)
    }
}

impl<F> BonusFormula for F
where
    F: Fn(usize, usize, &SellerStats) -> f64,
{
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        self(index, total, seller)
    }
}

/// Look up a revenue formula by its configured name
///
/// # Errors
/// * `ConfigError::UnknownFormula` - No formula has that name
pub fn select_revenue_formula(name: &str) -> Result<Box<dyn RevenueFormula>, ConfigError> {
    match name {
        DEFAULT_REVENUE_FORMULA => Ok(Box::new(SimpleRevenue)),
        other => Err(ConfigError::UnknownFormula {
            kind: "revenue",
            name: other.to_string(),
        }),
    }
}

/// Look up a bonus formula by its configured name
///
/// `policy` is applied to formulas that are rate-driven.
///
/// # Errors
/// * `ConfigError::UnknownFormula` - No formula has that name
/// * `ConfigError::InvalidPolicy` - The policy has a negative or non-finite rate
pub fn select_bonus_formula(
    name: &str,
    policy: BonusPolicy,
) -> Result<Box<dyn BonusFormula>, ConfigError> {
    match name {
        DEFAULT_BONUS_FORMULA => Ok(Box::new(BonusByProfit::with_policy(policy)?)),
        other => Err(ConfigError::UnknownFormula {
            kind: "bonus",
            name: other.to_string(),
        }),
    }
}

/// Names accepted by `select_revenue_formula`
pub fn revenue_formula_names() -> &'static [&'static str] {
    &[DEFAULT_REVENUE_FORMULA]
}

/// Names accepted by `select_bonus_formula`
pub fn bonus_formula_names() -> &'static [&'static str] {
    &[DEFAULT_BONUS_FORMULA]
}

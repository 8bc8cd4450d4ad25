//! Reference bonus formula: profit share by rank tier.
//!
//! Tiers are checked in a fixed order, so with very few sellers the earlier
//! tier wins: a single seller is both first and last and gets the leader rate.

use super::BonusFormula;
use crate::aggregator::SellerStats;
use crate::utils::config::{BonusPolicy, DEFAULT_BONUS_FORMULA};
use crate::utils::error::ConfigError;

/// Bonus as a share of profit, chosen by profit rank
///
/// With the default policy:
/// - rank 0: 15%
/// - ranks 1 and 2: 10%
/// - last rank: 0
/// - everyone else: 5%
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusByProfit {
    policy: BonusPolicy,
}

impl BonusByProfit {
    /// Reference tiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom tiers
    ///
    /// # Errors
    /// * `ConfigError::InvalidPolicy` - A rate is negative or not finite
    pub fn with_policy(policy: BonusPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &BonusPolicy {
        &self.policy
    }

    /// Profit share for `index` among `total` sellers
    pub fn rate(&self, index: usize, total: usize) -> f64 {
        if index == 0 {
            self.policy.leader_rate
        } else if index <= self.policy.runner_up_ranks {
            self.policy.runner_up_rate
        } else if index + 1 == total {
            self.policy.last_rate
        } else {
            self.policy.base_rate
        }
    }
}

impl BonusFormula for BonusByProfit {
    fn bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        seller.profit * self.rate(index, total)
    }

    fn name(&self) -> &str {
        DEFAULT_BONUS_FORMULA
    }
}

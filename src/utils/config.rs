//! Configuration and constants for the analyzer.

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Maximum number of products kept in a seller's top list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Decimal places kept for revenue, profit and bonus
pub const MONEY_DECIMALS: u32 = 2;

// Formula names accepted on the command line and in config files
pub const DEFAULT_REVENUE_FORMULA: &str = "simple";
pub const DEFAULT_BONUS_FORMULA: &str = "profit-tiers";

// Reference bonus tiers (share of profit)
pub const DEFAULT_LEADER_RATE: f64 = 0.15;
pub const DEFAULT_RUNNER_UP_RATE: f64 = 0.10;
pub const DEFAULT_RUNNER_UP_RANKS: usize = 2;
pub const DEFAULT_LAST_RATE: f64 = 0.0;
pub const DEFAULT_BASE_RATE: f64 = 0.05;

/// Formula selection loaded from a TOML file
///
/// Every key is optional; missing keys fall back to the reference formulas.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Revenue formula name
    pub revenue: String,

    /// Bonus formula name
    pub bonus: String,

    /// Rates used by the `profit-tiers` bonus formula
    pub bonus_policy: BonusPolicy,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            revenue: DEFAULT_REVENUE_FORMULA.to_string(),
            bonus: DEFAULT_BONUS_FORMULA.to_string(),
            bonus_policy: BonusPolicy::default(),
        }
    }
}

/// Profit share paid out per rank tier
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BonusPolicy {
    /// Rank 0
    pub leader_rate: f64,

    /// Ranks 1..=runner_up_ranks
    pub runner_up_rate: f64,

    /// How many ranks after the leader get the runner-up rate
    pub runner_up_ranks: usize,

    /// Last rank, unless it already matched a tier above
    pub last_rate: f64,

    /// Everyone else
    pub base_rate: f64,
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self {
            leader_rate: DEFAULT_LEADER_RATE,
            runner_up_rate: DEFAULT_RUNNER_UP_RATE,
            runner_up_ranks: DEFAULT_RUNNER_UP_RANKS,
            last_rate: DEFAULT_LAST_RATE,
            base_rate: DEFAULT_BASE_RATE,
        }
    }
}

impl BonusPolicy {
    /// Check that every rate is a finite, non-negative share
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("leader_rate", self.leader_rate),
            ("runner_up_rate", self.runner_up_rate),
            ("last_rate", self.last_rate),
            ("base_rate", self.base_rate),
        ];

        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, rate
                )));
            }
        }

        Ok(())
    }
}

/// Load formula configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidPolicy` - If a bonus rate is negative or not finite
///
/// # Example
/// ```ignore
/// let config = load_config("formulas.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FormulaConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading formula config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: FormulaConfig = toml::from_str(&contents)?;
    config.bonus_policy.validate()?;

    debug!(
        "Formula config: revenue={}, bonus={}",
        config.revenue, config.bonus
    );

    Ok(config)
}

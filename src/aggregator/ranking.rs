//! Profit ranking and money rounding.

use super::seller_stats::SellerStats;
use crate::utils::config::MONEY_DECIMALS;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Sort sellers by profit, highest first
///
/// **Public** - rank index after this call is the bonus tier index
///
/// The sort is stable: sellers with equal profit keep their input order.
pub fn rank_by_profit(sellers: &mut [SellerStats]) {
    sellers.sort_by(|a, b| b.profit.total_cmp(&a.profit));
}

/// Round a money amount to cents, half away from zero
///
/// Rounds the exact stored binary value, so 0.015 (stored just below the
/// midpoint) becomes 0.01. Idempotent: rounding an already-rounded amount
/// returns it unchanged. Non-finite or out-of-range values pass through.
pub fn round_money(value: f64) -> f64 {
    let rounded = Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value);

    // Normalize -0.0 so it serializes as 0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

//! Aggregation of purchase records into ranked seller results.
//!
//! This module transforms a validated dataset into:
//! - Per-seller revenue, profit and sales counts
//! - Profit ranking and bonus tiers
//! - Top-selling products per seller

pub mod analyze;
pub mod ranking;
pub mod seller_stats;

// Re-export main types and functions
pub use analyze::{analyze, AnalysisOptions};
pub use ranking::{rank_by_profit, round_money};
pub use seller_stats::SellerStats;

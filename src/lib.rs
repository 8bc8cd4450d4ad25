//! Seller Insights
//!
//! Per-seller sales performance from raw purchase records: revenue,
//! profit, sales count, top-selling products and a rank-based bonus.
//!
//! The core is [`aggregator::analyze`], a single synchronous pass over
//! a [`parser::Dataset`] using caller-supplied formulas:
//!
//! ```ignore
//! use seller_insights::aggregator::{analyze, AnalysisOptions};
//! use seller_insights::formulas::{BonusByProfit, SimpleRevenue};
//!
//! let bonus = BonusByProfit::new();
//! let results = analyze(&dataset, &AnalysisOptions::new(&SimpleRevenue, &bonus))?;
//! ```
//!
//! The `seller-insights` binary wraps it with dataset loading,
//! formula configuration and report output.

pub mod aggregator;
pub mod commands;
pub mod formulas;
pub mod output;
pub mod parser;
pub mod utils;

//! Input record and output report definitions.
//!
//! Input records mirror the dataset JSON one-to-one. Output records are
//! what the aggregator returns and what we write to disk; the report
//! envelope is versioned to allow future evolution.

use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A seller whose sales are tracked and ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier (e.g., "seller_1")
    pub id: String,

    pub first_name: String,

    pub last_name: String,
}

impl Seller {
    /// Display name used in results ("First Last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry carrying its acquisition cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stock-keeping unit identifier
    pub sku: String,

    /// Purchase (cost) price per unit
    pub purchase_price: f64,

    /// Human-readable product name, if the dataset has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One product line within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,

    /// Units sold
    pub quantity: u64,

    /// Unit sale price before discount
    pub sale_price: f64,

    /// Discount percent, 0 to 100
    pub discount: f64,
}

/// One sale transaction by a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Receipt identifier, if present in the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    pub seller_id: String,

    /// Amount charged for the whole receipt
    pub total_amount: f64,

    /// Discount granted on the whole receipt
    pub total_discount: f64,

    /// Line items, in receipt order
    pub items: Vec<Item>,
}

/// Complete input of one analysis run
///
/// Missing arrays deserialize as empty so the aggregator reports
/// both cases with the same `InvalidInput` error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub sellers: Vec<Seller>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

/// A product in a seller's top list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,

    /// Cumulative units sold by the seller
    pub quantity: u64,
}

/// Finalized statistics for one seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerResult {
    pub seller_id: String,

    pub name: String,

    /// Sum of receipt totals minus receipt discounts, rounded to cents
    pub revenue: f64,

    /// Sum of item revenue minus item cost, rounded to cents
    pub profit: f64,

    /// Number of purchase records attributed to the seller
    pub sales_count: u64,

    /// Up to 10 best-selling SKUs, by quantity (descending)
    pub top_products: Vec<TopProduct>,

    /// Bonus for the seller's profit rank, rounded to cents
    pub bonus: f64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when report was generated (RFC 3339)
    pub generated_at: String,

    /// Name of the revenue formula used
    pub revenue_formula: String,

    /// Name of the bonus formula used
    pub bonus_formula: String,

    /// Number of sellers in the report
    pub seller_count: usize,

    /// Sellers ranked by profit (descending)
    pub sellers: Vec<SellerResult>,
}

impl Report {
    /// Wrap ranked results in a versioned, timestamped envelope
    pub fn new(sellers: Vec<SellerResult>, revenue_formula: &str, bonus_formula: &str) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            revenue_formula: revenue_formula.to_string(),
            bonus_formula: bonus_formula.to_string(),
            seller_count: sellers.len(),
            sellers,
        }
    }

    /// Sum of bonuses across all sellers
    pub fn total_bonus(&self) -> f64 {
        self.sellers.iter().map(|s| s.bonus).sum()
    }

    /// Sum of profit across all sellers
    pub fn total_profit(&self) -> f64 {
        self.sellers.iter().map(|s| s.profit).sum()
    }
}

//! The aggregation pass.
//!
//! Turns a dataset into ranked seller results in one synchronous call:
//! 1. Validate the dataset and formulas
//! 2. Index sellers by id and products by SKU
//! 3. Fold purchase records into per-seller accumulators
//! 4. Rank by profit
//! 5. Derive bonus and top products, round money

use super::ranking::rank_by_profit;
use super::seller_stats::SellerStats;
use crate::formulas::{BonusFormula, RevenueFormula};
use crate::parser::schema::{Dataset, Product, SellerResult};
use crate::utils::config::TOP_PRODUCTS_LIMIT;
use crate::utils::error::{AnalysisError, ReferenceKind};
use log::debug;
use std::collections::HashMap;

/// The two formulas an analysis needs
///
/// Both are optional at construction so a caller assembling options
/// piecemeal gets an `InvalidInput` error instead of a type error.
#[derive(Default, Clone, Copy)]
pub struct AnalysisOptions<'a> {
    pub calculate_revenue: Option<&'a dyn RevenueFormula>,
    pub calculate_bonus: Option<&'a dyn BonusFormula>,
}

impl<'a> AnalysisOptions<'a> {
    /// Options with both formulas set
    pub fn new(revenue: &'a dyn RevenueFormula, bonus: &'a dyn BonusFormula) -> Self {
        Self {
            calculate_revenue: Some(revenue),
            calculate_bonus: Some(bonus),
        }
    }

    pub fn with_revenue(mut self, revenue: &'a dyn RevenueFormula) -> Self {
        self.calculate_revenue = Some(revenue);
        self
    }

    pub fn with_bonus(mut self, bonus: &'a dyn BonusFormula) -> Self {
        self.calculate_bonus = Some(bonus);
        self
    }
}

impl std::fmt::Debug for AnalysisOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.map(|r| r.name()))
            .field("calculate_bonus", &self.calculate_bonus.map(|b| b.name()))
            .finish()
    }
}

/// Analyze a dataset into per-seller results ranked by profit
///
/// **Public** - main entry point of the library
///
/// # Arguments
/// * `dataset` - Sellers, products and purchase records (read-only)
/// * `options` - Revenue and bonus formulas
///
/// # Returns
/// One result per seller, sorted by profit (descending). Sellers with equal
/// profit keep their input order.
///
/// # Errors
/// * `AnalysisError::InvalidInput` - An input array is empty, a formula is
///   missing, or two sellers share an id
/// * `AnalysisError::UnresolvedReference` - A record names an unknown seller
///   or an item names an unknown SKU
///
/// No partial result is ever returned.
///
/// # Example
/// ```ignore
/// let options = AnalysisOptions::new(&SimpleRevenue, &BonusByProfit::new());
/// let results = analyze(&dataset, &options)?;
/// ```
pub fn analyze(
    dataset: &Dataset,
    options: &AnalysisOptions<'_>,
) -> Result<Vec<SellerResult>, AnalysisError> {
    let (calculate_revenue, calculate_bonus) = validate_input(dataset, options)?;

    debug!(
        "Analyzing {} purchase records for {} sellers",
        dataset.purchase_records.len(),
        dataset.sellers.len()
    );

    let (mut seller_stats, seller_index) = build_seller_index(dataset)?;
    let product_index = build_product_index(dataset);

    for (record_pos, record) in dataset.purchase_records.iter().enumerate() {
        let slot = *seller_index
            .get(record.seller_id.as_str())
            .ok_or_else(|| AnalysisError::UnresolvedReference {
                kind: ReferenceKind::Seller,
                key: record.seller_id.clone(),
                record: record_pos,
            })?;
        let seller = &mut seller_stats[slot];

        seller.record_sale(record.total_amount, record.total_discount);

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                AnalysisError::UnresolvedReference {
                    kind: ReferenceKind::Product,
                    key: item.sku.clone(),
                    record: record_pos,
                }
            })?;

            let cost = product.purchase_price * item.quantity as f64;
            let item_revenue = calculate_revenue.revenue(item, product);
            seller.record_item(&item.sku, item.quantity, item_revenue - cost);
        }
    }

    rank_by_profit(&mut seller_stats);

    let total = seller_stats.len();
    let results: Vec<SellerResult> = seller_stats
        .into_iter()
        .enumerate()
        .map(|(index, seller)| {
            let bonus = calculate_bonus.bonus(index, total, &seller);
            let top_products = seller.top_products(TOP_PRODUCTS_LIMIT);
            seller.into_result(bonus, top_products)
        })
        .collect();

    debug!("Ranked {} sellers", results.len());

    Ok(results)
}

/// Check that all inputs are present before touching any data
///
/// **Private** - first step of analyze
fn validate_input<'a>(
    dataset: &Dataset,
    options: &AnalysisOptions<'a>,
) -> Result<(&'a dyn RevenueFormula, &'a dyn BonusFormula), AnalysisError> {
    if dataset.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput("sellers must not be empty".to_string()));
    }

    if dataset.products.is_empty() {
        return Err(AnalysisError::InvalidInput("products must not be empty".to_string()));
    }

    if dataset.purchase_records.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "purchase_records must not be empty".to_string(),
        ));
    }

    match (options.calculate_revenue, options.calculate_bonus) {
        (Some(revenue), Some(bonus)) => Ok((revenue, bonus)),
        (None, _) => Err(AnalysisError::InvalidInput(
            "revenue formula is required".to_string(),
        )),
        (_, None) => Err(AnalysisError::InvalidInput(
            "bonus formula is required".to_string(),
        )),
    }
}

/// One empty accumulator per seller, plus id -> position lookup
///
/// **Private** - rejects duplicate seller ids
fn build_seller_index(
    dataset: &Dataset,
) -> Result<(Vec<SellerStats>, HashMap<&str, usize>), AnalysisError> {
    let mut stats = Vec::with_capacity(dataset.sellers.len());
    let mut index = HashMap::with_capacity(dataset.sellers.len());

    for seller in &dataset.sellers {
        if index.insert(seller.id.as_str(), stats.len()).is_some() {
            return Err(AnalysisError::InvalidInput(format!(
                "duplicate seller id '{}'",
                seller.id
            )));
        }
        stats.push(SellerStats::new(seller.id.clone(), seller.display_name()));
    }

    Ok((stats, index))
}

/// SKU -> product lookup; a repeated SKU resolves to its last entry
///
/// **Private** - internal helper for analyze
fn build_product_index(dataset: &Dataset) -> HashMap<&str, &Product> {
    dataset
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect()
}

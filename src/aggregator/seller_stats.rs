//! Per-seller accumulator used during the aggregation pass.

use crate::parser::schema::{SellerResult, TopProduct};
use std::collections::HashMap;

use super::ranking::round_money;

/// Running totals for one seller
///
/// **Public** - passed to bonus formulas once the fold is complete
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    /// Seller identifier
    pub id: String,

    /// Display name ("First Last")
    pub name: String,

    /// Sum of `total_amount - total_discount` over the seller's receipts
    pub revenue: f64,

    /// Sum of `item_revenue - item_cost` over the seller's line items
    pub profit: f64,

    /// Number of receipts
    pub sales_count: u64,

    /// SKU -> cumulative quantity, tagged with first-sold order
    products_sold: HashMap<String, ProductTally>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ProductTally {
    quantity: u64,
    first_seen: usize,
}

impl SellerStats {
    /// Create an empty accumulator
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
        }
    }

    /// Count one receipt and add its net amount to revenue
    pub fn record_sale(&mut self, total_amount: f64, total_discount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount - total_discount;
    }

    /// Add one line item's profit and quantity
    ///
    /// Quantities saturate at `u64::MAX` instead of overflowing.
    pub fn record_item(&mut self, sku: &str, quantity: u64, profit: f64) {
        self.profit += profit;

        let next_order = self.products_sold.len();
        let tally = self
            .products_sold
            .entry(sku.to_string())
            .or_insert(ProductTally {
                quantity: 0,
                first_seen: next_order,
            });
        tally.quantity = tally.quantity.saturating_add(quantity);
    }

    /// Cumulative quantity sold for `sku` (0 if never sold)
    #[cfg(test)]
    fn quantity_sold(&self, sku: &str) -> u64 {
        self.products_sold.get(sku).map(|t| t.quantity).unwrap_or(0)
    }

    /// Number of distinct SKUs sold
    #[cfg(test)]
    fn distinct_products(&self) -> usize {
        self.products_sold.len()
    }

    /// Best-selling SKUs, by quantity (descending)
    ///
    /// Equal quantities keep the order in which the SKUs were first sold.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut tallies: Vec<(&String, &ProductTally)> = self.products_sold.iter().collect();

        tallies.sort_by(|(_, a), (_, b)| {
            b.quantity
                .cmp(&a.quantity)
                .then(a.first_seen.cmp(&b.first_seen))
        });

        tallies
            .into_iter()
            .take(limit)
            .map(|(sku, tally)| TopProduct {
                sku: sku.clone(),
                quantity: tally.quantity,
            })
            .collect()
    }

    /// Finalize into an output record with money rounded to cents
    pub fn into_result(self, bonus: f64, top_products: Vec<TopProduct>) -> SellerResult {
        SellerResult {
            seller_id: self.id,
            name: self.name,
            revenue: round_money(self.revenue),
            profit: round_money(self.profit),
            sales_count: self.sales_count,
            top_products,
            bonus: round_money(bonus),
        }
    }
}

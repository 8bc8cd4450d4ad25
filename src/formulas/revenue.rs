//! Reference revenue formula.

use super::RevenueFormula;
use crate::parser::schema::{Item, Product};
use crate::utils::config::DEFAULT_REVENUE_FORMULA;

/// Sale price times quantity, reduced by the item's discount percent
///
/// `revenue = sale_price * quantity * (1 - discount / 100)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueFormula for SimpleRevenue {
    fn revenue(&self, item: &Item, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * discount
    }

    fn name(&self) -> &str {
        DEFAULT_REVENUE_FORMULA
    }
}

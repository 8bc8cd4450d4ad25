//! Text summary of a report for terminal output.

use crate::parser::schema::Report;

/// Longest name shown before truncation
const NAME_WIDTH: usize = 24;

/// Render the first `max_lines` sellers as a table
///
/// **Public** - used by the analyze command's `--summary` flag
pub fn generate_text_summary(report: &Report, max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push("  SELLER RANKING (by profit)".to_string());
    lines.push(format!("  {}", "-".repeat(96)));
    lines.push(format!(
        "  {:>4}  {:<12} {:<24} {:>12} {:>12} {:>7} {:>10}  {}",
        "#", "SELLER", "NAME", "REVENUE", "PROFIT", "SALES", "BONUS", "TOP SKU"
    ));
    lines.push(format!("  {}", "-".repeat(96)));

    for (rank, seller) in report.sellers.iter().take(max_lines).enumerate() {
        let top_sku = seller
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "  {:>4}  {:<12} {:<24} {:>12.2} {:>12.2} {:>7} {:>10.2}  {}",
            rank + 1,
            seller.seller_id,
            truncate_name(&seller.name),
            seller.revenue,
            seller.profit,
            seller.sales_count,
            seller.bonus,
            top_sku
        ));
    }

    if report.sellers.len() > max_lines {
        lines.push(format!(
            "  ... {} more seller(s)",
            report.sellers.len() - max_lines
        ));
    }

    lines.push(format!("  {}", "-".repeat(96)));
    lines.push(format!(
        "  Total profit: {:.2} | Total bonus: {:.2} | Sellers: {}",
        report.total_profit(),
        report.total_bonus(),
        report.seller_count
    ));

    lines.join("\n")
}

/// Shorten long names so the table stays aligned
///
/// **Private** - counts chars, not bytes, so non-ASCII names are safe
fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

use anyhow::Result;
use std::path::PathBuf;
use crate::formulas::{bonus_formula_names, revenue_formula_names};
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.seller_count != report.sellers.len() {
        anyhow::bail!(
            "seller_count is {} but the report lists {} sellers",
            report.seller_count,
            report.sellers.len()
        );
    }

    let ranked = report
        .sellers
        .windows(2)
        .all(|pair| pair[0].profit >= pair[1].profit);
    if !ranked {
        anyhow::bail!("Sellers are not sorted by profit");
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Formulas: revenue={}, bonus={}", report.revenue_formula, report.bonus_formula);
    println!("  Sellers: {}", report.seller_count);
    println!("  Total Profit: {:.2}", report.total_profit());
    println!("  Total Bonus: {:.2}", report.total_bonus());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Seller Insights Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string      - ISO 8601 timestamp");
        println!("  revenue_formula: string   - Revenue formula used");
        println!("  bonus_formula: string     - Bonus formula used");
        println!("  seller_count: number      - Number of sellers");
        println!("  sellers: array            - Sellers ranked by profit (descending)");
        println!("    seller_id: string       - Seller identifier");
        println!("    name: string            - First and last name");
        println!("    revenue: number         - Receipt totals minus discounts (2 decimals)");
        println!("    profit: number          - Item revenue minus cost (2 decimals)");
        println!("    sales_count: number     - Number of receipts");
        println!("    top_products: array     - Up to 10 best-selling SKUs");
        println!("      sku: string           - Product SKU");
        println!("      quantity: number      - Units sold");
        println!("    bonus: number           - Rank-based bonus (2 decimals)");
        println!();
        println!("Revenue formulas: {}", revenue_formula_names().join(", "));
        println!("Bonus formulas:   {}", bonus_formula_names().join(", "));
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Seller Insights v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-seller revenue, profit, top products and bonus tiers from purchase records.");
}

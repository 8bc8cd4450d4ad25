//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads formula configuration
//! 2. Selects the revenue and bonus formulas
//! 3. Loads the dataset
//! 4. Runs the aggregation
//! 5. Writes the JSON report

use super::models::AnalyzeArgs;
use crate::aggregator::{analyze, AnalysisOptions};
use crate::formulas::{select_bonus_formula, select_revenue_formula};
use crate::output::{generate_text_summary, validate_path, write_report};
use crate::parser::{load_dataset, Report};
use crate::utils::config::{load_config, FormulaConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Largest accepted `summary_rows`
const MAX_SUMMARY_ROWS: usize = 1000;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written, so callers can inspect it
///
/// # Errors
/// * Config file or formula name errors
/// * Dataset read/parse errors
/// * Aggregation errors (empty arrays, unknown seller or SKU)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.input.display());

    // Step 1: Load formula configuration
    info!("Step 1/5: Loading formula configuration...");
    let config = resolve_config(&args)?;

    // Step 2: Select formulas
    info!(
        "Step 2/5: Selecting formulas (revenue={}, bonus={})...",
        config.revenue, config.bonus
    );
    let revenue_formula =
        select_revenue_formula(&config.revenue).context("Failed to select revenue formula")?;
    let bonus_formula = select_bonus_formula(&config.bonus, config.bonus_policy)
        .context("Failed to select bonus formula")?;

    // Step 3: Load dataset
    info!("Step 3/5: Loading dataset...");
    let dataset = load_dataset(&args.input)
        .with_context(|| format!("Failed to load dataset {}", args.input.display()))?;

    info!("Dataset: {}", dataset.summary());

    // Step 4: Aggregate
    info!("Step 4/5: Aggregating seller statistics...");
    let options = AnalysisOptions::new(&*revenue_formula, &*bonus_formula);
    let results = analyze(&dataset, &options).context("Failed to analyze sales data")?;

    debug!("Top 3 sellers:");
    for (i, seller) in results.iter().take(3).enumerate() {
        debug!(
            "  {}. {} profit {:.2}, bonus {:.2}",
            i + 1,
            seller.seller_id,
            seller.profit,
            seller.bonus
        );
    }

    // Step 5: Write report
    info!("Step 5/5: Writing report...");
    let report = Report::new(results, revenue_formula.name(), bonus_formula.name());

    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(100));
        println!("SALES SUMMARY");
        println!("{}", "=".repeat(100));
        println!("Dataset: {}", args.input.display());
        println!(
            "Formulas: revenue={}, bonus={}",
            report.revenue_formula, report.bonus_formula
        );
        println!("\n{}", generate_text_summary(&report, args.summary_rows));
        println!("{}", "=".repeat(100));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Config file (or defaults) with command-line overrides applied
///
/// **Private** - internal helper for execute_analyze
fn resolve_config(args: &AnalyzeArgs) -> Result<FormulaConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            debug!("No config file given, using reference formulas");
            FormulaConfig::default()
        }
    };

    if let Some(revenue) = &args.revenue_formula {
        config.revenue = revenue.clone();
    }

    if let Some(bonus) = &args.bonus_formula {
        config.bonus = bonus.clone();
    }

    Ok(config)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    validate_path(&args.output_json).context("Invalid output path")?;

    if let Some(config) = &args.config {
        if !config.is_file() {
            anyhow::bail!("Config file not found: {}", config.display());
        }
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    if args.summary_rows > MAX_SUMMARY_ROWS {
        anyhow::bail!("summary_rows is too large (max {})", MAX_SUMMARY_ROWS);
    }

    Ok(())
}

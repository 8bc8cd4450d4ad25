//! Seller Insights CLI
//!
//! Ranks sellers by profit and computes bonuses from a sales dataset.
//! Writes a JSON report and an optional text summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use seller_insights::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};

/// Seller Insights - sales performance and bonus tiers per seller
#[derive(Parser, Debug)]
#[command(name = "seller-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a sales dataset
    Analyze {
        /// Dataset JSON (sellers, products, purchase_records)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Formula configuration TOML
        #[arg(short, long, env = "SELLER_INSIGHTS_CONFIG")]
        config: Option<PathBuf>,

        /// Revenue formula (overrides config)
        #[arg(long)]
        revenue: Option<String>,

        /// Bonus formula (overrides config)
        #[arg(long)]
        bonus: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of sellers shown in the summary
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            config,
            revenue,
            bonus,
            summary,
            top,
        } => {
            let args = AnalyzeArgs {
                input,
                output_json: output,
                config,
                revenue_formula: revenue,
                bonus_formula: bonus,
                print_summary: summary,
                summary_rows: top,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the dataset JSON
    pub input: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Formula configuration TOML (optional)
    pub config: Option<PathBuf>,

    /// Revenue formula name, overrides the config file
    pub revenue_formula: Option<String>,

    /// Bonus formula name, overrides the config file
    pub bonus_formula: Option<String>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of sellers shown in the summary
    pub summary_rows: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.json"),
            output_json: PathBuf::from("report.json"),
            config: None,
            revenue_formula: None,
            bonus_formula: None,
            print_summary: false,
            summary_rows: 10,
        }
    }
}

//! Dataset loader.
//!
//! Reads the raw sales dataset (sellers, products, purchase records) from JSON
//! into typed records. Structural checks that make a dataset unusable
//! (empty arrays, unresolved references) belong to the aggregator; the loader
//! only rejects malformed JSON and warns about data that looks wrong but is
//! still processable.

use super::schema::Dataset;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a dataset from a JSON file
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `ParseError::Io` - File cannot be opened
/// * `ParseError::JsonError` - Invalid JSON or wrongly typed fields
pub fn load_dataset(input_path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading dataset from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;

    inspect_dataset(&dataset);

    Ok(dataset)
}

/// Parse a dataset from an in-memory JSON value
///
/// **Public** - useful when the caller already holds the JSON
pub fn parse_dataset(raw: &serde_json::Value) -> Result<Dataset, ParseError> {
    let dataset = Dataset::deserialize(raw)?;
    inspect_dataset(&dataset);
    Ok(dataset)
}

/// Parse a dataset from a JSON string
pub fn parse_dataset_str(raw: &str) -> Result<Dataset, ParseError> {
    let dataset: Dataset = serde_json::from_str(raw)?;
    inspect_dataset(&dataset);
    Ok(dataset)
}

impl Dataset {
    /// Record counts for logging and display
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            sellers: self.sellers.len(),
            products: self.products.len(),
            purchase_records: self.purchase_records.len(),
            line_items: self.purchase_records.iter().map(|r| r.items.len()).sum(),
        }
    }
}

/// Record counts of a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub sellers: usize,
    pub products: usize,
    pub purchase_records: usize,
    pub line_items: usize,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sellers: {} | Products: {} | Purchase records: {} | Line items: {}",
            self.sellers, self.products, self.purchase_records, self.line_items
        )
    }
}

/// Log warnings for accepted-but-suspicious input
///
/// **Private** - called by every loader
fn inspect_dataset(dataset: &Dataset) {
    debug!("Parsed dataset: {}", dataset.summary());

    let mut seen_skus = HashSet::new();
    for product in &dataset.products {
        if !seen_skus.insert(product.sku.as_str()) {
            warn!(
                "Duplicate product SKU '{}': the last entry wins",
                product.sku
            );
        }
    }

    for (index, record) in dataset.purchase_records.iter().enumerate() {
        if record.items.is_empty() {
            warn!("Purchase record #{} has no line items", index);
        }

        for item in &record.items {
            if !(0.0..=100.0).contains(&item.discount) {
                warn!(
                    "Purchase record #{}: item '{}' has discount {} outside 0-100",
                    index, item.sku, item.discount
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> serde_json::Value {
        json!({
            "sellers": [
                { "id": "seller_1", "first_name": "Ann", "last_name": "Lee" }
            ],
            "products": [
                { "sku": "SKU_001", "purchase_price": 40.0, "name": "Kettle" }
            ],
            "purchase_records": [
                {
                    "receipt_id": "receipt_1",
                    "seller_id": "seller_1",
                    "total_amount": 180.0,
                    "total_discount": 20.0,
                    "items": [
                        { "sku": "SKU_001", "quantity": 2, "sale_price": 100.0, "discount": 10 }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_parse_dataset() {
        let dataset = parse_dataset(&sample_json()).unwrap();

        assert_eq!(dataset.sellers[0].id, "seller_1");
        assert_eq!(dataset.products[0].name.as_deref(), Some("Kettle"));
        assert_eq!(dataset.purchase_records[0].items[0].quantity, 2);
        assert_eq!(dataset.purchase_records[0].items[0].discount, 10.0);
    }

    #[test]
    fn test_summary_counts_line_items() {
        let dataset = parse_dataset(&sample_json()).unwrap();
        let summary = dataset.summary();

        assert_eq!(summary.sellers, 1);
        assert_eq!(summary.products, 1);
        assert_eq!(summary.purchase_records, 1);
        assert_eq!(summary.line_items, 1);
    }

    #[test]
    fn test_parse_wrong_type_fails() {
        let raw = json!({ "sellers": "not-an-array" });
        assert!(matches!(parse_dataset(&raw), Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_parse_negative_quantity_fails() {
        let raw = r#"{"purchase_records": [{"seller_id": "s", "total_amount": 1, "total_discount": 0,
            "items": [{"sku": "a", "quantity": -1, "sale_price": 1, "discount": 0}]}]}"#;
        assert!(parse_dataset_str(raw).is_err());
    }

    #[test]
    fn test_item_without_discount_fails() {
        let raw = r#"{"purchase_records": [{"seller_id": "s", "total_amount": 1, "total_discount": 0,
            "items": [{"sku": "a", "quantity": 1, "sale_price": 1}]}]}"#;

        let err = parse_dataset_str(raw).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
        assert!(err.to_string().contains("discount"));
    }

    #[test]
    fn test_record_without_total_discount_fails() {
        let raw = r#"{"purchase_records": [{"seller_id": "s", "total_amount": 1,
            "items": [{"sku": "a", "quantity": 1, "sale_price": 1, "discount": 0}]}]}"#;

        let err = parse_dataset_str(raw).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
        assert!(err.to_string().contains("total_discount"));
    }

    #[test]
    fn test_record_without_items_fails() {
        let raw = json!({
            "purchase_records": [
                { "seller_id": "s", "total_amount": 1.0, "total_discount": 0.0 }
            ]
        });

        assert!(matches!(parse_dataset(&raw), Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", sample_json()).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.purchase_records.len(), 1);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let result = load_dataset("/nonexistent/dataset.json");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}

//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Defining typed input records and output schema
//! - Loading datasets from JSON files or values
//! - Flagging suspicious (but accepted) input

pub mod dataset;
pub mod schema;

// Re-export main types
pub use dataset::{load_dataset, parse_dataset, parse_dataset_str, DatasetSummary};
pub use schema::{Dataset, Item, Product, PurchaseRecord, Report, Seller, SellerResult, TopProduct};

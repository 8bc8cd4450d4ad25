use pretty_assertions::assert_eq;
use seller_insights::aggregator::{analyze, round_money, AnalysisOptions, SellerStats};
use seller_insights::formulas::{BonusByProfit, SimpleRevenue};
use seller_insights::parser::{parse_dataset, Dataset, Item, Product};
use seller_insights::utils::error::{AnalysisError, ReferenceKind};
use serde_json::json;
use std::collections::HashSet;

fn sample_dataset() -> Dataset {
    parse_dataset(&json!({
        "sellers": [
            { "id": "seller_1", "first_name": "Ann", "last_name": "Lee" },
            { "id": "seller_2", "first_name": "Boris", "last_name": "Ivanov" },
            { "id": "seller_3", "first_name": "Chen", "last_name": "Wu" },
            { "id": "seller_4", "first_name": "Dana", "last_name": "Kim" }
        ],
        "products": [
            { "sku": "SKU_001", "purchase_price": 10.0 },
            { "sku": "SKU_002", "purchase_price": 20.0 },
            { "sku": "SKU_003", "purchase_price": 5.5 }
        ],
        "purchase_records": [
            {
                "receipt_id": "r1", "seller_id": "seller_1",
                "total_amount": 57.0, "total_discount": 3.0,
                "items": [
                    { "sku": "SKU_001", "quantity": 2, "sale_price": 15.0, "discount": 0 },
                    { "sku": "SKU_002", "quantity": 1, "sale_price": 30.0, "discount": 10 }
                ]
            },
            {
                "receipt_id": "r2", "seller_id": "seller_2",
                "total_amount": 100.0, "total_discount": 0.0,
                "items": [
                    { "sku": "SKU_003", "quantity": 10, "sale_price": 10.0, "discount": 0 }
                ]
            },
            {
                "receipt_id": "r3", "seller_id": "seller_1",
                "total_amount": 22.0, "total_discount": 0.0,
                "items": [
                    { "sku": "SKU_003", "quantity": 2, "sale_price": 11.0, "discount": 0 }
                ]
            },
            {
                "receipt_id": "r4", "seller_id": "seller_3",
                "total_amount": 18.0, "total_discount": 0.0,
                "items": [
                    { "sku": "SKU_002", "quantity": 1, "sale_price": 18.0, "discount": 0 }
                ]
            }
        ]
    }))
    .unwrap()
}

fn run(dataset: &Dataset) -> Result<Vec<seller_insights::parser::SellerResult>, AnalysisError> {
    let revenue = SimpleRevenue;
    let bonus = BonusByProfit::new();
    analyze(dataset, &AnalysisOptions::new(&revenue, &bonus))
}

#[test]
fn test_sales_count_sums_to_record_count() {
    let dataset = sample_dataset();
    let results = run(&dataset).unwrap();

    let total: u64 = results.iter().map(|r| r.sales_count).sum();
    assert_eq!(total as usize, dataset.purchase_records.len());
}

#[test]
fn test_every_seller_appears_once() {
    let dataset = sample_dataset();
    let results = run(&dataset).unwrap();

    assert_eq!(results.len(), dataset.sellers.len());

    let input_ids: HashSet<&str> = dataset.sellers.iter().map(|s| s.id.as_str()).collect();
    let output_ids: HashSet<&str> = results.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(input_ids, output_ids);
}

#[test]
fn test_results_sorted_by_profit() {
    let results = run(&sample_dataset()).unwrap();
    assert!(results.windows(2).all(|w| w[0].profit >= w[1].profit));
}

#[test]
fn test_expected_figures() {
    let results = run(&sample_dataset()).unwrap();

    // seller_2: 100 - 55 = 45
    assert_eq!(results[0].seller_id, "seller_2");
    assert_eq!(results[0].name, "Boris Ivanov");
    assert_eq!(results[0].profit, 45.0);
    assert_eq!(results[0].revenue, 100.0);
    assert_eq!(results[0].bonus, 6.75);

    // seller_1: (30 - 20) + (27 - 20) + (22 - 11) = 28
    assert_eq!(results[1].seller_id, "seller_1");
    assert_eq!(results[1].profit, 28.0);
    assert_eq!(results[1].revenue, 76.0);
    assert_eq!(results[1].sales_count, 2);
    assert_eq!(results[1].bonus, 2.8);

    // seller_3: 18 - 20 = -2, rank 2 still gets the runner-up rate
    assert_eq!(results[2].seller_id, "seller_3");
    assert_eq!(results[2].profit, -2.0);
    assert_eq!(results[2].bonus, -0.2);

    // seller_4 sold nothing and is last
    assert_eq!(results[3].seller_id, "seller_4");
    assert_eq!(results[3].profit, 0.0);
    assert_eq!(results[3].sales_count, 0);
    assert!(results[3].top_products.is_empty());
    assert_eq!(results[3].bonus, 0.0);
}

#[test]
fn test_top_products_limited_and_sorted() {
    let mut dataset = sample_dataset();
    dataset.products = (0..15)
        .map(|i| Product {
            sku: format!("SKU_{:03}", i),
            purchase_price: 1.0,
            name: None,
        })
        .collect();
    dataset.purchase_records.truncate(1);
    dataset.purchase_records[0].items = (0..15)
        .map(|i| Item {
            sku: format!("SKU_{:03}", i),
            quantity: (i % 7) + 1,
            sale_price: 2.0,
            discount: 0.0,
        })
        .collect();

    let results = run(&dataset).unwrap();
    let seller = results.iter().find(|r| r.seller_id == "seller_1").unwrap();

    assert_eq!(seller.top_products.len(), 10);
    assert!(seller
        .top_products
        .windows(2)
        .all(|w| w[0].quantity >= w[1].quantity));
    assert_eq!(seller.top_products[0].quantity, 7);
}

#[test]
fn test_money_is_rounded() {
    let results = run(&sample_dataset()).unwrap();

    for result in &results {
        assert_eq!(round_money(result.revenue), result.revenue);
        assert_eq!(round_money(result.profit), result.profit);
        assert_eq!(round_money(result.bonus), result.bonus);
    }
}

#[test]
fn test_bonus_tiers_by_rank() {
    let profits = [500.0, 300.0, 300.0, 100.0, 50.0];
    let mut dataset = sample_dataset();
    dataset.sellers = (0..profits.len())
        .map(|i| seller_insights::parser::Seller {
            id: format!("s{}", i),
            first_name: "Seller".to_string(),
            last_name: i.to_string(),
        })
        .collect();
    dataset.products = vec![Product {
        sku: "FREE".to_string(),
        purchase_price: 0.0,
        name: None,
    }];
    dataset.purchase_records = profits
        .iter()
        .enumerate()
        .map(|(i, profit)| seller_insights::parser::PurchaseRecord {
            receipt_id: None,
            seller_id: format!("s{}", i),
            total_amount: *profit,
            total_discount: 0.0,
            items: vec![Item {
                sku: "FREE".to_string(),
                quantity: 1,
                sale_price: *profit,
                discount: 0.0,
            }],
        })
        .collect();

    let results = run(&dataset).unwrap();
    let bonuses: Vec<f64> = results.iter().map(|r| r.bonus).collect();

    assert_eq!(bonuses, vec![75.0, 30.0, 30.0, 5.0, 0.0]);

    // Equal profits keep input order
    assert_eq!(results[1].seller_id, "s1");
    assert_eq!(results[2].seller_id, "s2");
}

#[test]
fn test_single_seller_gets_leader_bonus() {
    let mut dataset = sample_dataset();
    dataset.sellers.truncate(1);
    dataset
        .purchase_records
        .retain(|r| r.seller_id == "seller_1");

    let results = run(&dataset).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].bonus, 4.2);
}

#[test]
fn test_empty_sellers_is_invalid() {
    let mut dataset = sample_dataset();
    dataset.sellers.clear();

    assert!(matches!(run(&dataset), Err(AnalysisError::InvalidInput(_))));
}

#[test]
fn test_empty_products_and_records_are_invalid() {
    let mut no_products = sample_dataset();
    no_products.products.clear();
    assert!(matches!(run(&no_products), Err(AnalysisError::InvalidInput(_))));

    let mut no_records = sample_dataset();
    no_records.purchase_records.clear();
    assert!(matches!(run(&no_records), Err(AnalysisError::InvalidInput(_))));
}

#[test]
fn test_missing_bonus_formula_is_invalid() {
    let revenue = SimpleRevenue;
    let options = AnalysisOptions::default().with_revenue(&revenue);

    assert!(matches!(
        analyze(&sample_dataset(), &options),
        Err(AnalysisError::InvalidInput(_))
    ));
}

#[test]
fn test_unresolved_sku() {
    let mut dataset = sample_dataset();
    dataset.purchase_records[2].items[0].sku = "SKU_404".to_string();

    assert_eq!(
        run(&dataset),
        Err(AnalysisError::UnresolvedReference {
            kind: ReferenceKind::Product,
            key: "SKU_404".to_string(),
            record: 2,
        })
    );
}

#[test]
fn test_custom_closures() {
    let list_price = |item: &Item, _product: &Product| item.sale_price * item.quantity as f64;
    let flat = |_index: usize, _total: usize, _seller: &SellerStats| 1.0;

    let results = analyze(&sample_dataset(), &AnalysisOptions::new(&list_price, &flat)).unwrap();

    // Ignoring the 10% discount raises seller_1's profit by 3
    let seller_1 = results.iter().find(|r| r.seller_id == "seller_1").unwrap();
    assert_eq!(seller_1.profit, 31.0);
    assert!(results.iter().all(|r| r.bonus == 1.0));
}

#[test]
fn test_input_not_mutated() {
    let dataset = sample_dataset();
    let before = dataset.clone();

    run(&dataset).unwrap();
    run(&dataset).unwrap();

    assert_eq!(dataset, before);
}

#[test]
fn test_money_rounds_stored_value() {
    let mut dataset = sample_dataset();
    dataset.sellers.truncate(1);
    dataset.products = vec![Product {
        sku: "PENNY".to_string(),
        purchase_price: 0.0,
        name: None,
    }];
    dataset.purchase_records.truncate(1);
    dataset.purchase_records[0].total_amount = 0.015;
    dataset.purchase_records[0].total_discount = 0.0;
    dataset.purchase_records[0].items = vec![Item {
        sku: "PENNY".to_string(),
        quantity: 1,
        sale_price: 0.015,
        discount: 0.0,
    }];

    let results = run(&dataset).unwrap();

    // 0.015 is stored just below the midpoint
    assert_eq!(results[0].revenue, 0.01);
    assert_eq!(results[0].profit, 0.01);
    assert_eq!(round_money(1.115), 1.11);
    assert_eq!(round_money(0.125), 0.13);
}

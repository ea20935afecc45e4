//! レビュー対象の抽出テスト
//!
//! 配送済み注文の商品だけがレビュー可能

use chrono::NaiveDateTime;
use vividhands::error::StorefrontError;
use vividhands::review::{require_reviewable, reviewable_products};
use vividhands_common::timestamp::parse_timestamp;
use vividhands_common::{Order, OrderItem, Product};

fn at(s: &str) -> NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

fn create_test_order(id: i64, order_date: &str, products: &[(i64, &str)]) -> Order {
    Order {
        id,
        order_date: Some(order_date.to_string()),
        items: products
            .iter()
            .map(|&(product_id, name)| OrderItem {
                id: product_id * 10,
                product: Some(Product {
                    id: product_id,
                    name: name.to_string(),
                    ..Default::default()
                }),
                quantity: 1,
                price: 500.0,
            })
            .collect(),
        ..Default::default()
    }
}

fn orders() -> Vec<Order> {
    vec![
        // 配送済み
        create_test_order(1, "2024-03-01T10:00:00", &[(7, "Block Print Scarf"), (8, "Clay Mug")]),
        // 配送中
        create_test_order(2, "2024-03-18T10:00:00", &[(9, "Teak Bowl")]),
        // 同じ商品を再注文
        create_test_order(3, "2024-03-02T10:00:00", &[(7, "Block Print Scarf")]),
    ]
}

#[test]
fn test_only_delivered_items_are_reviewable() {
    let candidates = reviewable_products(&orders(), at("2024-03-20T10:00:00"));
    let ids: Vec<i64> = candidates.iter().map(|c| c.product_id).collect();

    assert_eq!(ids, vec![7, 8]);
    assert_eq!(candidates[0].order_id, 1);
}

#[test]
fn test_require_reviewable_accepts_delivered_item() {
    let choice = require_reviewable(&orders(), 8, at("2024-03-20T10:00:00")).unwrap();
    assert_eq!(choice.name, "Clay Mug");
}

#[test]
fn test_require_reviewable_rejects_in_transit_item() {
    let result = require_reviewable(&orders(), 9, at("2024-03-20T10:00:00"));
    match result {
        Err(StorefrontError::NotFound(msg)) => assert_eq!(msg, "delivered item 9"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_require_reviewable_rejects_never_ordered_item() {
    let result = require_reviewable(&orders(), 42, at("2024-03-20T10:00:00"));
    assert!(matches!(result, Err(StorefrontError::NotFound(_))));
}

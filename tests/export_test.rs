//! 注文一覧xlsx出力の統合テスト

use std::path::Path;
use tempfile::tempdir;
use vividhands::export::{export_orders, output_path};
use vividhands_common::{Order, OrderItem, Product};

fn create_test_order(id: i64) -> Order {
    Order {
        id,
        delivery_address: format!("{} Potters Street", id),
        city: "Khurja".into(),
        state: "Uttar Pradesh".into(),
        zip_code: "203131".into(),
        phone_number: "9000000000".into(),
        total_amount: 850.0 * id as f64,
        razorpay_payment_id: Some(format!("pay_TEST{:06}", id)),
        order_date: Some("2024-03-01T10:00:00".into()),
        items: vec![OrderItem {
            id,
            product: Some(Product {
                id: 100 + id,
                name: format!("Glazed Bowl {}", id),
                price: 850.0,
                ..Default::default()
            }),
            quantity: id as u32,
            price: 850.0,
        }],
    }
}

#[test]
fn test_output_path_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert_eq!(output_path(dir.path()), dir.path().join("artisan-orders.xlsx"));
}

#[test]
fn test_output_path_without_extension() {
    assert_eq!(
        output_path(Path::new("reports/march")),
        Path::new("reports/march").join("artisan-orders.xlsx")
    );
}

#[test]
fn test_output_path_with_extension() {
    assert_eq!(output_path(Path::new("orders.xlsx")), Path::new("orders.xlsx"));
}

#[test]
fn test_export_orders_writes_xlsx() {
    let dir = tempdir().expect("Failed to create temp dir");
    let orders: Vec<Order> = (1..=3).map(create_test_order).collect();

    let path = export_orders(&orders, &dir.path().join("out").join("orders.xlsx"))
        .expect("xlsx出力に失敗");

    assert!(path.exists(), "xlsxファイルが作成されていない");
    let bytes = std::fs::read(&path).expect("ファイル読み込み失敗");
    assert!(bytes.starts_with(b"PK"), "zip形式ではない");
}

/// 注文0件でもヘッダのみのファイルを出す
#[test]
fn test_export_empty_orders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = export_orders(&[], dir.path()).expect("xlsx出力に失敗");

    assert_eq!(path, dir.path().join("artisan-orders.xlsx"));
    assert!(path.exists());
}

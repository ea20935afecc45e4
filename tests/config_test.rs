//! 設定ファイルの保存・読み込み

use tempfile::tempdir;
use vividhands::config::Config;
use vividhands::error::StorefrontError;
use vividhands_common::{Product, Session};

fn product(id: i64, stock: i64) -> Product {
    Product {
        id,
        name: format!("Handwoven Basket {}", id),
        price: 1299.0,
        stock,
        ..Default::default()
    }
}

/// ファイルが無ければ既定値
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();

    assert_eq!(config.api_url, "http://localhost:8080");
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.user.is_none());
    assert!(config.artisan.is_none());
    assert!(config.cart.is_empty());
}

/// セッションとカートが保存後も残る
#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.user = Some(Session {
        token: "user-token".into(),
        id: 42,
        name: Some("Asha".into()),
    });
    config.cart.add(&product(1, 10), 2).unwrap();
    config.cart.add(&product(2, 3), 1).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.user, config.user);
    assert_eq!(loaded.cart, config.cart);
    assert_eq!(loaded.cart.item_count(), 3);
}

/// 欠けた項目は既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"apiUrl": "ignored", "api_url": "https://shop.example.com"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api_url, "https://shop.example.com");
    assert_eq!(config.timeout_seconds, 30);
}

#[test]
fn test_broken_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(StorefrontError::Json(_))));
}

#[test]
fn test_sessions_required() {
    let config = Config::default();
    assert!(matches!(config.user_session(), Err(StorefrontError::NotSignedIn)));
    assert!(matches!(config.artisan_session(), Err(StorefrontError::ArtisanNotSignedIn)));
}

/// フラグ指定が最優先
#[test]
fn test_flag_overrides_api_url() {
    let config = Config::default();
    assert_eq!(config.resolve_api_url(Some("http://127.0.0.1:9000")), "http://127.0.0.1:9000");

    let routes = config.routes(Some("http://127.0.0.1:9000/"));
    assert_eq!(routes.products(), "http://127.0.0.1:9000/api/products");
}

//! エラーケーステスト
//!
//! エラーメッセージの表示と、API応答からのメッセージ抽出を検証

use vividhands::client::api_error_message;
use vividhands::error::StorefrontError;

/// StorefrontErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        StorefrontError::Config("ホームディレクトリなし".to_string()),
        StorefrontError::NotSignedIn,
        StorefrontError::ArtisanNotSignedIn,
        StorefrontError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        },
        StorefrontError::InvalidDate("2024-13-01".to_string()),
        StorefrontError::Prompt("not a terminal".to_string()),
        StorefrontError::Export("disk full".to_string()),
        StorefrontError::NotFound("product 9".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_sign_in_hints() {
    assert!(StorefrontError::NotSignedIn.to_string().contains("vividhands login"));
    assert!(StorefrontError::ArtisanNotSignedIn
        .to_string()
        .contains("vividhands artisan login"));
}

/// 入力チェックのエラーはそのまま表示
#[test]
fn test_validation_is_transparent() {
    let err: StorefrontError = vividhands_common::Error::InvalidRating(0).into();
    assert_eq!(err.to_string(), "Rating must be between 1 and 5 (got 0)");

    let err: StorefrontError = vividhands_common::Error::OutOfStock("Jute Rug".into()).into();
    assert_eq!(err.to_string(), "Jute Rug is out of stock");
}

#[test]
fn test_api_error_display() {
    let err = StorefrontError::Api {
        status: 404,
        message: "Product not found".into(),
    };
    assert_eq!(err.to_string(), "API error (404): Product not found");
}

#[test]
fn test_api_error_message_json_error_key() {
    assert_eq!(api_error_message(400, r#"{"error":"Email already exists"}"#), "Email already exists");
}

#[test]
fn test_api_error_message_json_message_key() {
    assert_eq!(api_error_message(401, r#"{"message":"Bad credentials"}"#), "Bad credentials");
}

/// JSONでなければ本文そのまま
#[test]
fn test_api_error_message_plain_text() {
    assert_eq!(api_error_message(500, "  Something broke \n"), "Something broke");
}

/// 本文が空ならステータス名
#[test]
fn test_api_error_message_empty_body() {
    assert_eq!(api_error_message(404, ""), "Not Found");
    assert_eq!(api_error_message(403, "   "), "Forbidden");
}

/// 該当キーの無いJSONは本文を使う
#[test]
fn test_api_error_message_json_without_known_key() {
    assert_eq!(api_error_message(422, r#"{"status":422}"#), r#"{"status":422}"#);
}

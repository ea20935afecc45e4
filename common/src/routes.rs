//! REST APIのパス組み立て

use chrono::NaiveDateTime;

/// ローカル開発時のバックエンド
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// APIエンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiRoutes {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }

    // 商品
    pub fn products(&self) -> String {
        self.api("/products")
    }

    pub fn product(&self, product_id: i64) -> String {
        self.api(&format!("/products/{}", product_id))
    }

    pub fn product_reviews(&self, product_id: i64) -> String {
        self.api(&format!("/products/{}/reviews", product_id))
    }

    pub fn my_products(&self) -> String {
        self.api("/products/my-products")
    }

    pub fn update_product(&self, product_id: i64) -> String {
        self.api(&format!("/products/update/{}", product_id))
    }

    pub fn delete_product(&self, product_id: i64) -> String {
        self.api(&format!("/products/delete/{}", product_id))
    }

    // 注文
    pub fn user_orders(&self, user_id: i64) -> String {
        self.api(&format!("/orders/user/{}", user_id))
    }

    pub fn order(&self, order_id: i64) -> String {
        self.api(&format!("/orders/{}", order_id))
    }

    /// 期間指定（ISO日時）
    pub fn orders_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> String {
        const ISO: &str = "%Y-%m-%dT%H:%M:%S";
        self.api(&format!(
            "/orders/filter?start={}&end={}",
            start.format(ISO),
            end.format(ISO)
        ))
    }

    pub fn artisan_orders(&self, artisan_id: i64) -> String {
        self.api(&format!("/orders/artisan/{}/orders", artisan_id))
    }

    pub fn artisan_order(&self, artisan_id: i64, order_id: i64) -> String {
        self.api(&format!("/orders/artisan/{}/orders/{}", artisan_id, order_id))
    }

    // レビュー
    pub fn reviews(&self) -> String {
        self.api("/reviews")
    }

    // 出品者
    pub fn dashboard_stats(&self) -> String {
        self.api("/artisan/dashboard/stats")
    }

    pub fn artisan_login(&self) -> String {
        self.api("/artisan/login")
    }

    // 認証
    pub fn login(&self) -> String {
        self.api("/auth/login")
    }

    pub fn register(&self) -> String {
        self.api("/auth/register")
    }
}

/// エラー応答の本文から表示用メッセージを取り出す
///
/// `{"error": "..."}` / `{"message": "..."}` / 本文そのまま の順。空ならNone
pub fn error_message_from_body(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::parse_timestamp;

    #[test]
    fn test_default_base() {
        let routes = ApiRoutes::default();
        assert_eq!(routes.products(), "http://localhost:8080/api/products");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let routes = ApiRoutes::new("https://shop.example.com/ ");
        assert_eq!(routes.base(), "https://shop.example.com");
        assert_eq!(routes.reviews(), "https://shop.example.com/api/reviews");
    }

    #[test]
    fn test_order_routes() {
        let routes = ApiRoutes::new("http://h");
        assert_eq!(routes.user_orders(5), "http://h/api/orders/user/5");
        assert_eq!(routes.order(9), "http://h/api/orders/9");
        assert_eq!(routes.artisan_orders(2), "http://h/api/orders/artisan/2/orders");
        assert_eq!(routes.artisan_order(2, 9), "http://h/api/orders/artisan/2/orders/9");
    }

    #[test]
    fn test_orders_between() {
        let routes = ApiRoutes::new("http://h");
        let start = parse_timestamp("2024-01-01").unwrap();
        let end = parse_timestamp("2024-01-31T23:59:59").unwrap();
        assert_eq!(
            routes.orders_between(start, end),
            "http://h/api/orders/filter?start=2024-01-01T00:00:00&end=2024-01-31T23:59:59"
        );
    }

    #[test]
    fn test_artisan_product_routes() {
        let routes = ApiRoutes::new("http://h");
        assert_eq!(routes.my_products(), "http://h/api/products/my-products");
        assert_eq!(routes.update_product(4), "http://h/api/products/update/4");
        assert_eq!(routes.delete_product(4), "http://h/api/products/delete/4");
        assert_eq!(routes.dashboard_stats(), "http://h/api/artisan/dashboard/stats");
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(error_message_from_body(r#"{"error":"Out of stock"}"#).as_deref(), Some("Out of stock"));
        assert_eq!(error_message_from_body(r#"{"message":"Unauthorized"}"#).as_deref(), Some("Unauthorized"));
        assert_eq!(error_message_from_body("Bad Gateway\n").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message_from_body("  "), None);
    }
}

//! APIのDTO定義
//!
//! バックエンドのJSONをそのまま写した型。どのフィールドも欠落・nullがあり得るので
//! `#[serde(default)]` と `null_default` でガードする。

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::timestamp;

/// nullを型のデフォルト値として読む
fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 商品
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,

    #[serde(deserialize_with = "null_default")]
    pub name: String,

    #[serde(deserialize_with = "null_default")]
    pub description: String,

    #[serde(deserialize_with = "null_default")]
    pub price: f64,

    #[serde(deserialize_with = "null_default")]
    pub stock: i64,

    /// 作り手のカテゴリ（一覧のフィルタ対象）
    #[serde(deserialize_with = "null_default")]
    pub artisan_category: String,

    /// 商品自体のカテゴリ（artisanCategoryが無いときの代替）
    #[serde(deserialize_with = "null_default")]
    pub category: String,

    #[serde(deserialize_with = "null_default")]
    pub ethical_score: f64,

    #[serde(deserialize_with = "null_default")]
    pub materials: String,

    /// 画像URL
    #[serde(deserialize_with = "null_default")]
    pub image_data: Vec<String>,

    #[serde(deserialize_with = "null_default")]
    pub average_rating: f64,

    #[serde(deserialize_with = "null_default")]
    pub review_count: u32,

    #[serde(deserialize_with = "null_default")]
    pub sales_count: u32,

    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<String>,
}

impl Product {
    /// フィルタ・バッジに使うカテゴリ名
    pub fn category_label(&self) -> &str {
        if self.artisan_category.is_empty() {
            &self.category
        } else {
            &self.artisan_category
        }
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.image_data
            .iter()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }
}

/// 注文明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    pub product: Option<Product>,
    #[serde(deserialize_with = "null_default")]
    pub quantity: u32,
    #[serde(deserialize_with = "null_default")]
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// 注文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub delivery_address: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_default")]
    pub total_amount: f64,
    pub razorpay_payment_id: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub order_date: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// 注文一覧レスポンスを解析。配列でなければ空として扱う
    pub fn list_from_json(value: serde_json::Value) -> Result<Vec<Order>> {
        if !value.is_array() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// 決済IDの末尾6文字
    pub fn payment_badge(&self) -> Option<String> {
        let id = self.razorpay_payment_id.as_deref()?;
        let chars: Vec<char> = id.chars().collect();
        let start = chars.len().saturating_sub(6);
        Some(chars[start..].iter().collect())
    }

    pub fn city_line(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// レビュー投稿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub product_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl ReviewRequest {
    pub fn new(product_id: i64, rating: u8, comment: impl Into<String>) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidRating(rating));
        }
        Ok(Self {
            product_id,
            rating,
            comment: comment.into(),
        })
    }
}

/// 商品レビュー（読み取り用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub rating: u8,
    #[serde(deserialize_with = "null_default")]
    pub comment: String,
    #[serde(deserialize_with = "null_default")]
    pub user_name: String,
    #[serde(deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<String>,
}

/// 出品者ダッシュボードの集計値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_default")]
    pub total_products: u32,
    #[serde(deserialize_with = "null_default")]
    pub total_orders: u32,
    #[serde(deserialize_with = "null_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "null_default")]
    pub total_sales: u32,
    #[serde(deserialize_with = "null_default")]
    pub low_stock_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// ログイン応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    #[serde(deserialize_with = "null_default")]
    pub token: String,
    pub user_id: Option<i64>,
    pub artisan_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthResponse {
    /// 利用者セッションに変換（IDが無ければNone）
    pub fn user_session(&self) -> Option<Session> {
        self.session_with(self.user_id)
    }

    /// 出品者セッションに変換
    pub fn artisan_session(&self) -> Option<Session> {
        self.session_with(self.artisan_id)
    }

    fn session_with(&self, id: Option<i64>) -> Option<Session> {
        if self.token.is_empty() {
            return None;
        }
        Some(Session {
            token: self.token.clone(),
            id: id?,
            name: self.name.clone(),
        })
    }
}

/// 保存済みセッション（トークン + ID）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_full() {
        let json = r#"{
            "id": 7,
            "name": "Terracotta Vase",
            "description": "Hand thrown",
            "price": 1299.5,
            "stock": 3,
            "artisanCategory": "Pottery",
            "ethicalScore": 8,
            "materials": "clay",
            "imageData": ["https://img/1.jpg", "https://img/2.jpg"],
            "averageRating": 4.5,
            "reviewCount": 12,
            "salesCount": 40,
            "createdAt": "2024-02-01T09:30:00"
        }"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.id, 7);
        assert_eq!(product.category_label(), "Pottery");
        assert_eq!(product.ethical_score, 8.0);
        assert_eq!(product.primary_image(), Some("https://img/1.jpg"));
        assert_eq!(product.created_at.as_deref(), Some("2024-02-01T09:30:00"));
    }

    #[test]
    fn test_product_tolerates_nulls_and_missing() {
        let json = r#"{"id": 1, "name": "Mat", "description": null, "imageData": null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert!(product.image_data.is_empty());
        assert_eq!(product.primary_image(), None);
        assert_eq!(product.created_at, None);
    }

    #[test]
    fn test_product_category_fallback() {
        let product = Product {
            category: "Textiles".to_string(),
            ..Default::default()
        };
        assert_eq!(product.category_label(), "Textiles");
    }

    #[test]
    fn test_order_deserialize_with_array_date() {
        let json = r#"{
            "id": 3,
            "city": "Jaipur",
            "state": "RJ",
            "totalAmount": 2500,
            "razorpayPaymentId": "pay_ABCDEF123456",
            "orderDate": [2024, 3, 1, 10, 0, 0],
            "items": [{"id": 1, "quantity": 2, "price": 1250, "product": {"id": 9, "name": "Rug"}}]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_date.as_deref(), Some("2024-03-01T10:00:00"));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].line_total(), 2500.0);
        assert_eq!(order.city_line(), "Jaipur, RJ");
    }

    #[test]
    fn test_order_list_non_array_is_empty() {
        let orders = Order::list_from_json(serde_json::json!({"message": "nope"})).unwrap();
        assert!(orders.is_empty());

        let orders = Order::list_from_json(serde_json::json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_payment_badge() {
        let order = Order {
            razorpay_payment_id: Some("pay_ABCDEF123456".to_string()),
            ..Default::default()
        };
        assert_eq!(order.payment_badge().as_deref(), Some("123456"));

        let short = Order {
            razorpay_payment_id: Some("p1".to_string()),
            ..Default::default()
        };
        assert_eq!(short.payment_badge().as_deref(), Some("p1"));
        assert_eq!(Order::default().payment_badge(), None);
    }

    #[test]
    fn test_review_request_rating_bounds() {
        assert!(ReviewRequest::new(1, 0, "").is_err());
        assert!(ReviewRequest::new(1, 6, "").is_err());

        let review = ReviewRequest::new(1, 5, "Lovely").unwrap();
        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"productId\":1"));
        assert!(json.contains("\"rating\":5"));
    }

    #[test]
    fn test_auth_response_sessions() {
        let json = r#"{"token": "abc", "userId": 42, "name": "Asha"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();

        let session = response.user_session().unwrap();
        assert_eq!(session.id, 42);
        assert_eq!(session.bearer(), "Bearer abc");
        assert!(response.artisan_session().is_none());
    }

    #[test]
    fn test_auth_response_without_token() {
        let response = AuthResponse {
            user_id: Some(1),
            ..Default::default()
        };
        assert!(response.user_session().is_none());
    }
}

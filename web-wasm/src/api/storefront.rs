//! ストアフロントのエンドポイント
//!
//! どの呼び出しも1回きり。失敗は文字列で返し、画面のアラートに出す。

use super::fetch::{get_json, read_json, send, js_error, routes, Body};
use leptos::logging::log;
use serde::Serialize;
use vividhands_common::{
    AuthResponse, DashboardStats, LoginRequest, Order, Product, ProductForm, RegisterRequest,
    Review, ReviewRequest, Session,
};
use web_sys::FormData;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("JSON serialization failed: {}", e))
}

async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
    session: Option<&Session>,
) -> Result<T, String> {
    let resp = send("POST", url, session, Body::Json(to_json(body)?)).await?;
    read_json(resp).await
}

// ---- 商品 ----

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&routes().products(), None).await
}

pub async fn fetch_product(product_id: i64) -> Result<Product, String> {
    get_json(&routes().product(product_id), None).await
}

pub async fn fetch_reviews(product_id: i64) -> Result<Vec<Review>, String> {
    get_json(&routes().product_reviews(product_id), None).await
}

// ---- 注文 ----

/// 配列以外の応答は注文なしとして扱う
pub async fn fetch_user_orders(session: &Session) -> Result<Vec<Order>, String> {
    let value: serde_json::Value = get_json(&routes().user_orders(session.id), Some(session)).await?;
    Order::list_from_json(value).map_err(|e| e.to_string())
}

pub async fn submit_review(session: &Session, review: &ReviewRequest) -> Result<(), String> {
    send("POST", &routes().reviews(), Some(session), Body::Json(to_json(review)?)).await?;
    log!("review submitted for product {}", review.product_id);
    Ok(())
}

// ---- 認証 ----

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    post_json(&routes().login(), request, None).await
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    post_json(&routes().register(), request, None).await
}

pub async fn artisan_login(request: &LoginRequest) -> Result<AuthResponse, String> {
    post_json(&routes().artisan_login(), request, None).await
}

// ---- 出品者 ----

pub async fn fetch_dashboard_stats(session: &Session) -> Result<DashboardStats, String> {
    get_json(&routes().dashboard_stats(), Some(session)).await
}

pub async fn fetch_my_products(session: &Session) -> Result<Vec<Product>, String> {
    get_json(&routes().my_products(), Some(session)).await
}

/// multipartのテキスト項目で更新（画像は送らない）
pub async fn update_product(session: &Session, product_id: i64, form: &ProductForm) -> Result<Product, String> {
    let fields = form.fields().map_err(|e| e.to_string())?;
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in &fields {
        data.append_with_str(name, value).map_err(js_error)?;
    }

    let resp = send("PUT", &routes().update_product(product_id), Some(session), Body::Form(data)).await?;
    log!("product {} updated", product_id);
    read_json(resp).await
}

pub async fn delete_product(session: &Session, product_id: i64) -> Result<(), String> {
    send("DELETE", &routes().delete_product(product_id), Some(session), Body::Empty).await?;
    log!("product {} deleted", product_id);
    Ok(())
}

pub async fn fetch_artisan_orders(session: &Session) -> Result<Vec<Order>, String> {
    let value: serde_json::Value = get_json(&routes().artisan_orders(session.id), Some(session)).await?;
    Order::list_from_json(value).map_err(|e| e.to_string())
}

pub async fn fetch_artisan_order(session: &Session, order_id: i64) -> Result<Order, String> {
    get_json(&routes().artisan_order(session.id, order_id), Some(session)).await
}

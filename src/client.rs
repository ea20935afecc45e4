//! REST APIクライアント
//!
//! 画面ごとに1リクエスト。リトライやキャンセルはしない。

use crate::error::{Result, StorefrontError};
use chrono::NaiveDateTime;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use vividhands_common::routes::error_message_from_body;
use vividhands_common::{
    ApiRoutes, AuthResponse, DashboardStats, LoginRequest, Order, Product, ProductForm,
    RegisterRequest, Review, ReviewRequest, Session,
};

pub struct ApiClient {
    http: Client,
    routes: ApiRoutes,
}

impl ApiClient {
    pub fn new(routes: ApiRoutes, timeout_seconds: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(1)))
            .user_agent(concat!("vividhands/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, routes })
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    fn authorized(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(s) => builder.header(reqwest::header::AUTHORIZATION, s.bearer()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, session: Option<&Session>) -> Result<Response> {
        let response = Self::authorized(builder, session).send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(status.as_u16(), &body);
        warn!(status = status.as_u16(), %message, "api error");
        Err(StorefrontError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, session: Option<&Session>) -> Result<T> {
        debug!(%url, "GET");
        let response = self.send(self.http.get(&url), session).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B, T>(&self, url: String, body: &B, session: Option<&Session>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self.send(self.http.post(&url).json(body), session).await?;
        Ok(response.json::<T>().await?)
    }

    // ---- 商品 ----

    pub async fn products(&self) -> Result<Vec<Product>> {
        self.get_json(self.routes.products(), None).await
    }

    pub async fn product(&self, product_id: i64) -> Result<Product> {
        self.get_json(self.routes.product(product_id), None).await
    }

    pub async fn product_reviews(&self, product_id: i64) -> Result<Vec<Review>> {
        self.get_json(self.routes.product_reviews(product_id), None).await
    }

    // ---- 注文 ----

    /// 配列以外の応答は空として扱う
    pub async fn user_orders(&self, session: &Session) -> Result<Vec<Order>> {
        let value: serde_json::Value = self
            .get_json(self.routes.user_orders(session.id), Some(session))
            .await?;
        Ok(Order::list_from_json(value)?)
    }

    pub async fn order(&self, session: &Session, order_id: i64) -> Result<Order> {
        self.get_json(self.routes.order(order_id), Some(session)).await
    }

    pub async fn orders_between(
        &self,
        session: &Session,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Order>> {
        let value: serde_json::Value = self
            .get_json(self.routes.orders_between(start, end), Some(session))
            .await?;
        Ok(Order::list_from_json(value)?)
    }

    pub async fn submit_review(&self, session: &Session, review: &ReviewRequest) -> Result<()> {
        let url = self.routes.reviews();
        debug!(%url, product_id = review.product_id, "POST review");
        self.send(self.http.post(&url).json(review), Some(session)).await?;
        info!(product_id = review.product_id, rating = review.rating, "review submitted");
        Ok(())
    }

    // ---- 認証 ----

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.post_json(self.routes.login(), request, None).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.post_json(self.routes.register(), request, None).await
    }

    pub async fn artisan_login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.post_json(self.routes.artisan_login(), request, None).await
    }

    // ---- 出品者 ----

    pub async fn dashboard_stats(&self, session: &Session) -> Result<DashboardStats> {
        self.get_json(self.routes.dashboard_stats(), Some(session)).await
    }

    pub async fn my_products(&self, session: &Session) -> Result<Vec<Product>> {
        self.get_json(self.routes.my_products(), Some(session)).await
    }

    /// multipart/form-data で送る（画像は扱わない）
    pub async fn update_product(
        &self,
        session: &Session,
        product_id: i64,
        form: &ProductForm,
    ) -> Result<Product> {
        let multipart = form
            .fields()?
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |acc, (name, value)| acc.text(name, value));

        let url = self.routes.update_product(product_id);
        debug!(%url, "PUT");
        let response = self
            .send(self.http.put(&url).multipart(multipart), Some(session))
            .await?;
        info!(product_id, "product updated");
        Ok(response.json::<Product>().await?)
    }

    pub async fn delete_product(&self, session: &Session, product_id: i64) -> Result<()> {
        let url = self.routes.delete_product(product_id);
        debug!(%url, "DELETE");
        self.send(self.http.delete(&url), Some(session)).await?;
        info!(product_id, "product deleted");
        Ok(())
    }

    pub async fn artisan_orders(&self, session: &Session) -> Result<Vec<Order>> {
        let value: serde_json::Value = self
            .get_json(self.routes.artisan_orders(session.id), Some(session))
            .await?;
        Ok(Order::list_from_json(value)?)
    }

    pub async fn artisan_order(&self, session: &Session, order_id: i64) -> Result<Order> {
        self.get_json(self.routes.artisan_order(session.id, order_id), Some(session))
            .await
    }
}

/// エラー応答から表示用メッセージを取り出す
///
/// 本文から取れなければステータス名。
pub fn api_error_message(status: u16, body: &str) -> String {
    if let Some(message) = error_message_from_body(body) {
        return message;
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed")
        .to_string()
}

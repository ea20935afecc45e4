//! 対話式レビュー入力

use crate::error::{Result, StorefrontError};
use chrono::NaiveDateTime;
use dialoguer::{Input, Select};
use std::collections::HashSet;
use vividhands_common::{delivery_status, Order, ReviewDraft};

/// レビュー対象の候補
#[derive(Debug, Clone, PartialEq)]
pub struct Reviewable {
    pub product_id: i64,
    pub name: String,
    pub order_id: i64,
}

/// 配送済み注文の商品を抽出（商品IDで重複除去）
pub fn reviewable_products(orders: &[Order], now: NaiveDateTime) -> Vec<Reviewable> {
    let mut seen = HashSet::new();
    orders
        .iter()
        .filter(|o| delivery_status(o.order_date.as_deref(), now).can_review())
        .flat_map(|o| {
            o.items
                .iter()
                .filter_map(|item| item.product.as_ref())
                .map(move |p| Reviewable {
                    product_id: p.id,
                    name: p.name.clone(),
                    order_id: o.id,
                })
        })
        .filter(|r| seen.insert(r.product_id))
        .collect()
}

/// 指定IDが配送済み注文の商品であることを確認
pub fn require_reviewable(orders: &[Order], product_id: i64, now: NaiveDateTime) -> Result<Reviewable> {
    reviewable_products(orders, now)
        .into_iter()
        .find(|r| r.product_id == product_id)
        .ok_or_else(|| StorefrontError::NotFound(format!("delivered item {}", product_id)))
}

/// 候補から1件選ぶ
pub fn pick_product(candidates: &[Reviewable]) -> Result<Option<Reviewable>> {
    if candidates.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = candidates
        .iter()
        .map(|c| format!("{} (order {})", c.name, c.order_id))
        .collect();

    let selection = Select::new()
        .with_prompt("Which product would you like to review?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|idx| candidates[idx].clone()))
}

/// 星の数とコメントを入力
pub fn prompt_review(product_name: &str, rating: Option<u8>, comment: Option<String>) -> Result<ReviewDraft> {
    println!("Review {}", product_name);

    let mut draft = ReviewDraft::default();
    match rating {
        Some(r) => draft.set_rating(r),
        None => {
            let stars: Vec<String> = (1..=5)
                .map(|n| format!("{}{}", "★".repeat(n), "☆".repeat(5 - n)))
                .collect();
            let idx = Select::new()
                .with_prompt("Rating")
                .items(&stars)
                .default(4)
                .interact()?;
            draft.set_rating(idx as u8 + 1);
        }
    }

    draft.comment = match comment {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("Review")
            .allow_empty(true)
            .interact_text()?,
    };

    Ok(draft)
}

//! 配送予定日と進捗
//!
//! 注文日 + 5日を配送予定とし、残り日数から進捗(0〜100)を線形に求める。

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::timestamp::{format_date, parse_timestamp};

/// 注文から配送までの日数
pub const DELIVERY_DAYS: i64 = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// 配送状況
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryStatus {
    /// 配送予定日（注文日不明ならNone）
    pub estimated: Option<NaiveDate>,
    /// 残り日数（負にはならない）
    pub days_remaining: i64,
    /// 0.0〜100.0
    pub progress: f64,
    pub is_delivered: bool,
}

impl DeliveryStatus {
    fn unknown() -> Self {
        Self {
            estimated: None,
            days_remaining: 0,
            progress: 100.0,
            is_delivered: false,
        }
    }

    /// `Mar 6, 2024` / `N/A`
    pub fn date_label(&self) -> String {
        self.estimated
            .map(format_date)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// プログレスバーのラベル
    pub fn progress_label(&self) -> String {
        if self.is_delivered {
            "Delivered".to_string()
        } else {
            format!("{} days remaining", self.days_remaining)
        }
    }

    /// `Delivered on ...` / `Estimated delivery ...`
    pub fn caption(&self) -> String {
        let prefix = if self.is_delivered { "Delivered on" } else { "Estimated delivery" };
        format!("{} {}", prefix, self.date_label())
    }

    pub fn phase(&self) -> &'static str {
        if self.is_delivered {
            "Order Completed"
        } else {
            "In Transit"
        }
    }

    /// レビュー投稿は配送済みのみ
    pub fn can_review(&self) -> bool {
        self.is_delivered
    }
}

/// 注文日と現在時刻から配送状況を計算
pub fn delivery_status(order_date: Option<&str>, now: NaiveDateTime) -> DeliveryStatus {
    let Some(ordered) = order_date.and_then(parse_timestamp) else {
        return DeliveryStatus::unknown();
    };

    let Some(delivery) = ordered.checked_add_signed(Duration::days(DELIVERY_DAYS)) else {
        return DeliveryStatus::unknown();
    };
    let diff_ms = (delivery - now).num_milliseconds() as f64;
    let days_remaining = (diff_ms / MILLIS_PER_DAY).ceil() as i64;
    let progress = (100.0 - (days_remaining as f64 / DELIVERY_DAYS as f64) * 100.0).clamp(0.0, 100.0);

    DeliveryStatus {
        estimated: Some(delivery.date()),
        days_remaining: days_remaining.max(0),
        progress,
        is_delivered: days_remaining <= 0,
    }
}

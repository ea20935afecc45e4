//! テキスト表示
//!
//! Web版の各画面をターミナル向けに描画する。文字列を返すだけで出力はしない。

use chrono::NaiveDateTime;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::time::Duration;
use vividhands_common::currency::{format_currency, format_whole};
use vividhands_common::filter::{low_stock_label, ProductFilter};
use vividhands_common::timestamp::{format_date_time, parse_timestamp};
use vividhands_common::view::{messages, star_bar, truncate_description};
use vividhands_common::{
    delivery_status, Cart, DashboardStats, ListView, LoadState, Order, Product, Review,
};

const RULE: &str = "────────────────────────────────────────────────────────";

/// 通信中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// `[##########----------]  50%`
pub fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * 20.0).round() as usize;
    format!("[{}{}] {:>3.0}%", "#".repeat(filled), "-".repeat(20 - filled), progress)
}

/// エラーバナー
pub fn error_banner(title: &str, message: &str) -> String {
    format!("✖ {}\n  {}\n", title, message)
}

/// 適用中のフィルタ条件
pub fn filter_summary(filter: &ProductFilter) -> String {
    let mut parts = Vec::new();
    if !filter.search_query.is_empty() {
        parts.push(format!("search \"{}\"", filter.search_query));
    }
    if !filter.category.is_empty() {
        parts.push(format!("category {}", filter.category));
    }
    if filter.ethical_score > 0 {
        parts.push(format!("ethical {}+", filter.ethical_score));
    }
    parts.push(format!(
        "price {} - {}",
        format_whole(filter.price_range.0),
        format_whole(filter.price_range.1)
    ));
    parts.push(format!("sort {}", filter.sort_by.label()));
    parts.join(" · ")
}

/// 商品一覧
pub fn product_list(products: &[Product], filter: &ProductFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Discover Ethical Products ({})", filter_summary(filter));
    let _ = writeln!(out, "{}", RULE);

    if products.is_empty() {
        let _ = writeln!(out, "{}", messages::PRODUCTS_EMPTY);
        if filter.is_active() {
            let _ = writeln!(out, "Clear Filters: run `vividhands products` without options");
        }
        return out;
    }

    for product in products {
        let _ = write!(
            out,
            "#{:<5} {:<28} {:<12} {:>14}  {:>4}/10",
            product.id,
            product.name,
            product.category_label(),
            format_currency(product.price),
            product.ethical_score,
        );
        if let Some(badge) = low_stock_label(product.stock) {
            let _ = write!(out, "  [{}]", badge);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{} products", products.len());
    out
}

/// 商品詳細 + レビュー
pub fn product_detail(product: &Product, reviews: &[Review]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  (#{})", product.name, product.id);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Category:  {}", product.category_label());
    let _ = writeln!(out, "Price:     {}", format_currency(product.price));
    let _ = writeln!(out, "Ethical:   {} /10", product.ethical_score);
    let _ = writeln!(out, "Materials: {}", product.materials);
    let stock = low_stock_label(product.stock).unwrap_or_else(|| format!("{} in stock", product.stock));
    let _ = writeln!(out, "Stock:     {}", stock);
    let _ = writeln!(
        out,
        "Rating:    {} ({} reviews)",
        star_bar(product.average_rating),
        product.review_count
    );
    if !product.description.is_empty() {
        let _ = writeln!(out, "\n{}", product.description);
    }
    for url in &product.image_data {
        let _ = writeln!(out, "  🖼 {}", url);
    }

    let _ = writeln!(out, "\nReviews");
    if reviews.is_empty() {
        let _ = writeln!(out, "  {}", messages::REVIEWS_EMPTY);
    }
    for review in reviews {
        let who = if review.user_name.is_empty() { "Anonymous" } else { &review.user_name };
        let _ = writeln!(out, "  {} {}: {}", star_bar(f64::from(review.rating)), who, review.comment);
    }
    out
}

/// 注文履歴（取得状態ごとの出し分け）
pub fn orders_view(state: &LoadState<Vec<Order>>, now: NaiveDateTime) -> String {
    match state.list_view() {
        ListView::Loading => format!("{}\n", messages::LOADING_ORDERS),
        ListView::Error(message) => error_banner(messages::ORDERS_ERROR_TITLE, message),
        ListView::Empty => format!(
            "{}\n{}\n{}: `vividhands products`\n",
            messages::ORDERS_EMPTY_TITLE,
            messages::ORDERS_EMPTY_BODY,
            messages::CONTINUE_SHOPPING
        ),
        ListView::Items(orders) => {
            let mut out = String::from("Order History\n");
            for order in orders {
                out.push_str(&order_card(order, now));
            }
            out
        }
    }
}

/// 注文1件分
pub fn order_card(order: &Order, now: NaiveDateTime) -> String {
    let delivery = delivery_status(order.order_date.as_deref(), now);
    let ordered = order.order_date.as_deref().and_then(parse_timestamp);

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "Order {} #{}  {}",
        order.id,
        order.payment_badge().unwrap_or_default(),
        ordered.map(format_date_time).unwrap_or_else(|| "N/A".to_string())
    );
    let _ = writeln!(out, "Shipping Address");
    let _ = writeln!(out, "  {}", order.delivery_address);
    let _ = writeln!(out, "  {}", order.city_line());
    let _ = writeln!(out, "  {}", order.zip_code);
    let _ = writeln!(out, "  Phone: {}", order.phone_number);
    let _ = writeln!(out, "Order Summary");
    let _ = writeln!(out, "  Items:    {}", format_currency(order.total_amount));
    let _ = writeln!(out, "  Shipping: FREE");
    let _ = writeln!(out, "  Total:    {}", format_currency(order.total_amount));
    let _ = writeln!(out, "{} {}", progress_bar(delivery.progress), delivery.progress_label());
    let _ = writeln!(out, "🚚 {}", delivery.caption());

    for item in &order.items {
        let (name, description, rating, reviews) = match &item.product {
            Some(p) => (p.name.as_str(), p.description.as_str(), p.average_rating, p.review_count),
            None => ("(unavailable)", "", 0.0, 0),
        };
        let _ = writeln!(
            out,
            "  • {}  {} × {}",
            name,
            item.quantity,
            format_currency(item.price)
        );
        let _ = writeln!(out, "    {}", truncate_description(description, 100));
        let _ = writeln!(out, "    {} ({} reviews)", star_bar(rating), reviews);
        if delivery.can_review() {
            if let Some(p) = &item.product {
                let _ = writeln!(out, "    Write Review: `vividhands review {}`", p.id);
            }
        }
    }

    let _ = writeln!(
        out,
        "💳 Paid with Razorpay: {}   ✔ {}",
        order.razorpay_payment_id.as_deref().unwrap_or("N/A"),
        delivery.phase()
    );
    out
}

/// カート
pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return format!("{}\n", messages::CART_EMPTY);
    }
    let mut out = String::new();
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "#{:<5} {:<28} {} × {} = {}",
            line.product.id,
            line.product.name,
            line.quantity,
            format_currency(line.product.price),
            format_currency(line.line_total())
        );
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{} items  Subtotal {}", cart.item_count(), format_currency(cart.subtotal()));
    out
}

/// ダッシュボード集計
pub fn dashboard_stats(stats: &DashboardStats) -> String {
    let mut out = String::from("Artisan Dashboard\n");
    let _ = writeln!(out, "  Products:      {}", stats.total_products);
    let _ = writeln!(out, "  Orders:        {}", stats.total_orders);
    let _ = writeln!(out, "  Units sold:    {}", stats.total_sales);
    let _ = writeln!(out, "  Revenue:       {}", format_currency(stats.total_revenue));
    let _ = writeln!(out, "  Low stock:     {}", stats.low_stock_count);
    out
}

/// 出品者の商品一覧
pub fn artisan_products(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", messages::ARTISAN_PRODUCTS_EMPTY);
    }
    let mut out = String::new();
    for product in products {
        let _ = writeln!(
            out,
            "#{:<5} {:<28} {:>14}  stock {:<4} sold {:<4} {}",
            product.id,
            product.name,
            format_currency(product.price),
            product.stock,
            product.sales_count,
            star_bar(product.average_rating)
        );
    }
    out
}

/// 出品者向け注文一覧（1行1注文）
pub fn artisan_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return format!("{}\n", messages::ARTISAN_ORDERS_EMPTY);
    }
    let mut out = String::new();
    for order in orders {
        let ordered = order
            .order_date
            .as_deref()
            .and_then(parse_timestamp)
            .map(format_date_time)
            .unwrap_or_else(|| "N/A".to_string());
        let units: u32 = order.items.iter().map(|i| i.quantity).sum();
        let _ = writeln!(
            out,
            "Order {:<6} {:<26} {:<20} {:>3} units  {}",
            order.id,
            ordered,
            order.city_line(),
            units,
            format_currency(order.total_amount)
        );
    }
    out
}

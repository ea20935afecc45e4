//! 注文履歴
//!
//! 取得中/失敗/空/一覧の出し分けは `LoadState::list_view` に従う。
//! 配送済みの商品だけレビューモーダルを開ける。

use crate::api::storefront::{fetch_user_orders, submit_review};
use crate::app::{use_app, Page};
use crate::clock;
use crate::components::alert::{ErrorBanner, Spinner};
use crate::components::progress_bar::DeliveryProgress;
use crate::components::rating::{StarPicker, Stars};
use chrono::NaiveDateTime;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vividhands_common::timestamp::{format_date_time, parse_timestamp};
use vividhands_common::view::{messages, truncate_description, PLACEHOLDER_IMAGE};
use vividhands_common::{
    delivery_status, format_currency, ListView, LoadState, Order, OrderItem, ReviewDraft,
};

/// レビュー対象
#[derive(Debug, Clone, PartialEq)]
struct ReviewTarget {
    product_id: i64,
    name: String,
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let app = use_app();
    let (orders, set_orders) = signal(LoadState::<Vec<Order>>::Loading);
    let review_target = RwSignal::new(None::<ReviewTarget>);
    let now = clock::now();

    match app.user.get_untracked() {
        Some(session) => spawn_local(async move {
            let result = fetch_user_orders(&session).await;
            if let Err(e) = &result {
                warn!("{}: {}", messages::FETCH_ORDERS_FAILED, e);
            }
            set_orders.set(LoadState::from_result(result));
        }),
        None => {
            if let Some(target) = Page::Orders.sign_in_redirect(false) {
                app.navigate(target);
            }
        }
    }

    view! {
        <section class="orders">
            <h2>"Order History"</h2>
            {move || {
                orders.with(|state| match state.list_view() {
                    ListView::Loading => view! { <Spinner message=messages::LOADING_ORDERS /> }.into_any(),
                    ListView::Error(message) => {
                        view! { <ErrorBanner title=messages::ORDERS_ERROR_TITLE message=message.to_string() /> }
                            .into_any()
                    }
                    ListView::Empty => view! {
                        <div class="empty-state">
                            <h3>{messages::ORDERS_EMPTY_TITLE}</h3>
                            <p>{messages::ORDERS_EMPTY_BODY}</p>
                            <button class="btn btn-primary" on:click=move |_| app.navigate(Page::Home)>
                                {messages::CONTINUE_SHOPPING}
                            </button>
                        </div>
                    }
                    .into_any(),
                    ListView::Items(items) => items
                        .iter()
                        .cloned()
                        .map(|order| view! { <OrderCard order=order now=now review_target=review_target /> })
                        .collect_view()
                        .into_any(),
                })
            }}

            {move || review_target.get().map(|target| view! { <ReviewModal target=target review_target=review_target /> })}
        </section>
    }
}

#[component]
fn OrderCard(order: Order, now: NaiveDateTime, review_target: RwSignal<Option<ReviewTarget>>) -> impl IntoView {
    let delivery = delivery_status(order.order_date.as_deref(), now);
    let can_review = delivery.can_review();
    let phase = delivery.phase();
    let ordered = order
        .order_date
        .as_deref()
        .and_then(parse_timestamp)
        .map(format_date_time)
        .unwrap_or_else(|| "N/A".to_string());
    let badge = order.payment_badge().map(|b| format!("#{}", b)).unwrap_or_default();
    let payment_id = order.razorpay_payment_id.clone().unwrap_or_else(|| "N/A".to_string());
    let total = format_currency(order.total_amount);

    view! {
        <div class="order-card">
            <div class="order-header">
                <span class="order-id">{format!("Order {}", order.id)}</span>
                <span class="badge badge-payment">{badge}</span>
                <span class="text-muted">{ordered.clone()}</span>
            </div>

            <div class="order-grid">
                <div class="shipping">
                    <h4>"Shipping Address"</h4>
                    <p>{order.delivery_address.clone()}</p>
                    <p>{order.city_line()}</p>
                    <p>{order.zip_code.clone()}</p>
                    <p>{format!("Phone: {}", order.phone_number)}</p>
                </div>
                <div class="summary">
                    <h4>"Order Summary"</h4>
                    <p>"Items: " {total.clone()}</p>
                    <p>"Shipping: FREE"</p>
                    <p class="order-total">"Total: " {total}</p>
                </div>
            </div>

            <DeliveryProgress status=delivery />

            <div class="order-items">
                {order
                    .items
                    .into_iter()
                    .map(|item| view! { <OrderItemRow item=item can_review=can_review review_target=review_target /> })
                    .collect_view()}
            </div>

            <div class="order-footer">
                <span>{format!("💳 Paid with Razorpay: {}", payment_id)}</span>
                <span class="order-phase">{format!("✔ {}", phase)}</span>
                <span class="text-muted">{format!("Ordered {}", ordered)}</span>
            </div>
        </div>
    }
}

#[component]
fn OrderItemRow(item: OrderItem, can_review: bool, review_target: RwSignal<Option<ReviewTarget>>) -> impl IntoView {
    let line = format!("{} × {}", item.quantity, format_currency(item.price));
    let Some(product) = item.product else {
        return view! {
            <div class="order-item">
                <p class="text-muted">"(unavailable)"</p>
                <span>{line}</span>
            </div>
        }
        .into_any();
    };

    let image = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    let target = ReviewTarget {
        product_id: product.id,
        name: product.name.clone(),
    };

    view! {
        <div class="order-item">
            <img class="thumbnail" src=image alt=product.name.clone() />
            <div class="order-item-body">
                <h5>{product.name.clone()}</h5>
                <p class="text-muted">{truncate_description(&product.description, 100)}</p>
                <div class="product-rating">
                    <Stars rating=product.average_rating />
                    <span class="text-muted">{format!("({} reviews)", product.review_count)}</span>
                </div>
                <span>{line}</span>
            </div>
            {can_review
                .then(|| {
                    view! {
                        <button
                            class="btn btn-secondary btn-small"
                            on:click=move |_| review_target.set(Some(target.clone()))
                        >
                            "Write Review"
                        </button>
                    }
                })}
        </div>
    }
    .into_any()
}

/// レビュー投稿モーダル。成功したら閉じて入力を戻す
#[component]
fn ReviewModal(target: ReviewTarget, review_target: RwSignal<Option<ReviewTarget>>) -> impl IntoView {
    let app = use_app();
    let (rating, set_rating) = signal(0u8);
    let (comment, set_comment) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let product_id = target.product_id;

    let close = move || {
        set_rating.set(0);
        set_comment.set(String::new());
        set_error.set(None);
        review_target.set(None);
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let mut draft = ReviewDraft::default();
        draft.set_rating(rating.get_untracked());
        draft.comment = comment.get_untracked();
        let request = match draft.to_request(product_id) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(session) = app.user.get_untracked() else {
            set_error.set(Some("Please sign in to write a review.".to_string()));
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            let result = submit_review(&session, &request).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    log!("review posted for product {}", product_id);
                    close();
                }
                Err(e) => {
                    warn!("{}: {}", messages::REVIEW_FAILED, e);
                    set_error.set(Some(format!("{}: {}", messages::REVIEW_FAILED, e)));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h3>{format!("Review {}", target.name)}</h3>
                    <button class="btn-close" aria-label="Close" on:click=move |_| close()>"×"</button>
                </div>
                <div class="modal-body">
                    <StarPicker rating=rating set_rating=set_rating />
                    <textarea
                        rows="4"
                        placeholder="Share your experience..."
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|message| view! { <p class="text-danger">{message}</p> })}
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get() || rating.get() == 0
                        on:click=on_submit
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

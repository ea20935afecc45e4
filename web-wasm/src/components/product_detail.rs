//! 商品詳細（画像・レビュー・カート追加）

use crate::api::storefront::{fetch_product, fetch_reviews};
use crate::app::{use_app, Page};
use crate::components::alert::{ErrorBanner, Spinner};
use crate::components::rating::Stars;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vividhands_common::filter::low_stock_label;
use vividhands_common::timestamp::{format_date, parse_timestamp};
use vividhands_common::view::{messages, PLACEHOLDER_IMAGE};
use vividhands_common::{format_currency, LoadState, Product, Review};

#[component]
pub fn ProductDetail(product_id: i64) -> impl IntoView {
    let (product, set_product) = signal(LoadState::<Product>::Loading);
    let (reviews, set_reviews) = signal(Vec::<Review>::new());

    spawn_local(async move {
        set_product.set(LoadState::from_result(fetch_product(product_id).await));
        match fetch_reviews(product_id).await {
            Ok(list) => set_reviews.set(list),
            Err(e) => warn!("failed to fetch reviews for {}: {}", product_id, e),
        }
    });

    view! {
        <section class="product-detail">
            {move || match product.get() {
                LoadState::Loading => view! { <Spinner message="Loading product..." /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorBanner title="Error Loading Product" message=message /> }.into_any()
                }
                LoadState::Loaded(p) => view! { <ProductInfo product=p /> }.into_any(),
            }}

            <div class="reviews">
                <h3>"Reviews"</h3>
                <Show
                    when=move || !reviews.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-muted">{messages::REVIEWS_EMPTY}</p> }
                >
                    <For
                        each=move || reviews.get()
                        key=|review| review.id
                        children=|review| {
                            let who = if review.user_name.is_empty() {
                                "Anonymous".to_string()
                            } else {
                                review.user_name.clone()
                            };
                            let date = review
                                .created_at
                                .as_deref()
                                .and_then(parse_timestamp)
                                .map(|dt| format_date(dt.date()))
                                .unwrap_or_default();
                            view! {
                                <div class="review">
                                    <Stars rating=f64::from(review.rating) />
                                    <strong>{who}</strong>
                                    <span class="text-muted">{date}</span>
                                    <p>{review.comment}</p>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProductInfo(product: Product) -> impl IntoView {
    let app = use_app();
    let (quantity, set_quantity) = signal(1u32);
    let (notice, set_notice) = signal(None::<String>);

    let images = if product.image_data.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.image_data.clone()
    };
    let (selected, set_selected) = signal(images[0].clone());
    let stock_label = low_stock_label(product.stock).unwrap_or_else(|| format!("{} in stock", product.stock));
    let max_quantity = product.stock.max(1).to_string();
    let sold_out = product.stock <= 0;

    let add_to_cart = {
        let product = product.clone();
        move |_: leptos::ev::MouseEvent| {
            let mut result = Ok(0);
            app.update_cart(|cart| result = cart.add(&product, quantity.get_untracked()));
            match result {
                Ok(total) => set_notice.set(Some(format!("Added to cart ({} in cart)", total))),
                Err(e) => set_notice.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <div class="product-detail-grid">
            <div class="gallery">
                <img class="main-image" src=move || selected.get() alt=product.name.clone() />
                <div class="thumbnails">
                    {images
                        .into_iter()
                        .map(|url| {
                            let src = url.clone();
                            view! {
                                <img
                                    class="thumbnail"
                                    class:selected=move || selected.get() == url
                                    src=src.clone()
                                    alt=""
                                    on:click=move |_| set_selected.set(src.clone())
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="details">
                <span class="badge badge-category">{product.category_label().to_string()}</span>
                <h2>{product.name.clone()}</h2>
                <div class="product-rating">
                    <Stars rating=product.average_rating />
                    <span class="text-muted">{format!("({} reviews)", product.review_count)}</span>
                </div>
                <p class="product-price">{format_currency(product.price)}</p>
                <p>{product.description.clone()}</p>
                <dl>
                    <dt>"Materials"</dt>
                    <dd>{product.materials.clone()}</dd>
                    <dt>"Ethical Score"</dt>
                    <dd>{format!("{} /10", product.ethical_score)}</dd>
                    <dt>"Availability"</dt>
                    <dd>{stock_label}</dd>
                </dl>

                <div class="add-to-cart">
                    <input
                        type="number"
                        min="1"
                        max=max_quantity
                        aria-label="Quantity"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| {
                            let value: u32 = event_target_value(&ev).parse().unwrap_or(1);
                            set_quantity.set(value.max(1));
                        }
                    />
                    <button class="btn btn-primary" disabled=sold_out on:click=add_to_cart>
                        "Add to Cart"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| app.navigate(Page::Cart)>
                        "View Cart"
                    </button>
                </div>
                {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
            </div>
        </div>
    }
}

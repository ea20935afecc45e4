//! 商品カード

use crate::app::{use_app, Page};
use crate::components::rating::Stars;
use leptos::prelude::*;
use vividhands_common::filter::low_stock_label;
use vividhands_common::view::{truncate_description, PLACEHOLDER_IMAGE};
use vividhands_common::{format_currency, Product};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let app = use_app();
    let id = product.id;
    let image = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();
    let thumbnails: Vec<String> = product.image_data.iter().skip(1).take(3).cloned().collect();
    let low_stock = low_stock_label(product.stock);
    let category = product.category_label().to_string();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=image alt=product.name.clone() />
                {low_stock.map(|label| view! { <span class="badge badge-warning">{label}</span> })}
            </div>
            {(!thumbnails.is_empty())
                .then(|| {
                    view! {
                        <div class="thumbnails">
                            {thumbnails
                                .into_iter()
                                .map(|url| view! { <img class="thumbnail" src=url alt="" /> })
                                .collect_view()}
                        </div>
                    }
                })}
            <div class="product-body">
                <div class="product-badges">
                    <span class="badge badge-category">{category}</span>
                    <span class="badge badge-ethical">{format!("{} /10", product.ethical_score)}</span>
                </div>
                <h3 class="product-name">{product.name.clone()}</h3>
                <p class="product-description">{truncate_description(&product.description, 100)}</p>
                <div class="product-rating">
                    <Stars rating=product.average_rating />
                    <span class="text-muted">{format!("({})", product.review_count)}</span>
                </div>
                <div class="product-footer">
                    <span class="product-price">{format_currency(product.price)}</span>
                    <button class="btn btn-primary btn-small" on:click=move |_| app.navigate(Page::Product(id))>
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

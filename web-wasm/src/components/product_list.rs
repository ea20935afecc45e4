//! 商品一覧（検索・絞り込み・並び替え）

use crate::api::storefront::fetch_products;
use crate::components::alert::{ErrorBanner, Spinner};
use crate::components::product_card::ProductCard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vividhands_common::currency::format_whole;
use vividhands_common::filter::{categories, MAX_ETHICAL_SCORE};
use vividhands_common::view::messages;
use vividhands_common::{LoadState, Product, ProductFilter, SortKey};

#[component]
pub fn ProductList() -> impl IntoView {
    let (products, set_products) = signal(LoadState::<Vec<Product>>::Loading);
    let filter = RwSignal::new(ProductFilter::default());

    spawn_local(async move {
        set_products.set(LoadState::from_result(fetch_products().await));
    });

    let category_options = move || products.with(|s| s.loaded().map(|p| categories(p)).unwrap_or_default());
    let visible = move || {
        products.with(|s| {
            s.loaded()
                .map(|p| filter.with(|f| f.apply(p)))
                .unwrap_or_default()
        })
    };

    view! {
        <section class="product-list">
            <FilterPanel filter=filter categories=Signal::derive(category_options) />

            {move || match products.get() {
                LoadState::Loading => view! { <Spinner message="Loading products..." /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorBanner title=messages::FETCH_PRODUCTS_FAILED message=message /> }.into_any()
                }
                LoadState::Loaded(_) => {
                    let items = visible();
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>{messages::PRODUCTS_EMPTY}</p>
                                <button class="btn btn-secondary" on:click=move |_| filter.update(ProductFilter::clear)>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="product-grid">
                                <For
                                    each=move || visible()
                                    key=|product| product.id
                                    children=|product| view! { <ProductCard product=product /> }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}

/// 絞り込みパネル
#[component]
fn FilterPanel(filter: RwSignal<ProductFilter>, categories: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="search">"Search"</label>
                <input
                    type="search"
                    id="search"
                    placeholder="Search products, materials..."
                    prop:value=move || filter.with(|f| f.search_query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search_query = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="category">"Category"</label>
                <select
                    id="category"
                    prop:value=move || filter.with(|f| f.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.category = value);
                    }
                >
                    <option value="">"All Categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.clone()
                        children=|c| view! { <option value=c.clone()>{c.clone()}</option> }
                    />
                </select>
            </div>

            <div class="form-group">
                <label for="ethical">
                    "Ethical Score "
                    <span class="badge badge-ethical">{move || format!("{}+", filter.with(|f| f.ethical_score))}</span>
                </label>
                <input
                    type="range"
                    id="ethical"
                    min="0"
                    max=MAX_ETHICAL_SCORE.to_string()
                    prop:value=move || filter.with(|f| f.ethical_score.to_string())
                    on:input=move |ev| {
                        let score: u8 = event_target_value(&ev).parse().unwrap_or(0);
                        filter.update(|f| f.set_ethical_score(score));
                    }
                />
            </div>

            <div class="form-group">
                <label>"Price"</label>
                <div class="price-range">
                    <input
                        type="number"
                        min="0"
                        aria-label="Minimum price"
                        prop:value=move || filter.with(|f| f.price_range.0.to_string())
                        on:change=move |ev| {
                            if let Ok(min) = event_target_value(&ev).parse::<f64>() {
                                filter.update(|f| f.set_min_price(min));
                            }
                        }
                    />
                    <span>"–"</span>
                    <input
                        type="number"
                        min="0"
                        aria-label="Maximum price"
                        prop:value=move || filter.with(|f| f.price_range.1.to_string())
                        on:change=move |ev| {
                            if let Ok(max) = event_target_value(&ev).parse::<f64>() {
                                filter.update(|f| f.set_max_price(max));
                            }
                        }
                    />
                </div>
                <p class="text-muted">
                    {move || filter.with(|f| format!("{} - {}", format_whole(f.price_range.0), format_whole(f.price_range.1)))}
                </p>
            </div>

            <div class="form-group">
                <label for="sort">"Sort By"</label>
                <select
                    id="sort"
                    prop:value=move || filter.with(|f| f.sort_by.as_str().to_string())
                    on:change=move |ev| {
                        let sort = event_target_value(&ev).parse().unwrap_or_default();
                        filter.update(|f| f.sort_by = sort);
                    }
                >
                    {SortKey::ALL
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <button
                class="btn btn-tertiary btn-small"
                disabled=move || !filter.with(ProductFilter::is_active)
                on:click=move |_| filter.update(ProductFilter::clear)
            >
                "Clear Filters"
            </button>
        </div>
    }
}

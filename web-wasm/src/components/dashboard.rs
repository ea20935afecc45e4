//! 出品者ダッシュボード
//!
//! 集計・自分の商品（編集/削除）・自分の商品を含む注文。すべて出品者トークンで呼ぶ。

use crate::api::storefront;
use crate::app::{use_app, Page};
use crate::clock;
use crate::components::alert::{ErrorBanner, Spinner};
use crate::components::progress_bar::DeliveryProgress;
use crate::components::rating::Stars;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vividhands_common::timestamp::{format_date_time, parse_timestamp};
use vividhands_common::view::messages;
use vividhands_common::{
    delivery_status, format_currency, DashboardStats, LoadState, Order, Product, ProductForm, Session,
};

#[component]
pub fn ArtisanDashboard() -> impl IntoView {
    let app = use_app();

    view! {
        <section class="dashboard">
            <h2>"Artisan Dashboard"</h2>
            {move || match app.artisan.get() {
                Some(session) => view! { <DashboardBody session=session /> }.into_any(),
                None => view! {
                    <div class="empty-state">
                        <p>"Please log in as a seller to view your dashboard."</p>
                        <button class="btn btn-primary" on:click=move |_| app.navigate(Page::ArtisanLogin)>
                            "Seller Login"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn DashboardBody(session: Session) -> impl IntoView {
    let (stats, set_stats) = signal(LoadState::<DashboardStats>::Loading);
    let (products, set_products) = signal(LoadState::<Vec<Product>>::Loading);
    let (orders, set_orders) = signal(LoadState::<Vec<Order>>::Loading);
    // 更新・削除のたびに商品と集計を取り直す
    let (revision, set_revision) = signal(0u32);
    let editing = RwSignal::new(None::<Product>);
    let (notice, set_notice) = signal(None::<String>);

    Effect::new({
        let session = session.clone();
        move |_| {
            revision.track();
            let session = session.clone();
            spawn_local(async move {
                set_stats.set(LoadState::from_result(storefront::fetch_dashboard_stats(&session).await));
                set_products.set(LoadState::from_result(storefront::fetch_my_products(&session).await));
            });
        }
    });

    {
        let session = session.clone();
        spawn_local(async move {
            set_orders.set(LoadState::from_result(storefront::fetch_artisan_orders(&session).await));
        });
    }

    let on_delete = {
        let session = session.clone();
        move |product: Product| {
            if !gloo::dialogs::confirm(&format!("Delete \"{}\"?", product.name)) {
                return;
            }
            let session = session.clone();
            spawn_local(async move {
                match storefront::delete_product(&session, product.id).await {
                    Ok(()) => {
                        set_notice.set(Some(format!("Deleted {}", product.name)));
                        set_revision.update(|r| *r += 1);
                    }
                    Err(e) => {
                        warn!("delete failed: {}", e);
                        set_notice.set(Some(e));
                    }
                }
            });
        }
    };

    let on_saved = move |product: Product| {
        editing.set(None);
        set_notice.set(Some(format!("Updated {}", product.name)));
        set_revision.update(|r| *r += 1);
    };

    view! {
        {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}

        {move || match stats.get() {
            LoadState::Loading => view! { <Spinner message="Loading stats..." /> }.into_any(),
            LoadState::Failed(message) => view! { <ErrorBanner title="Error Loading Stats" message=message /> }.into_any(),
            LoadState::Loaded(s) => view! { <StatCards stats=s /> }.into_any(),
        }}

        {move || editing.get().map(|product| {
            let session = session.clone();
            view! { <ProductEditor product=product session=session editing=editing on_saved=on_saved /> }
        })}

        <h3>"My Products"</h3>
        {move || match products.get() {
            LoadState::Loading => view! { <Spinner message="Loading products..." /> }.into_any(),
            LoadState::Failed(message) => {
                view! { <ErrorBanner title=messages::FETCH_PRODUCTS_FAILED message=message /> }.into_any()
            }
            LoadState::Loaded(list) if list.is_empty() => {
                view! { <p class="text-muted">{messages::ARTISAN_PRODUCTS_EMPTY}</p> }.into_any()
            }
            LoadState::Loaded(list) => {
                let on_delete = on_delete.clone();
                view! { <ProductTable products=list editing=editing on_delete=on_delete /> }.into_any()
            }
        }}

        <h3>"Orders"</h3>
        {move || match orders.get() {
            LoadState::Loading => view! { <Spinner message=messages::LOADING_ORDERS /> }.into_any(),
            LoadState::Failed(message) => {
                view! { <ErrorBanner title=messages::ORDERS_ERROR_TITLE message=message /> }.into_any()
            }
            LoadState::Loaded(list) if list.is_empty() => {
                view! { <p class="text-muted">{messages::ARTISAN_ORDERS_EMPTY}</p> }.into_any()
            }
            LoadState::Loaded(list) => view! { <OrdersTable orders=list /> }.into_any(),
        }}
    }
}

#[component]
fn StatCards(stats: DashboardStats) -> impl IntoView {
    let cards = [
        ("Total Products", stats.total_products.to_string()),
        ("Total Orders", stats.total_orders.to_string()),
        ("Units Sold", stats.total_sales.to_string()),
        ("Revenue", format_currency(stats.total_revenue)),
        ("Low Stock", stats.low_stock_count.to_string()),
    ];

    view! {
        <div class="stats-grid">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat-card">
                            <span>{label}</span>
                            <strong>{value}</strong>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductTable<FD>(products: Vec<Product>, editing: RwSignal<Option<Product>>, on_delete: FD) -> impl IntoView
where
    FD: Fn(Product) + 'static + Clone + Send + Sync,
{
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Product"</th>
                    <th>"Price"</th>
                    <th>"Stock"</th>
                    <th>"Sold"</th>
                    <th>"Rating"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {products
                    .into_iter()
                    .map(|product| {
                        let on_delete = on_delete.clone();
                        let for_edit = product.clone();
                        let for_delete = product.clone();
                        view! {
                            <tr>
                                <td>{product.name.clone()}</td>
                                <td>{format_currency(product.price)}</td>
                                <td>{product.stock}</td>
                                <td>{product.sales_count}</td>
                                <td><Stars rating=product.average_rating /></td>
                                <td>
                                    <button
                                        class="btn btn-secondary btn-small"
                                        on:click=move |_| editing.set(Some(for_edit.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-tertiary btn-small"
                                        on:click=move |_| on_delete(for_delete.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// 商品編集フォーム（テキスト項目のみ）
#[component]
fn ProductEditor<FS>(
    product: Product,
    session: Session,
    editing: RwSignal<Option<Product>>,
    on_saved: FS,
) -> impl IntoView
where
    FS: Fn(Product) + 'static + Copy + Send + Sync,
{
    let product_id = product.id;
    let form = RwSignal::new(ProductForm::from_product(&product));
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.fields() {
            set_error.set(Some(e.to_string()));
            return;
        }

        let session = session.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = storefront::update_product(&session, product_id, &current).await;
            set_saving.set(false);
            match result {
                Ok(updated) => {
                    log!("saved product {}", product_id);
                    on_saved(updated);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // (ラベル, 入力type, 値の取り出し, 値の書き込み)
    type Getter = fn(&ProductForm) -> String;
    type Setter = fn(&mut ProductForm, String);
    let fields: [(&str, &str, Getter, Setter); 7] = [
        ("Name", "text", |f| f.name.clone(), |f, v| f.name = v),
        ("Description", "text", |f| f.description.clone(), |f, v| f.description = v),
        ("Category", "text", |f| f.category.clone(), |f, v| f.category = v),
        ("Price", "number", |f| f.price.clone(), |f, v| f.price = v),
        ("Stock", "number", |f| f.stock.clone(), |f, v| f.stock = v),
        ("Materials", "text", |f| f.materials.clone(), |f, v| f.materials = v),
        ("Ethical Score", "number", |f| f.ethical_score.clone(), |f, v| f.ethical_score = v),
    ];

    view! {
        <form class="product-editor" on:submit=on_submit>
            <h3>{format!("Edit {}", product.name)}</h3>
            {move || error.get().map(|message| view! { <ErrorBanner title="Update Failed" message=message /> })}
            {fields
                .into_iter()
                .map(|(label, input_type, get, set)| {
                    view! {
                        <div class="form-group">
                            <label>{label}</label>
                            <input
                                type=input_type
                                prop:value=move || form.with(get)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| set(f, value));
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
                <button type="button" class="btn btn-secondary" on:click=move |_| editing.set(None)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn OrdersTable(orders: Vec<Order>) -> impl IntoView {
    let app = use_app();
    let (detail, set_detail) = signal(None::<Order>);
    let now = clock::now();

    let open_detail = move |order_id: i64| {
        let Some(session) = app.artisan.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match storefront::fetch_artisan_order(&session, order_id).await {
                Ok(order) => set_detail.set(Some(order)),
                Err(e) => warn!("failed to fetch order {}: {}", order_id, e),
            }
        });
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Date"</th>
                    <th>"City"</th>
                    <th>"Units"</th>
                    <th>"Total"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {orders
                    .into_iter()
                    .map(|order| {
                        let id = order.id;
                        let units: u32 = order.items.iter().map(|i| i.quantity).sum();
                        let date = order
                            .order_date
                            .as_deref()
                            .and_then(parse_timestamp)
                            .map(format_date_time)
                            .unwrap_or_else(|| "N/A".to_string());
                        view! {
                            <tr>
                                <td>{format!("#{}", id)}</td>
                                <td>{date}</td>
                                <td>{order.city_line()}</td>
                                <td>{units}</td>
                                <td>{format_currency(order.total_amount)}</td>
                                <td>
                                    <button class="btn btn-secondary btn-small" on:click=move |_| open_detail(id)>
                                        "Details"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>

        {move || detail.get().map(|order| {
            let status = delivery_status(order.order_date.as_deref(), now);
            view! {
                <div class="order-detail">
                    <div class="order-header">
                        <h4>{format!("Order #{}", order.id)}</h4>
                        <button class="btn-close" aria-label="Close" on:click=move |_| set_detail.set(None)>"×"</button>
                    </div>
                    <p>{format!("{}, {} {}", order.delivery_address, order.city_line(), order.zip_code)}</p>
                    <p>{format!("Phone: {}", order.phone_number)}</p>
                    <DeliveryProgress status=status />
                    <ul>
                        {order
                            .items
                            .iter()
                            .map(|item| {
                                let name = item.product.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| "(unavailable)".to_string());
                                view! {
                                    <li>{format!("{}  {} × {}", name, item.quantity, format_currency(item.price))}</li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="order-total">{format!("Total: {}", format_currency(order.total_amount))}</p>
                </div>
            }
        })}
    }
}

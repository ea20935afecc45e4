//! カート
//!
//! 決済は扱わないので合計の表示まで。

use crate::app::{use_app, Page};
use leptos::prelude::*;
use vividhands_common::view::{messages, PLACEHOLDER_IMAGE};
use vividhands_common::{format_currency, CartLine};

#[component]
pub fn CartPage() -> impl IntoView {
    let app = use_app();
    let lines = move || app.cart.with(|c| c.lines().to_vec());

    view! {
        <section class="cart">
            <h2>"Your Cart"</h2>
            <Show
                when=move || !app.cart.with(|c| c.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p>{messages::CART_EMPTY}</p>
                        <button class="btn btn-primary" on:click=move |_| app.navigate(Page::Home)>
                            {messages::CONTINUE_SHOPPING}
                        </button>
                    </div>
                }
            >
                <table class="cart-table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=lines
                            key=|line| (line.product.id, line.quantity)
                            children=|line| view! { <CartRow line=line /> }
                        />
                    </tbody>
                </table>

                <div class="cart-summary">
                    <p>{move || format!("{} items", app.cart.with(|c| c.item_count()))}</p>
                    <p class="cart-subtotal">
                        "Subtotal: " {move || format_currency(app.cart.with(|c| c.subtotal()))}
                    </p>
                    <p class="text-muted">"Shipping: FREE"</p>
                    <button class="btn btn-tertiary" on:click=move |_| app.update_cart(|c| c.clear())>
                        "Clear Cart"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let app = use_app();
    let id = line.product.id;
    let quantity = line.quantity;
    let image = line.product.primary_image().unwrap_or(PLACEHOLDER_IMAGE).to_string();

    view! {
        <tr>
            <td class="cart-product">
                <img class="thumbnail" src=image alt="" />
                <a
                    href=Page::Product(id).to_hash()
                    on:click=move |ev| {
                        ev.prevent_default();
                        app.navigate(Page::Product(id));
                    }
                >
                    {line.product.name.clone()}
                </a>
            </td>
            <td>{format_currency(line.product.price)}</td>
            <td class="cart-quantity">
                <button
                    class="btn btn-small"
                    aria-label="Decrease quantity"
                    on:click=move |_| app.update_cart(|c| c.set_quantity(id, quantity.saturating_sub(1)))
                >
                    "−"
                </button>
                <span>{quantity}</span>
                <button
                    class="btn btn-small"
                    aria-label="Increase quantity"
                    on:click=move |_| app.update_cart(|c| c.set_quantity(id, quantity + 1))
                >
                    "+"
                </button>
            </td>
            <td>{format_currency(line.line_total())}</td>
            <td>
                <button class="btn btn-tertiary btn-small" on:click=move |_| app.update_cart(|c| {
                    c.remove(id);
                })>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

//! ナビゲーションバー

use crate::app::{use_app, Page};
use crate::session::SessionSlot;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();
    // 狭い画面で開いているか。遷移したら閉じる
    let (expanded, set_expanded) = signal(false);

    let go = move |page: Page| {
        set_expanded.set(false);
        app.navigate(page);
    };
    let link = move |page: Page, label: &'static str| {
        view! {
            <li class="nav-item">
                <a
                    class="nav-link"
                    class:active=move || app.page.get() == page
                    href=page.to_hash()
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(page);
                    }
                >
                    {label}
                </a>
            </li>
        }
    };

    let cart_count = move || app.cart.with(|c| c.item_count());
    let signed_in = move || app.user.with(Option::is_some);
    let seller = move || app.artisan.with(Option::is_some);

    view! {
        <nav class="navbar">
            <a
                class="navbar-brand"
                href="#/"
                on:click=move |ev| {
                    ev.prevent_default();
                    go(Page::Home);
                }
            >
                "VividHands"
            </a>
            <button
                class="navbar-toggler"
                aria-label="Toggle navigation"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                "☰"
            </button>

            <div class="navbar-collapse" class:show=move || expanded.get()>
                <ul class="navbar-nav">
                    {link(Page::Home, "Home")}
                    {link(Page::About, "About")}
                    {link(Page::Home, "Products")}
                    <li class="nav-item">
                        <a
                            class="nav-link"
                            class:active=move || app.page.get() == Page::Cart
                            href="#/cart"
                            on:click=move |ev| {
                                ev.prevent_default();
                                go(Page::Cart);
                            }
                        >
                            "Cart "
                            <span class="badge">{cart_count}</span>
                        </a>
                    </li>
                    <Show when=signed_in>
                        {link(Page::Orders, "Orders")}
                    </Show>
                    <Show when=seller>
                        {link(Page::Dashboard, "Dashboard")}
                    </Show>
                </ul>

                <div class="navbar-actions">
                    <Show
                        when=signed_in
                        fallback=move || link(Page::Auth, "Sign In")
                    >
                        <button
                            class="btn btn-secondary btn-small"
                            on:click=move |_| {
                                app.sign_out(SessionSlot::User);
                                go(Page::Home);
                            }
                        >
                            "Sign Out"
                        </button>
                    </Show>
                    <Show
                        when=seller
                        fallback=move || link(Page::ArtisanLogin, "Seller Login")
                    >
                        <button
                            class="btn btn-tertiary btn-small"
                            on:click=move |_| {
                                app.sign_out(SessionSlot::Artisan);
                                go(Page::Home);
                            }
                        >
                            "Seller Sign Out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

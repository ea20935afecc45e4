//! トップページ

use crate::components::product_list::ProductList;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Discover Ethical Products"</h1>
            <p>"Handcrafted goods from artisans who care about people and the planet."</p>
        </section>
        <ProductList />
    }
}

//! アラートとスピナー

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-danger" role="alert">
            <strong>{title}</strong>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn Spinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" role="status"></div>
            <p>{message}</p>
        </div>
    }
}

//! 星評価

use leptos::prelude::*;
use vividhands_common::view::filled_stars;

/// 表示用（★☆）
#[component]
pub fn Stars(rating: f64) -> impl IntoView {
    let filled = filled_stars(rating);
    view! {
        <span class="stars" title=format!("{:.1}", rating)>
            {(0..5)
                .map(|i| {
                    let class = if i < filled { "star filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}

/// 入力用。クリックした星の数をセットする
#[component]
pub fn StarPicker(rating: ReadSignal<u8>, set_rating: WriteSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-picker">
            {(1..=5u8)
                .map(|n| {
                    view! {
                        <button
                            type="button"
                            class="star-button"
                            class:filled=move || { rating.get() >= n }
                            aria-label=format!("{} stars", n)
                            on:click=move |_| set_rating.set(n)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

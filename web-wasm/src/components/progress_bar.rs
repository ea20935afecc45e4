//! 配送進捗バー

use leptos::prelude::*;
use vividhands_common::DeliveryStatus;

#[component]
pub fn DeliveryProgress(status: DeliveryStatus) -> impl IntoView {
    let fill_class = if status.is_delivered { "progress-fill delivered" } else { "progress-fill" };

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div class=fill_class style=format!("width: {:.0}%", status.progress) />
            </div>
            <p class="progress-text">{status.progress_label()}</p>
            <p class="delivery-caption">"🚚 " {status.caption()}</p>
        </div>
    }
}

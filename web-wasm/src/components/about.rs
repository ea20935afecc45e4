//! About（静的ページ）

use crate::app::{use_app, Page};
use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("15K+", "Global Community"),
    ("850+", "Empowered Artisans"),
    ("95%", "Eco Materials"),
    ("12+", "Design Awards"),
];

const VALUES: [(&str, &str); 3] = [
    ("Artisanal Mastery", "Centuries-old techniques meet modern design sensibilities"),
    ("Ethical Commitment", "Fair trade certified partnerships and transparent practices"),
    ("Sustainable Future", "Carbon-negative initiatives and regenerative materials"),
];

const HERITAGE: [(&str, &str); 3] = [
    ("Ancient Techniques", "Preserving methods passed through generations"),
    ("Modern Adaptation", "Reinterpreting tradition for contemporary living"),
    ("Sustainable Innovation", "Pioneering eco-conscious material solutions"),
];

fn cards(items: &'static [(&'static str, &'static str)], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|(title, body)| {
            view! {
                <div class=class>
                    <h4>{*title}</h4>
                    <p>{*body}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn AboutUs() -> impl IntoView {
    let app = use_app();

    view! {
        <section class="about">
            <div class="hero">
                <span class="badge">"About VividHands"</span>
                <h1>"Where Tradition Meets Contemporary Craftsmanship"</h1>
                <p>"Discover the perfect blend of heritage and innovation. Join us in celebrating the art of craftsmanship."</p>
                <button class="btn btn-primary" on:click=move |_| app.navigate(Page::Home)>"Explore Products"</button>
            </div>

            <div class="mission">
                <h2>"Crafting Tomorrow's Heritage"</h2>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat-card">
                                    <strong>{*value}</strong>
                                    <span>{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="values-grid">{cards(&VALUES, "value-card")}</div>
            </div>

            <div class="heritage">
                <h2>"Generations of Craft"</h2>
                <div class="values-grid">{cards(&HERITAGE, "value-card")}</div>
            </div>

            <div class="vision">
                <h2>"Our Vision"</h2>
                <p>"Join the Artisan Revival"</p>
            </div>
        </section>
    }
}

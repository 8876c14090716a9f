//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🍲 Cafeteria Food Safety Analyzer"</h1>
            <p class="subtitle">"AI-powered compliance assessment for cafeteria operations"</p>
        </header>
    }
}

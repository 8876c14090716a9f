//! In-progress indicator

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner"></div>
            <p class="text-muted">"🔍 Analyzing image and preparing report..."</p>
        </div>
    }
}

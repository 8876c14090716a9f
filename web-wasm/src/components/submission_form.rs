//! Submission form component
//!
//! Credential, cafeteria name and assessment question. The API key
//! lives in a signal and the request headers only; it is never
//! persisted or logged.

use leptos::prelude::*;

#[component]
pub fn SubmissionForm(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    cafeteria_name: ReadSignal<String>,
    set_cafeteria_name: WriteSignal<String>,
    question: ReadSignal<String>,
    set_question: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-panel">
            <div class="form-grid">
                <div class="form-group">
                    <label for="api-key">"OpenAI API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="sk-..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            set_api_key.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="cafeteria-name">"Cafeteria Name"</label>
                    <input
                        type="text"
                        id="cafeteria-name"
                        placeholder="Cafeteria name..."
                        prop:value=move || cafeteria_name.get()
                        on:input=move |ev| {
                            set_cafeteria_name.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group form-group-wide">
                    <label for="question">"Assessment Question"</label>
                    <textarea
                        id="question"
                        placeholder="Enter your food safety question..."
                        prop:value=move || question.get()
                        on:input=move |ev| {
                            set_question.set(event_target_value(&ev));
                        }
                    ></textarea>
                </div>
            </div>
        </div>
    }
}

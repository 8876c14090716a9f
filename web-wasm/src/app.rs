//! Main application component
//!
//! One linear flow per submission: validate, re-encode, call the API,
//! build the view-model, render. All analysis-stage failures surface
//! through a single error banner and the form stays usable.

use chrono::NaiveDate;
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use safety_vision_common::{
    extract_mime_type_from_data_url, format_timestamp, ReportView, Submission,
};

use crate::api::openai;
use crate::components::{
    header::Header, report_view::ReportPanel, spinner::Spinner,
    submission_form::SubmissionForm, upload_area::UploadArea,
};

/// One uploaded image, held until the report is rendered.
#[derive(Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub data_url: String,
}

/// Local wall-clock timestamp, taken when the result arrives (not from
/// the API).
fn local_timestamp() -> String {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .and_then(|d| {
        d.and_hms_opt(
            now.get_hours() as u32,
            now.get_minutes() as u32,
            now.get_seconds() as u32,
        )
    })
    .map(format_timestamp)
    .unwrap_or_default()
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(String::new());
    let (cafeteria_name, set_cafeteria_name) = signal(String::new());
    let (question, set_question) = signal(String::new());
    let (image, set_image) = signal(None::<UploadedImage>);
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (error_message, set_error_message) = signal(None::<String>);
    let (report, set_report) = signal(None::<ReportView>);

    let on_image_selected = move |img: UploadedImage| {
        set_image.set(Some(img));
    };

    let on_analyze = move |_: ()| {
        let submission = Submission {
            api_key: api_key.get_untracked(),
            cafeteria_name: cafeteria_name.get_untracked(),
            question: question.get_untracked(),
            image_data_url: image
                .get_untracked()
                .map(|i| i.data_url)
                .unwrap_or_default(),
        };

        // No outbound call when validation fails
        if let Err(e) = submission.validate() {
            set_error_message.set(Some(format!("⚠️ {e}")));
            return;
        }

        set_error_message.set(None);
        set_report.set(None);
        set_is_analyzing.set(true);
        console::log!(format!(
            "analysis request started ({} upload)",
            extract_mime_type_from_data_url(&submission.image_data_url)
        ));

        spawn_local(async move {
            match openai::analyze_submission(&submission).await {
                Ok(result) => {
                    let analysis_date = local_timestamp();
                    console::log!("analysis request finished");
                    set_report.set(Some(ReportView::build(
                        &result,
                        &submission.cafeteria_name,
                        &submission.question,
                        &analysis_date,
                    )));
                }
                Err(e) => {
                    console::log!("analysis request failed");
                    set_error_message.set(Some(format!("Analysis failed: {e}")));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    view! {
        <div class="container">
            <Header />

            <SubmissionForm
                api_key=api_key
                set_api_key=set_api_key
                cafeteria_name=cafeteria_name
                set_cafeteria_name=set_cafeteria_name
                question=question
                set_question=set_question
            />

            <UploadArea image=image on_image_selected=on_image_selected />

            <div class="analyze-row">
                <button
                    class="btn btn-primary"
                    disabled=move || is_analyzing.get()
                    on:click=move |_| on_analyze(())
                >
                    {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Compliance" }}
                </button>
            </div>

            {move || {
                error_message
                    .get()
                    .map(|msg| view! { <div class="error-banner">{msg}</div> })
            }}

            <Show when=move || is_analyzing.get()>
                <Spinner />
            </Show>

            {move || report.get().map(|rv| view! { <ReportPanel report=rv /> })}
        </div>
    }
}

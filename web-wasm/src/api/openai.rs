//! OpenAI chat-completions client
//!
//! One round trip per submission: the fixed prompt plus the
//! PNG-re-encoded image as a data URI, with a JSON-typed response body
//! requested. No retry, no timeout override, no streaming.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use safety_vision_common::{
    build_compliance_prompt, decode_data_url, parse_compliance_response, to_png_data_url,
    ComplianceReport, Error, Submission,
};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o";

/// Chat-completions request body
#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat-completions response body
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Issue the chat-completion call and return the reply text.
///
/// The credential goes into the Authorization header only; it is never
/// logged or stored.
async fn call_chat_api(api_key: &str, request: &ChatRequest) -> Result<String, JsValue> {
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(OPENAI_API_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", api_key))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("status {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: ChatResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// Run one compliance analysis for a validated submission.
///
/// Re-encodes the uploaded image to PNG, builds the fixed prompt with
/// the user's question, issues the API call and parses the JSON reply.
/// Every failure along the way collapses into one displayable message.
pub async fn analyze_submission(submission: &Submission) -> Result<ComplianceReport, String> {
    let bytes = decode_data_url(&submission.image_data_url).map_err(|e| e.to_string())?;
    let png_data_url = to_png_data_url(&bytes).map_err(|e| e.to_string())?;

    let prompt = build_compliance_prompt(&submission.question);

    let request = ChatRequest {
        model: MODEL,
        messages: vec![Message {
            role: "user",
            content: vec![
                ContentPart::Text { text: prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: png_data_url },
                },
            ],
        }],
        response_format: ResponseFormat {
            format_type: "json_object",
        },
    };

    let content = call_chat_api(&submission.api_key, &request)
        .await
        .map_err(|e| Error::Api(js_error_to_string(e)).to_string())?;

    parse_compliance_response(&content).map_err(|e| e.to_string())
}

fn js_error_to_string(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

//! Static application theme
//!
//! One embedded stylesheet, injected once at startup. Components only
//! reference class names; nothing here is rebuilt per request.

pub const APP_CSS: &str = r#"
body {
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    margin: 0;
    background-color: #FFFFFF;
    color: #212529;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 24px 16px 48px;
}

.header {
    color: #2E86C1;
    border-bottom: 2px solid #2E86C1;
    padding-bottom: 10px;
    margin-bottom: 24px;
}

.header h1 {
    margin: 0;
}

.subtitle {
    margin: 4px 0 0;
    color: #566573;
}

.form-panel {
    background-color: #F8F9F9;
    border-radius: 10px;
    padding: 20px;
    margin: 10px 0;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.form-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.form-group {
    display: flex;
    flex-direction: column;
}

.form-group-wide {
    grid-column: 1 / -1;
}

.form-group label {
    font-weight: 600;
    margin-bottom: 6px;
}

.form-group input,
.form-group textarea {
    padding: 8px 10px;
    border: 1px solid #D5D8DC;
    border-radius: 6px;
    font: inherit;
}

.form-group textarea {
    min-height: 72px;
    resize: vertical;
}

.upload-area {
    border: 2px dashed #AEB6BF;
    border-radius: 10px;
    padding: 32px;
    margin: 10px 0;
    text-align: center;
    cursor: pointer;
}

.upload-area.dragover {
    border-color: #2E86C1;
    background-color: #EBF5FB;
}

.upload-icon {
    font-size: 32px;
}

.preview img {
    max-width: 100%;
    border-radius: 10px;
    margin-top: 10px;
}

.text-muted {
    color: #85929E;
}

.analyze-row {
    margin: 16px 0;
}

.btn {
    border: none;
    border-radius: 6px;
    padding: 10px 20px;
    font: inherit;
    cursor: pointer;
}

.btn-primary {
    background-color: #2E86C1;
    color: #FFFFFF;
}

.btn:disabled {
    opacity: 0.6;
    cursor: default;
}

.error-banner {
    background-color: #FDEDEC;
    color: #943126;
    border-radius: 6px;
    padding: 12px 16px;
    margin: 10px 0;
}

.success-banner {
    background-color: #EAFAF1;
    color: #1E8449;
    border-radius: 6px;
    padding: 12px 16px;
    margin: 10px 0;
}

.warning-banner {
    background-color: #FDEDEC;
    color: #B03A2E;
    border-radius: 6px;
    padding: 12px 16px;
    margin: 10px 0;
}

.info-banner {
    background-color: #EBF5FB;
    color: #1B4F72;
    border-radius: 6px;
    padding: 12px 16px;
    margin: 10px 0;
}

.report-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.metric-box {
    background-color: #F8F9F9;
    border-radius: 10px;
    padding: 20px;
    margin: 10px 0;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.metric-box-wide {
    grid-column: 1 / -1;
}

.severity-critical { color: #E74C3C !important; }
.severity-major { color: #F39C12 !important; }
.severity-minor { color: #F1C40F !important; }

.report-section {
    margin-top: 16px;
}

.spinner-container {
    text-align: center;
    margin: 24px 0;
}

.spinner {
    display: inline-block;
    width: 28px;
    height: 28px;
    border: 3px solid #D5D8DC;
    border-top-color: #2E86C1;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;

/// Append the theme as a `<style>` element. Called once from startup.
pub fn inject_stylesheet() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(APP_CSS));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_inject_stylesheet_appends_style_to_head() {
        inject_stylesheet();

        let head = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.head())
            .expect("document head");
        let style = head
            .query_selector("style")
            .expect("query failed")
            .expect("style element injected");
        assert!(style
            .text_content()
            .unwrap_or_default()
            .contains(".severity-critical"));
    }
}

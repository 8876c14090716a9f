//! API response parser
//!
//! Extracts the JSON object from a chat-completion response and parses
//! it into a ComplianceReport.

use crate::error::{Error, Result};
use crate::types::ComplianceReport;

/// Extract the JSON portion of an API response.
///
/// Extraction priority:
/// 1. ```json ... ``` block
/// 2. raw {...} object
/// 3. error
///
/// # Arguments
/// * `response` - raw API response text
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON string
/// * `Err` - when no JSON object is present
pub fn extract_json(response: &str) -> Result<&str> {
    // Look for a ```json ... ``` block
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // Look for a raw {...}
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// Parse a chat-completion response into a ComplianceReport.
///
/// A response that is not a JSON object is rejected here explicitly
/// (serde alone would also consume a sequence positionally); individual
/// missing fields fall back to schema defaults instead.
pub fn parse_compliance_response(response: &str) -> Result<ComplianceReport> {
    let json_str = extract_json(response)?;
    let value: serde_json::Value = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("compliance JSON parse error: {e}")))?;
    if !value.is_object() {
        return Err(Error::Parse("response is not a JSON object".into()));
    }
    serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("compliance JSON parse error: {e}")))
}

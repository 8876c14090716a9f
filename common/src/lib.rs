//! Safety Vision Common Library
//!
//! Pure logic shared by the web app and its tests: domain types,
//! validation, prompt template, response parsing, image transport
//! encoding and the report view-model. No browser APIs here.

pub mod encode;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod report;
pub mod types;

pub use encode::{
    decode_data_url, extract_mime_type_from_data_url, reencode_png, to_png_data_url,
};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_compliance_response};
pub use prompts::{build_compliance_prompt, PROMPT_VERSION, RESPONSE_FIELDS};
pub use report::{format_timestamp, QualitySummary, ReportView};
pub use types::{ComplianceReport, CriteriaMet, Severity, Submission, Tags};

//! Domain types for the compliance analysis flow
//!
//! Shared between the form layer and the API layer:
//! - Submission: one form submission (request-scoped, never stored)
//! - ComplianceReport: the seven-field response schema
//! - CriteriaMet / Severity / Tags: wire-value enumerations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One form submission. Lives only for the duration of a single
/// analysis request; the API key is never persisted or logged.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub api_key: String,
    pub cafeteria_name: String,
    pub question: String,
    /// Data URL of the uploaded image ("data:image/jpeg;base64,...").
    pub image_data_url: String,
}

impl Submission {
    /// Check that all four required inputs are present.
    ///
    /// Returns an error naming every missing field. Callers must not
    /// issue the outbound API call when this fails.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("API key");
        }
        if self.cafeteria_name.trim().is_empty() {
            missing.push("cafeteria name");
        }
        if self.question.trim().is_empty() {
            missing.push("question");
        }
        if self.image_data_url.is_empty() {
            missing.push("image");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Compliance verdict. Unrecognized wire values are kept verbatim in
/// `Other` and rendered with the fallback icon instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CriteriaMet {
    Yes,
    No,
    Unable,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for CriteriaMet {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes" => CriteriaMet::Yes,
            "No" => CriteriaMet::No,
            "Unable" => CriteriaMet::Unable,
            _ => CriteriaMet::Other(value),
        }
    }
}

impl From<CriteriaMet> for String {
    fn from(value: CriteriaMet) -> Self {
        value.as_str().to_string()
    }
}

impl CriteriaMet {
    /// Display label; verbatim wire value for unrecognized verdicts.
    pub fn as_str(&self) -> &str {
        match self {
            CriteriaMet::Yes => "Yes",
            CriteriaMet::No => "No",
            CriteriaMet::Unable => "Unable",
            CriteriaMet::Unknown => "Unknown",
            CriteriaMet::Other(s) => s,
        }
    }

    /// Status icon: Yes and No get definite marks, everything else the
    /// question fallback.
    pub fn icon(&self) -> &'static str {
        match self {
            CriteriaMet::Yes => "✅",
            CriteriaMet::No => "❌",
            _ => "❓",
        }
    }
}

/// Finding severity. Only Critical/Major/Minor map to a highlight
/// style; None and unrecognized values render unhighlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    None,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Critical" => Severity::Critical,
            "Major" => Severity::Major,
            "Minor" => Severity::Minor,
            "None" => Severity::None,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::None => "None",
            Severity::Unknown => "Unknown",
            Severity::Other(s) => s,
        }
    }

    /// CSS hook for the severity span; empty string means no highlight.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "severity-critical",
            Severity::Major => "severity-major",
            Severity::Minor => "severity-minor",
            _ => "",
        }
    }
}

/// Tags come back as either a list or a pre-joined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Text(String),
}

impl Default for Tags {
    fn default() -> Self {
        Tags::List(Vec::new())
    }
}

impl Tags {
    /// Lists join with ", "; a plain string passes through unchanged.
    pub fn display(&self) -> String {
        match self {
            Tags::List(tags) => tags.join(", "),
            Tags::Text(text) => text.clone(),
        }
    }
}

/// Versioned response schema: the seven fields the prompt contracts
/// for. Individual fields default when absent (sentinels are applied at
/// render time, see the report module); a response that is not a JSON
/// object is rejected explicitly by the parser module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceReport {
    pub criteria_met: CriteriaMet,
    pub explanation: String,
    pub improvements: String,
    pub severity: Severity,
    pub image_quality_issues: Vec<String>,
    pub quality_assessment: String,
    pub tags: Tags,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Submission validation tests
    // =============================================

    fn complete_submission() -> Submission {
        Submission {
            api_key: "sk-test".to_string(),
            cafeteria_name: "North Campus Cafeteria".to_string(),
            question: "Is the prep counter clean?".to_string(),
            image_data_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        }
    }

    #[test]
    fn test_validate_complete_submission() {
        assert!(complete_submission().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_api_key() {
        let submission = Submission {
            api_key: String::new(),
            ..complete_submission()
        };
        let err = submission.validate().unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_validate_missing_cafeteria_name() {
        let submission = Submission {
            cafeteria_name: "   ".to_string(),
            ..complete_submission()
        };
        let err = submission.validate().unwrap_err();
        assert!(err.to_string().contains("cafeteria name"));
    }

    #[test]
    fn test_validate_missing_question() {
        let submission = Submission {
            question: String::new(),
            ..complete_submission()
        };
        let err = submission.validate().unwrap_err();
        assert!(err.to_string().contains("question"));
    }

    #[test]
    fn test_validate_missing_image() {
        let submission = Submission {
            image_data_url: String::new(),
            ..complete_submission()
        };
        let err = submission.validate().unwrap_err();
        assert!(err.to_string().contains("image"));
    }

    #[test]
    fn test_validate_lists_all_missing_fields() {
        let submission = Submission::default();
        let err = submission.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("API key"));
        assert!(msg.contains("cafeteria name"));
        assert!(msg.contains("question"));
        assert!(msg.contains("image"));
    }

    // =============================================
    // CriteriaMet tests
    // =============================================

    #[test]
    fn test_criteria_met_known_values() {
        assert_eq!(CriteriaMet::from("Yes".to_string()), CriteriaMet::Yes);
        assert_eq!(CriteriaMet::from("No".to_string()), CriteriaMet::No);
        assert_eq!(CriteriaMet::from("Unable".to_string()), CriteriaMet::Unable);
    }

    #[test]
    fn test_criteria_met_unrecognized_kept_verbatim() {
        let status = CriteriaMet::from("Partial".to_string());
        assert_eq!(status, CriteriaMet::Other("Partial".to_string()));
        assert_eq!(status.as_str(), "Partial");
        assert_eq!(status.icon(), "❓");
    }

    #[test]
    fn test_criteria_met_icons() {
        assert_eq!(CriteriaMet::Yes.icon(), "✅");
        assert_eq!(CriteriaMet::No.icon(), "❌");
        assert_eq!(CriteriaMet::Unable.icon(), "❓");
        assert_eq!(CriteriaMet::Unknown.icon(), "❓");
    }

    #[test]
    fn test_criteria_met_default_is_unknown() {
        assert_eq!(CriteriaMet::default(), CriteriaMet::Unknown);
    }

    // =============================================
    // Severity tests
    // =============================================

    #[test]
    fn test_severity_css_classes() {
        assert_eq!(Severity::Critical.css_class(), "severity-critical");
        assert_eq!(Severity::Major.css_class(), "severity-major");
        assert_eq!(Severity::Minor.css_class(), "severity-minor");
        assert_eq!(Severity::None.css_class(), "");
        assert_eq!(Severity::Unknown.css_class(), "");
        assert_eq!(Severity::Other("Cosmetic".to_string()).css_class(), "");
    }

    #[test]
    fn test_severity_unrecognized_kept_verbatim() {
        let severity = Severity::from("Cosmetic".to_string());
        assert_eq!(severity.as_str(), "Cosmetic");
    }

    // =============================================
    // Tags tests
    // =============================================

    #[test]
    fn test_tags_list_joined() {
        let tags = Tags::List(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(tags.display(), "a, b, c");
    }

    #[test]
    fn test_tags_string_passthrough() {
        let tags = Tags::Text("a, b, c".to_string());
        assert_eq!(tags.display(), "a, b, c");
    }

    #[test]
    fn test_tags_deserialize_list() {
        let tags: Tags = serde_json::from_str(r#"["clean", "organized"]"#).unwrap();
        assert_eq!(
            tags,
            Tags::List(vec!["clean".to_string(), "organized".to_string()])
        );
    }

    #[test]
    fn test_tags_deserialize_string() {
        let tags: Tags = serde_json::from_str(r#""clean, organized""#).unwrap();
        assert_eq!(tags, Tags::Text("clean, organized".to_string()));
    }

    // =============================================
    // ComplianceReport tests
    // =============================================

    #[test]
    fn test_compliance_report_deserialize_full() {
        let json = r#"{
            "criteria_met": "Yes",
            "explanation": "The prep counter is clean and sanitized.",
            "improvements": "",
            "severity": "None",
            "image_quality_issues": ["none"],
            "quality_assessment": "Image quality is sufficient.",
            "tags": ["counter", "clean", "prep-area"]
        }"#;

        let report: ComplianceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.criteria_met, CriteriaMet::Yes);
        assert_eq!(report.severity, Severity::None);
        assert_eq!(report.image_quality_issues, vec!["none".to_string()]);
        assert_eq!(report.tags.display(), "counter, clean, prep-area");
    }

    #[test]
    fn test_compliance_report_missing_fields_default() {
        let json = r#"{"criteria_met": "No"}"#;

        let report: ComplianceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.criteria_met, CriteriaMet::No);
        assert_eq!(report.severity, Severity::Unknown);
        assert_eq!(report.explanation, "");
        assert!(report.image_quality_issues.is_empty());
        assert_eq!(report.tags, Tags::List(vec![]));
    }

    #[test]
    fn test_compliance_report_unrecognized_enums_survive() {
        let json = r#"{"criteria_met": "Partial", "severity": "Cosmetic"}"#;

        let report: ComplianceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.criteria_met.as_str(), "Partial");
        assert_eq!(report.severity.as_str(), "Cosmetic");
    }

    #[test]
    fn test_compliance_report_non_object_rejected_by_parser() {
        // The derived deserializer alone would consume a sequence
        // positionally; structural rejection happens in the parser.
        let result = crate::parser::parse_compliance_response(r#"["not", "an", "object"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_compliance_report_roundtrip() {
        let original = ComplianceReport {
            criteria_met: CriteriaMet::Unable,
            explanation: "Too dark to judge.".to_string(),
            improvements: "Retake with better lighting.".to_string(),
            severity: Severity::Minor,
            image_quality_issues: vec!["underexposed".to_string()],
            quality_assessment: "Darkness prevents a reliable verdict.".to_string(),
            tags: Tags::List(vec!["dark".to_string(), "storage".to_string()]),
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: ComplianceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}

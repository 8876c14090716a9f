//! Report view-model
//!
//! Pure mapping from (ComplianceReport, metadata, timestamp) to the
//! strings and style hooks the report component renders. Deterministic:
//! identical inputs produce an identical view. Missing-field sentinels
//! are applied here, not at parse time.

use chrono::NaiveDateTime;

use crate::types::ComplianceReport;

/// Sentinel shown when the model omits an explanation.
pub const NO_EXPLANATION: &str = "No explanation provided";

/// Image-quality subsection outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualitySummary {
    /// No issues reported: empty list or the ["none"] sentinel.
    Clean,
    /// Joined issue list for the warning banner.
    Issues(String),
}

/// Summarize the image_quality_issues field for display.
pub fn summarize_quality_issues(issues: &[String]) -> QualitySummary {
    match issues {
        [] => QualitySummary::Clean,
        [only] if only.eq_ignore_ascii_case("none") => QualitySummary::Clean,
        _ => QualitySummary::Issues(issues.join(", ")),
    }
}

/// Absolute local date-time, to the second.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Everything the report component renders, precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub cafeteria_name: String,
    pub analysis_date: String,
    pub status_icon: &'static str,
    pub status_label: String,
    pub severity_label: String,
    pub severity_class: &'static str,
    pub tags: String,
    pub quality: QualitySummary,
    pub quality_assessment: String,
    pub question: String,
    pub explanation: String,
    /// None means "no improvements needed".
    pub improvements: Option<String>,
}

impl ReportView {
    /// Build the view for one completed analysis.
    ///
    /// # Arguments
    /// * `report` - parsed API response
    /// * `cafeteria_name` / `question` - echoed submission metadata
    /// * `analysis_date` - local timestamp taken when the result arrived
    pub fn build(
        report: &ComplianceReport,
        cafeteria_name: &str,
        question: &str,
        analysis_date: &str,
    ) -> Self {
        Self {
            cafeteria_name: cafeteria_name.to_string(),
            analysis_date: analysis_date.to_string(),
            status_icon: report.criteria_met.icon(),
            status_label: report.criteria_met.as_str().to_string(),
            severity_label: report.severity.as_str().to_string(),
            severity_class: report.severity.css_class(),
            tags: report.tags.display(),
            quality: summarize_quality_issues(&report.image_quality_issues),
            quality_assessment: report.quality_assessment.clone(),
            question: question.to_string(),
            explanation: if report.explanation.is_empty() {
                NO_EXPLANATION.to_string()
            } else {
                report.explanation.clone()
            },
            improvements: if report.improvements.trim().is_empty() {
                None
            } else {
                Some(report.improvements.clone())
            },
        }
    }
}

//! Prompt template for the compliance analysis request
//!
//! One fixed instruction template; the user's question is interpolated
//! verbatim. The template and RESPONSE_FIELDS together form the
//! response-shape contract parsed in the parser module.

/// Bumped whenever the template or the response contract changes.
pub const PROMPT_VERSION: u32 = 1;

/// The seven fields the model is contracted to return.
pub const RESPONSE_FIELDS: &[&str] = &[
    "criteria_met",
    "explanation",
    "improvements",
    "severity",
    "image_quality_issues",
    "quality_assessment",
    "tags",
];

/// Build the analysis prompt for one submission.
///
/// # Arguments
/// * `question` - the user's assessment question, inserted verbatim
///
/// # Returns
/// Prompt string instructing a quality-first assessment and a JSON
/// object with exactly the seven contracted fields.
pub fn build_compliance_prompt(question: &str) -> String {
    format!(
        r#"You are a food safety manager analyzing a cafeteria image.
Question to evaluate: {question}

IMPORTANT INSTRUCTIONS:
1. First assess image quality (darkness/blurriness)
2. For blank/empty area requests, dark images may be compliant
3. Only mark dark/blurry images as compliant if they satisfy specific criteria

Provide JSON analysis with:
- criteria_met: Yes/No/Unable
- explanation: 2-3 sentence assessment
- improvements: actionable suggestions
- severity: Critical/Major/Minor/None
- image_quality_issues: list of issues
- quality_assessment: image quality impact
- tags: 3-5 descriptive tags

Respond with a single JSON object containing exactly these fields."#
    )
}

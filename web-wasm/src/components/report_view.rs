//! Compliance report component
//!
//! Pure rendering of the ReportView view-model built in the common
//! crate; every mapping decision (icons, classes, sentinels) happens
//! there so this stays display-only.

use leptos::prelude::*;

use safety_vision_common::{QualitySummary, ReportView};

#[component]
pub fn ReportPanel(report: ReportView) -> impl IntoView {
    view! {
        <div class="report">
            <div class="success-banner">"✅ Analysis Complete!"</div>
            <h2>"📋 Compliance Report"</h2>

            <div class="report-grid">
                <div class="metric-box">
                    <p><strong>"Cafeteria: "</strong>{report.cafeteria_name.clone()}</p>
                    <p><strong>"Analysis Date: "</strong>{report.analysis_date.clone()}</p>
                </div>

                <div class="metric-box">
                    <p>
                        <strong>"Compliance Status: "</strong>
                        {report.status_icon}
                        " "
                        {report.status_label.clone()}
                    </p>
                    <p>
                        <strong>"Severity Level: "</strong>
                        <span class=report.severity_class>{report.severity_label.clone()}</span>
                    </p>
                </div>

                <div class="metric-box metric-box-wide">
                    <p><strong>"Tags: "</strong>"🏷️ "{report.tags.clone()}</p>
                </div>
            </div>

            <section class="report-section">
                <h3>"📸 Image Quality Analysis"</h3>
                {match &report.quality {
                    QualitySummary::Clean => view! {
                        <div class="success-banner">"✅ No quality issues detected"</div>
                    }
                    .into_any(),
                    QualitySummary::Issues(joined) => view! {
                        <div class="warning-banner">{format!("⚠️ Detected issues: {joined}")}</div>
                    }
                    .into_any(),
                }}
                <p class="info-banner">
                    {format!("Quality Impact Assessment: {}", report.quality_assessment)}
                </p>
            </section>

            <section class="report-section">
                <h3>"🔍 Detailed Compliance Analysis"</h3>
                <p><strong>"Assessment Question: "</strong>{report.question.clone()}</p>
                <h4>"Explanation"</h4>
                <p>{report.explanation.clone()}</p>
                {match report.improvements.clone() {
                    Some(text) => view! {
                        <div>
                            <h4>"🛠️ Improvement Suggestions"</h4>
                            <p>{text}</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="success-banner">"🌟 No improvements needed - all standards met"</div>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}

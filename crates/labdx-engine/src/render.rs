use labdx_core::models::AnalysisReport;

/// Format a report as structured plain text for terminals and logs.
pub fn to_text(report: &AnalysisReport) -> String {
    let mut output = format!("## Lab Analysis: {}\n\n", report.overall_status);
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    output.push_str("### Results\n");
    if report.test_results.is_empty() {
        output.push_str("- (no recognised parameters)\n");
    }
    for result in &report.test_results {
        output.push_str(&format!(
            "- {}: {} {} [{}] {}",
            result.name,
            result.value,
            result.unit,
            result.normal_range,
            result.status.as_str(),
        ));
        if result.is_abnormal() {
            output.push_str(&format!(
                " ({}, {})",
                result.severity.as_str(),
                result.deviation_display()
            ));
        }
        output.push('\n');
    }
    output.push('\n');

    if !report.diagnostics.is_empty() {
        output.push_str("### Findings\n");
        for finding in &report.diagnostics {
            output.push_str(&format!(
                "- {} (severity: {}, confidence: {:?})\n  {}\n  related: {}\n",
                finding.condition,
                finding.severity.as_str(),
                finding.confidence,
                finding.recommendation,
                finding.related_tests.join(", "),
            ));
        }
        output.push('\n');
    }

    if !report.rejected.is_empty() {
        output.push_str("### Rejected values\n");
        for value in &report.rejected {
            output.push_str(&format!(
                "- {}: {:?} ({})\n",
                value.key,
                value.raw,
                value.reason.as_str()
            ));
        }
        output.push('\n');
    }

    output
}

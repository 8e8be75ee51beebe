//! Plain-text validation report.

use pgtd_model::{Finding, RowOutcome, RuleVariant, SubmissionContext};
use pgtd_validate::ValidationRun;

use crate::summary::Summary;

const RULE_WIDTH: usize = 80;

/// Render the console report.
///
/// Without a context (the filename could not be resolved) the Shanghai title
/// is used and the exchange block is omitted.
pub fn render_text(
    context: Option<&SubmissionContext>,
    findings: &[Finding],
    outcomes: &[RowOutcome],
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    let variant = context.map_or(RuleVariant::Shanghai, |c| c.variant);
    let (title, title_local) = variant.report_title();
    lines.push(heavy.clone());
    lines.push(title.to_string());
    lines.push(title_local.to_string());
    lines.push(heavy.clone());
    lines.push(String::new());

    if let Some(context) = context {
        lines.push(format!("Exchange: {}", context.variant.exchange_label()));
        if !context.issuer_id.is_empty() {
            lines.push(format!("Broker Code (FIRM_ID): {}", context.issuer_id));
        }
        lines.push(format!(
            "Submission Date: {}",
            context.submission_date.format("%Y-%m-%d")
        ));
        lines.push(String::new());
    }

    let summary = Summary::from_parts(findings, outcomes);
    lines.push(format!("Total Rows Processed: {}", summary.total_rows));
    lines.push(format!("Valid Rows: {}", summary.valid_rows));
    lines.push(format!("Invalid Rows: {}", summary.invalid_rows));
    lines.push(format!("Total Errors: {}", summary.total_errors));
    lines.push(format!("Total Warnings: {}", summary.total_warnings));
    lines.push(String::new());

    if summary.valid_rows > 0 {
        section(&mut lines, &light, "SUCCESSFUL VALIDATIONS:");
        for outcome in outcomes.iter().filter(|o| o.is_valid()) {
            lines.push(success_line(outcome));
        }
        lines.push(String::new());
    }

    if summary.total_errors > 0 {
        section(&mut lines, &light, "ERRORS:");
        lines.extend(findings.iter().filter(|f| f.is_error()).map(ToString::to_string));
        lines.push(String::new());
    }

    if summary.total_warnings > 0 {
        section(&mut lines, &light, "WARNINGS:");
        lines.extend(findings.iter().filter(|f| f.is_warning()).map(ToString::to_string));
        lines.push(String::new());
    }

    if summary.total_errors == 0 && summary.total_warnings == 0 {
        lines.push(heavy.clone());
        lines.push("✓ ALL VALIDATIONS PASSED!".to_string());
        lines.push(heavy);
    }

    lines.join("\n")
}

pub fn render_run(run: &ValidationRun) -> String {
    render_text(run.context(), run.findings(), run.outcomes())
}

fn section(lines: &mut Vec<String>, rule: &str, heading: &str) {
    lines.push(rule.to_string());
    lines.push(heading.to_string());
    lines.push(rule.to_string());
}

fn success_line(outcome: &RowOutcome) -> String {
    let mut parts = Vec::with_capacity(2);
    if !outcome.account_name.is_empty() {
        parts.push(outcome.account_name.clone());
    }
    if !outcome.client_code.is_empty() {
        parts.push(format!("BCAN: {}", outcome.client_code));
    }
    let label = if parts.is_empty() {
        "Row data".to_string()
    } else {
        parts.join(" - ")
    };

    let mut line = format!("✓ Row {}: {label}", outcome.row);
    if outcome.warning_count > 0 {
        line.push_str(&format!(" (with {} warning(s))", outcome.warning_count));
    }
    line
}

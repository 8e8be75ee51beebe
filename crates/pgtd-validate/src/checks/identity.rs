//! Identity checks: issuer code, client code and report date.

use pgtd_model::{FieldKey, Finding, Issue, SubmissionContext, parse_compact_date};

use super::RowContext;

/// Check the identity fields of a first-time or change row.
pub fn check(ctx: &RowContext<'_>, submission: &SubmissionContext) -> Vec<Finding> {
    [
        check_issuer_code(ctx, submission),
        check_client_code(ctx),
        check_report_date(ctx, submission),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Five ASCII digits, equal to the firm id from the filename.
fn check_issuer_code(ctx: &RowContext<'_>, submission: &SubmissionContext) -> Option<Finding> {
    let value = ctx.value(FieldKey::BrokerCode);
    if value.is_empty() {
        return None;
    }
    let issue = if value.len() != 5 || !value.bytes().all(|b| b.is_ascii_digit()) {
        Issue::IssuerCodeFormat
    } else if value != submission.issuer_id {
        Issue::IssuerCodeMismatch {
            expected: submission.issuer_id.clone(),
        }
    } else {
        return None;
    };
    ctx.finding(FieldKey::BrokerCode, value, issue)
}

fn check_client_code(ctx: &RowContext<'_>) -> Option<Finding> {
    let value = ctx.value(FieldKey::ClientCode);
    if value.is_empty() {
        return None;
    }
    let length = value.chars().count();
    if (3..=10).contains(&length) {
        None
    } else {
        ctx.finding(FieldKey::ClientCode, value, Issue::ClientCodeLength)
    }
}

fn check_report_date(ctx: &RowContext<'_>, submission: &SubmissionContext) -> Option<Finding> {
    let value = ctx.value(FieldKey::ReportDate);
    if value.is_empty() {
        return None;
    }
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return ctx.finding(FieldKey::ReportDate, value, Issue::DateFormat);
    }
    let Some(date) = parse_compact_date(value) else {
        return ctx.finding(FieldKey::ReportDate, value, Issue::InvalidReportDate);
    };
    if date > submission.submission_date {
        return ctx.finding(
            FieldKey::ReportDate,
            value,
            Issue::DateAfterSubmission {
                submission_date: submission.submission_date_compact(),
            },
        );
    }
    None
}

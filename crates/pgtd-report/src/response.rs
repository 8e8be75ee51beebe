//! JSON document returned by the upload service.

use serde::{Deserialize, Serialize};

use pgtd_model::{Finding, RowOutcome, RuleVariant, Severity};
use pgtd_validate::ValidationRun;

use crate::summary::Summary;
use crate::text::render_run;

/// Full result of one upload: context, counts, per-row outcomes, findings
/// and the rendered text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub is_valid: bool,
    pub report: String,
    pub exchange_type: Option<RuleVariant>,
    pub firm_id: Option<String>,
    /// Submission date as `YYYYMMDD`.
    pub submission_date: Option<String>,
    pub summary: Summary,
    pub row_results: Vec<RowRecord>,
    pub errors: Vec<FindingRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub row_num: usize,
    pub account_name: String,
    pub client_code: String,
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub row_num: usize,
    pub field_name_cn: String,
    pub field_name_en: String,
    pub field_col: usize,
    pub code: String,
    pub message: String,
    pub value: String,
    pub severity: Severity,
    /// Issue family label, e.g. "Presence" or "Cross-reference".
    pub category: String,
    pub account_name: String,
    pub client_code: String,
}

impl ValidationResponse {
    pub fn from_run(run: &ValidationRun) -> Self {
        let context = run.context();
        Self {
            is_valid: run.is_valid(),
            report: render_run(run),
            exchange_type: context.map(|c| c.variant),
            firm_id: context.map(|c| c.issuer_id.clone()),
            submission_date: context.map(|c| c.submission_date_compact()),
            summary: Summary::from_run(run),
            row_results: run.outcomes().iter().map(RowRecord::from).collect(),
            errors: run.findings().iter().map(FindingRecord::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&RowOutcome> for RowRecord {
    fn from(outcome: &RowOutcome) -> Self {
        Self {
            row_num: outcome.row,
            account_name: outcome.account_name.clone(),
            client_code: outcome.client_code.clone(),
            is_valid: outcome.is_valid(),
            error_count: outcome.error_count,
            warning_count: outcome.warning_count,
        }
    }
}

impl From<&Finding> for FindingRecord {
    fn from(finding: &Finding) -> Self {
        Self {
            row_num: finding.row,
            field_name_cn: finding.field.local_name.clone(),
            field_name_en: finding.field.canonical_name.clone(),
            field_col: finding.field.column,
            code: finding.code().to_string(),
            message: finding.message(),
            value: finding.value.clone(),
            severity: finding.severity(),
            category: finding.category().label().to_string(),
            account_name: finding.account_name.clone(),
            client_code: finding.client_code.clone(),
        }
    }
}

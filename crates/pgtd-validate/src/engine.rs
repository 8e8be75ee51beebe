//! Per-row evaluation.
//!
//! Evaluating a row is pure: it depends only on the row's cells, the
//! submission context and the field table. Cross-row state lives in
//! [`crate::ValidationRun`].

use pgtd_model::{FieldKey, Finding, Row, RowScope, SubmissionContext};
use pgtd_standards::FieldTable;
use pgtd_standards::codelists::REPORT_TYPE_STOP;

use crate::checks::{self, RowContext};

/// Result of evaluating one row in isolation.
#[derive(Debug, Clone)]
pub struct RowEvaluation {
    pub row: Row,
    pub scope: RowScope,
    pub findings: Vec<Finding>,
}

impl RowEvaluation {
    pub fn row_number(&self) -> usize {
        self.scope.row
    }

    pub fn client_code(&self) -> &str {
        &self.scope.client_code
    }

    pub fn account_name(&self) -> &str {
        &self.scope.account_name
    }
}

/// Evaluate `raw` as data row `row_number` (1-based).
pub fn evaluate_row<S: AsRef<str>>(
    row_number: usize,
    raw: &[S],
    submission: &SubmissionContext,
    table: &FieldTable,
) -> RowEvaluation {
    let row = Row::normalize(raw, table.width());
    let cell = |key: FieldKey| table.index_of(key).map(|index| row.get(index)).unwrap_or("");
    let scope = RowScope::new(
        row_number,
        cell(FieldKey::AccountName),
        cell(FieldKey::ClientCode),
    );

    let findings = {
        let ctx = RowContext::new(table, &row, &scope);
        if ctx.value(FieldKey::ReportType) == REPORT_TYPE_STOP {
            checks::field::check_identity_presence(&ctx)
        } else {
            let mut findings = checks::field::check(&ctx);
            findings.extend(checks::identity::check(&ctx, submission));
            findings.extend(checks::numeric::check(&ctx));
            findings.extend(checks::fund_ratio::check(&ctx));
            findings.extend(checks::high_frequency::check(&ctx));
            findings
        }
    };

    tracing::trace!(row = row_number, findings = findings.len(), "evaluated row");

    RowEvaluation {
        row,
        scope,
        findings,
    }
}

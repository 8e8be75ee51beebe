//! Aggregated results of one submission.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use pgtd_model::{
    FieldKey, Finding, Issue, RowOutcome, Severity, SubmissionContext, SubmissionError,
};
use pgtd_standards::FieldTable;

use crate::engine::RowEvaluation;

/// Findings and row outcomes for one submission, in row order.
///
/// [`ValidationRun::commit`] is the only writer. Counts are derived from the
/// stored findings on every call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationRun {
    context: Option<SubmissionContext>,
    findings: Vec<Finding>,
    outcomes: Vec<RowOutcome>,
    #[serde(skip)]
    first_seen: HashMap<String, usize>,
}

impl ValidationRun {
    pub fn new(context: SubmissionContext) -> Self {
        Self {
            context: Some(context),
            ..Self::default()
        }
    }

    /// A run stopped by a file-level failure, holding a single row-0 finding.
    pub fn failed(
        context: Option<SubmissionContext>,
        error: SubmissionError,
        value: impl Into<String>,
    ) -> Self {
        let finding = Finding::file_level(error, value);
        tracing::warn!(code = finding.code(), "{}", finding.message());
        Self {
            context,
            findings: vec![finding],
            ..Self::default()
        }
    }

    /// Record a row: duplicate client-code detection, then its findings and
    /// outcome.
    pub fn commit(&mut self, table: &FieldTable, evaluation: RowEvaluation) {
        let RowEvaluation {
            scope,
            mut findings,
            ..
        } = evaluation;

        if !scope.client_code.is_empty() {
            match self.first_seen.entry(scope.client_code.clone()) {
                Entry::Occupied(entry) => {
                    let first_row = *entry.get();
                    if let Some(spec) = table.spec(FieldKey::ClientCode) {
                        findings.push(scope.finding(
                            spec,
                            &scope.client_code,
                            Issue::DuplicateClientCode { first_row },
                        ));
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(scope.row);
                }
            }
        }

        let error_count = findings.iter().filter(|f| f.is_error()).count();
        let warning_count = findings.iter().filter(|f| f.is_warning()).count();

        tracing::debug!(
            row = scope.row,
            errors = error_count,
            warnings = warning_count,
            "committed row"
        );

        self.outcomes.push(RowOutcome {
            row: scope.row,
            account_name: scope.account_name,
            client_code: scope.client_code,
            error_count,
            warning_count,
        });
        self.findings.append(&mut findings);
    }

    pub fn context(&self) -> Option<&SubmissionContext> {
        self.context.as_ref()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.severity() == severity)
    }

    /// The fatal file-level failure, if the run stopped before row checks.
    pub fn file_error(&self) -> Option<&SubmissionError> {
        self.findings.iter().find_map(|finding| match &finding.issue {
            Issue::File { error } => Some(error),
            _ => None,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.outcomes.len()
    }

    pub fn valid_rows(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid()).count()
    }

    pub fn invalid_rows(&self) -> usize {
        self.total_rows() - self.valid_rows()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when no error-severity finding exists.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

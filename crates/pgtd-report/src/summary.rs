use serde::{Deserialize, Serialize};

use pgtd_model::{Finding, RowOutcome};
use pgtd_validate::ValidationRun;

/// Headline counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl Summary {
    pub fn from_parts(findings: &[Finding], outcomes: &[RowOutcome]) -> Self {
        let total_rows = outcomes.len();
        let valid_rows = outcomes.iter().filter(|o| o.is_valid()).count();
        Self {
            total_rows,
            valid_rows,
            invalid_rows: total_rows - valid_rows,
            total_errors: findings.iter().filter(|f| f.is_error()).count(),
            total_warnings: findings.iter().filter(|f| f.is_warning()).count(),
        }
    }

    pub fn from_run(run: &ValidationRun) -> Self {
        Self::from_parts(run.findings(), run.outcomes())
    }

    pub fn is_valid(&self) -> bool {
        self.total_errors == 0
    }
}

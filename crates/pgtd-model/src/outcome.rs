use serde::{Deserialize, Serialize};

/// Per-row validity summary, one per committed data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    pub row: usize,
    pub account_name: String,
    pub client_code: String,
    pub error_count: usize,
    pub warning_count: usize,
}

impl RowOutcome {
    /// A row is valid when it has no error-severity findings.
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }
}

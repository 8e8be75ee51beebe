//! Findings: an issue located at a row and column of the submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SubmissionError;
use crate::field::FieldSpec;
use crate::issue::{Category, Issue, Severity};

/// Column a finding refers to. Column 0 means the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    pub local_name: String,
    pub canonical_name: String,
    pub column: usize,
}

impl FieldRef {
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self {
            local_name: spec.local_name.to_string(),
            canonical_name: spec.canonical_name().to_string(),
            column: spec.column(),
        }
    }

    /// Pseudo-field used for file-level findings ("File" or "Filename").
    pub fn file_level(subject: &str) -> Self {
        Self {
            local_name: subject.to_string(),
            canonical_name: subject.to_lowercase(),
            column: 0,
        }
    }

    pub fn is_file_level(&self) -> bool {
        self.column == 0
    }
}

/// Identity of the row a finding belongs to.
///
/// Passed explicitly to every check so a finding never picks up the identity
/// of another row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowScope {
    /// 1-based data row number; 0 for file-level findings.
    pub row: usize,
    pub account_name: String,
    pub client_code: String,
}

impl RowScope {
    pub fn new(row: usize, account_name: impl Into<String>, client_code: impl Into<String>) -> Self {
        Self {
            row,
            account_name: account_name.into(),
            client_code: client_code.into(),
        }
    }

    pub fn file_level() -> Self {
        Self::default()
    }

    /// Finding for `spec` in this row.
    pub fn finding(&self, spec: &FieldSpec, value: &str, issue: Issue) -> Finding {
        Finding {
            row: self.row,
            field: FieldRef::from_spec(spec),
            value: value.to_string(),
            issue,
            account_name: self.account_name.clone(),
            client_code: self.client_code.clone(),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub row: usize,
    pub field: FieldRef,
    /// Offending value, or the file path / filename for file-level findings.
    pub value: String,
    pub issue: Issue,
    pub account_name: String,
    pub client_code: String,
}

impl Finding {
    /// Row-0 finding for a fatal file-level failure.
    pub fn file_level(error: SubmissionError, value: impl Into<String>) -> Self {
        Self {
            row: 0,
            field: FieldRef::file_level(error.subject()),
            value: value.into(),
            issue: Issue::File { error },
            account_name: String::new(),
            client_code: String::new(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.issue.severity()
    }

    pub fn category(&self) -> Category {
        self.issue.category()
    }

    pub fn code(&self) -> &'static str {
        self.issue.code()
    }

    pub fn message(&self) -> String {
        self.issue.message()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Row {}", self.severity(), self.row)?;

        let mut parts = Vec::with_capacity(2);
        if !self.account_name.is_empty() {
            parts.push(format!("Account: {}", self.account_name));
        }
        if !self.client_code.is_empty() {
            parts.push(format!("BCAN: {}", self.client_code));
        }
        if !parts.is_empty() {
            write!(f, " [{}]", parts.join(", "))?;
        }

        if self.field.is_file_level() {
            write!(f, ", '{}'", self.field.local_name)?;
        } else {
            write!(
                f,
                ", Column {} '{}' ({})",
                self.field.column, self.field.local_name, self.field.canonical_name
            )?;
        }
        write!(f, ": {} (value: '{}')", self.message(), self.value)
    }
}

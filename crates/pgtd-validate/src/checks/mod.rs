//! Row checks, one module per concern.
//!
//! Every check reads the row through [`RowContext`], which carries the row's
//! identity explicitly, and returns its findings.

pub mod field;
pub mod fund_ratio;
pub mod high_frequency;
pub mod identity;
pub mod numeric;

use pgtd_model::{FieldKey, FieldSpec, Finding, Issue, Row, RowScope};
use pgtd_standards::FieldTable;
use pgtd_standards::codelists::REPORTED_ELSEWHERE;

/// One row of one variant, with the identity findings are attributed to.
pub struct RowContext<'a> {
    pub table: &'a FieldTable,
    pub row: &'a Row,
    pub scope: &'a RowScope,
}

impl<'a> RowContext<'a> {
    pub fn new(table: &'a FieldTable, row: &'a Row, scope: &'a RowScope) -> Self {
        Self { table, row, scope }
    }

    /// Cell for `key`; `""` when the variant has no such column.
    pub fn value(&self, key: FieldKey) -> &'a str {
        self.table
            .index_of(key)
            .map(|index| self.row.get(index))
            .unwrap_or("")
    }

    pub fn spec(&self, key: FieldKey) -> Option<&'a FieldSpec> {
        self.table.spec(key)
    }

    /// Finding against `key`, or `None` when the variant lacks the column.
    pub fn finding(&self, key: FieldKey, value: &str, issue: Issue) -> Option<Finding> {
        self.spec(key)
            .map(|spec| self.scope.finding(spec, value, issue))
    }
}

/// Values standing in for data reported through another participant.
pub fn is_reported_elsewhere(value: &str) -> bool {
    value == REPORTED_ELSEWHERE
}

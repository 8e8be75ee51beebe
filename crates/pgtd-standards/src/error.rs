use pgtd_model::{FieldKey, RuleVariant};

/// Catalog integrity failures detected while building a field table.
#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("{variant} catalog: condition on {field} reads {dependency}, which is not a {variant} column")]
    MissingDependency {
        variant: RuleVariant,
        field: FieldKey,
        dependency: FieldKey,
    },

    #[error("{variant} catalog: {field} is listed more than once")]
    DuplicateField { variant: RuleVariant, field: FieldKey },

    #[error("{variant} catalog has {actual} columns, expected {expected}")]
    ColumnCount {
        variant: RuleVariant,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, StandardsError>;

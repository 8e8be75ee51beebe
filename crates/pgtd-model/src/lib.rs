//! Core types for programmatic-trading account disclosure reports.

pub mod context;
pub mod error;
pub mod field;
pub mod finding;
pub mod issue;
pub mod outcome;
pub mod row;
pub mod variant;

pub use context::{SubmissionContext, parse_compact_date};
pub use error::{FILENAME_EXAMPLE, FILENAME_PATTERN, Result, SubmissionError};
pub use field::{FieldKey, FieldSpec, RequirementRule};
pub use finding::{FieldRef, Finding, RowScope};
pub use issue::{Category, Issue, RatioBound, Severity, SizeBound};
pub use outcome::RowOutcome;
pub use row::Row;
pub use variant::RuleVariant;

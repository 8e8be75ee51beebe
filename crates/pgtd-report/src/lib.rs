//! Projections of a validation run.
//!
//! - **Text**: the console report printed by the CLI and embedded in the
//!   upload response
//! - **JSON**: [`ValidationResponse`], the upload service document
//! - **CSV**: one line per finding, for spreadsheet review

mod export;
mod response;
mod summary;
mod text;

pub use export::{write_findings, write_findings_csv};
pub use response::{FindingRecord, RowRecord, ValidationResponse};
pub use summary::Summary;
pub use text::{render_run, render_text};

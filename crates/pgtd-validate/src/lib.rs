//! Programmatic-trading report validation.
//!
//! - **Field checks**: length, presence (fixed and conditional), multi-value
//!   selections and enumerations
//! - **Identity**: broker code against the filename, client code length,
//!   report date against the submission date
//! - **Figures**: fund and leverage amounts, leverage ratio, fund-source
//!   ratios
//! - **High-frequency accounts**: test report and server location
//! - **Cross-row**: duplicate client codes
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pgtd_validate::{ValidationOptions, Validator};
//!
//! let run = Validator::new(ValidationOptions::default())
//!     .validate_file(Path::new("SH_PGTDRPT_09999_20250805.xlsx"), None);
//! for finding in run.findings() {
//!     println!("{finding}");
//! }
//! ```

pub mod checks;
mod engine;
mod options;
pub mod requirement;
mod run;
mod validator;

pub use engine::{RowEvaluation, evaluate_row};
pub use options::ValidationOptions;
pub use run::ValidationRun;
pub use validator::Validator;

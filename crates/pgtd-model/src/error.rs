//! File-level failures that abort a submission before any row is checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected filename layout, quoted in [`SubmissionError::FilenameFormat`].
pub const FILENAME_PATTERN: &str =
    "SH_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx or SZ_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx";

/// Example of a well-formed filename.
pub const FILENAME_EXAMPLE: &str = "SH_PGTDRPT_09999_20250805.xlsx";

/// Fatal, file-level submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error(
        "Invalid filename format: '{filename}'. Expected format: {pattern} (e.g., {example})",
        pattern = FILENAME_PATTERN,
        example = FILENAME_EXAMPLE
    )]
    FilenameFormat { filename: String },

    #[error("Invalid date in filename: {date}. Expected format: YYYYMMDD")]
    InvalidDate { date: String },

    #[error("Submission date in filename ({date}) cannot be in the future")]
    FutureDate { date: String },

    #[error("Unknown exchange code: {tag}")]
    UnknownVariant { tag: String },

    #[error("File not found")]
    FileNotFound { path: String },

    #[error("Only Excel files (.xlsx) are supported")]
    UnsupportedFileType { path: String },

    #[error(
        "Could not find header row with '{anchor}'. Please ensure the Excel file contains the correct header row."
    )]
    HeaderNotFound { anchor: String },

    #[error("Error reading Excel file: {reason}")]
    WorkbookRead { reason: String },

    #[error("No data rows found")]
    EmptyDataset,
}

impl SubmissionError {
    /// True for failures caused by the filename rather than the file content.
    pub fn is_filename_error(&self) -> bool {
        matches!(
            self,
            Self::FilenameFormat { .. }
                | Self::InvalidDate { .. }
                | Self::FutureDate { .. }
                | Self::UnknownVariant { .. }
        )
    }

    /// Subject shown in place of a field name for file-level findings.
    pub fn subject(&self) -> &'static str {
        if self.is_filename_error() {
            "Filename"
        } else {
            "File"
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmissionError>;

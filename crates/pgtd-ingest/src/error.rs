//! Error types for submission intake.

use std::path::PathBuf;

use pgtd_model::SubmissionError;
use thiserror::Error;

/// Errors that can occur while reading a submission file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Submission file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata or contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not `.xlsx`.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType { path: PathBuf },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Workbook Errors ===
    /// Workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheet.
    #[error("workbook has no worksheet: {path}")]
    NoWorksheet { path: PathBuf },

    /// No cell in the scanned area contains the header anchor.
    #[error("could not find header row containing '{anchor}' in {path}")]
    HeaderNotFound { path: PathBuf, anchor: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

impl From<IngestError> for SubmissionError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::FileNotFound { path } => SubmissionError::FileNotFound {
                path: path.display().to_string(),
            },
            IngestError::UnsupportedFileType { path } => SubmissionError::UnsupportedFileType {
                path: path.display().to_string(),
            },
            IngestError::HeaderNotFound { anchor, .. } => SubmissionError::HeaderNotFound { anchor },
            IngestError::Workbook { message, .. } => SubmissionError::WorkbookRead { reason: message },
            other @ (IngestError::FileRead { .. }
            | IngestError::FileTooLarge { .. }
            | IngestError::NoWorksheet { .. }) => SubmissionError::WorkbookRead {
                reason: other.to_string(),
            },
        }
    }
}

/// Result type for intake operations.
pub type Result<T> = std::result::Result<T, IngestError>;

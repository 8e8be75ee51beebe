use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Validation findings are never errors here; they travel in the response
/// document. These variants cover uploads the validator never sees.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("No file selected")]
    NoFileSelected,

    #[error("Only Excel files (.xlsx) are supported")]
    UnsupportedFileType,

    /// The multipart body could not be read (malformed or over the limit).
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    /// The validation task failed outside the validator's own reporting.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NoFileUploaded => "NO_FILE_UPLOADED",
            AppError::NoFileSelected => "NO_FILE_SELECTED",
            AppError::UnsupportedFileType => "UNSUPPORTED_FILE_TYPE",
            AppError::Multipart(_) => "BAD_UPLOAD",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoFileUploaded | AppError::NoFileSelected | AppError::UnsupportedFileType => {
                StatusCode::BAD_REQUEST
            }
            AppError::Multipart(err) => err.status(),
            AppError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Multipart(err) => err.body_text(),
            other => other.to_string(),
        };
        if status.is_server_error() {
            tracing::error!(error = %message, "validation request failed");
        } else {
            tracing::debug!(code = self.code(), error = %message, "rejected upload");
        }

        let body = json!({
            "error": message,
            "code": self.code(),
        });

        (status, axum::Json(body)).into_response()
    }
}

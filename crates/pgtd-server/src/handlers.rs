//! Route handlers.

use std::io::Write;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::Html;
use serde::Serialize;

use pgtd_report::ValidationResponse;
use pgtd_validate::Validator;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the workbook.
pub const UPLOAD_FIELD: &str = "file";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub message: &'static str,
    pub template_file: &'static str,
}

/// GET /download-template
pub async fn download_template() -> Json<TemplateInfo> {
    Json(TemplateInfo {
        message: "Please download the template from the official SSE website",
        template_file: "SSETemplate.xlsx",
    })
}

/// POST /validate
///
/// Accepts a multipart upload with a `file` field, validates it under the
/// uploaded filename and returns the full response document. The workbook is
/// written to a temporary file that is removed before the response is sent.
pub async fn validate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ValidationResponse>> {
    let (filename, data) = read_upload(&mut multipart).await?;
    tracing::info!(filename = %filename, bytes = data.len(), "received upload");

    let validator = Arc::clone(&state.validator);
    let response = tokio::task::spawn_blocking(move || validate_bytes(&validator, &filename, &data))
        .await
        .map_err(|err| AppError::Validation(err.to_string()))?
        .map_err(|err| AppError::Validation(err.to_string()))?;

    tracing::info!(
        is_valid = response.is_valid,
        errors = response.summary.total_errors,
        warnings = response.summary.total_warnings,
        "validated upload"
    );
    Ok(Json(response))
}

/// Pull the upload field out of the form, skipping any other fields.
async fn read_upload(multipart: &mut Multipart) -> AppResult<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = base_name(field.file_name().unwrap_or_default()).to_string();
        if filename.is_empty() {
            return Err(AppError::NoFileSelected);
        }
        if !has_workbook_extension(&filename) {
            return Err(AppError::UnsupportedFileType);
        }
        let data = field.bytes().await?;
        return Ok((filename, data));
    }
    Err(AppError::NoFileUploaded)
}

fn validate_bytes(
    validator: &Validator,
    filename: &str,
    data: &[u8],
) -> std::io::Result<ValidationResponse> {
    let mut file = tempfile::Builder::new()
        .prefix("pgtd-upload-")
        .suffix(".xlsx")
        .tempfile()?;
    file.write_all(data)?;
    file.flush()?;

    let run = validator.validate_file(file.path(), Some(filename));
    Ok(ValidationResponse::from_run(&run))
}

/// Browsers may send a client-side path; only the final component names the
/// submission.
fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim()
}

fn has_workbook_extension(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".xlsx")
}

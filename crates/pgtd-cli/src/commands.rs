use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, trace};

use pgtd_report::write_findings_csv;
use pgtd_validate::{ValidationOptions, ValidationRun, Validator};

use crate::logging::redact_value;

/// Inputs of the `validate` command.
#[derive(Debug, Clone, Default)]
pub struct ValidateRequest {
    pub path: PathBuf,
    /// Overrides today's date for the future-submission check.
    pub reference_date: Option<NaiveDate>,
    /// Also export the findings as CSV to this path.
    pub findings_csv: Option<PathBuf>,
}

/// Validate one workbook.
///
/// Validation problems are part of the returned run; `Err` is reserved for
/// failures of the command itself, such as an unwritable CSV path.
pub fn run_validate(request: &ValidateRequest) -> Result<ValidationRun> {
    let mut options = ValidationOptions::new();
    if let Some(date) = request.reference_date {
        options = options.with_reference_date(date);
    }
    let run = Validator::new(options).validate_file(&request.path, None);

    for finding in run.findings() {
        debug!(
            row = finding.row,
            column = finding.field.column,
            code = finding.code(),
            severity = %finding.severity(),
            "finding"
        );
        trace!(
            row = finding.row,
            account = redact_value(&finding.account_name),
            client_code = redact_value(&finding.client_code),
            value = redact_value(&finding.value),
            "finding identity"
        );
    }

    if let Some(path) = &request.findings_csv {
        write_findings_csv(path, run.findings())
            .with_context(|| format!("export findings to {}", path.display()))?;
        info!(
            path = %path.display(),
            findings = run.findings().len(),
            "wrote findings csv"
        );
    }
    Ok(run)
}

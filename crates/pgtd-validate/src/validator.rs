//! Validation entry points.

use std::path::Path;

use pgtd_ingest::{RowSource, WorkbookSource, check_extension, resolve_context};
use pgtd_model::SubmissionError;
use pgtd_standards::field_table;

use crate::engine::evaluate_row;
use crate::options::ValidationOptions;
use crate::run::ValidationRun;

/// Validates submissions. Holds only options; every call returns a fresh
/// [`ValidationRun`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Validate a workbook on disk.
    ///
    /// `original_filename` replaces the path's own name for context
    /// resolution, for uploads stored under a temporary name.
    pub fn validate_file(&self, path: &Path, original_filename: Option<&str>) -> ValidationRun {
        let shown = path.display().to_string();
        let _span = tracing::info_span!("submission", file = %shown).entered();

        if !path.exists() {
            return ValidationRun::failed(
                None,
                SubmissionError::FileNotFound {
                    path: shown.clone(),
                },
                shown,
            );
        }
        if let Err(err) = check_extension(path) {
            return ValidationRun::failed(None, err.into(), shown);
        }

        let own_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filename = original_filename.unwrap_or(&own_name);

        let source = WorkbookSource::new(path, self.options.reader.clone());
        self.validate_source(filename, &source)
    }

    /// Validate rows from any source, using `filename` for context
    /// resolution.
    pub fn validate_source(&self, filename: &str, source: &dyn RowSource) -> ValidationRun {
        let context = match resolve_context(filename, self.options.today()) {
            Ok(context) => context,
            Err(err) => return ValidationRun::failed(None, err, filename),
        };
        let table = field_table(context.variant);

        let sheet = match source.read_rows(context.variant) {
            Ok(sheet) => sheet,
            Err(err) => return ValidationRun::failed(Some(context), err.into(), source.describe()),
        };
        if sheet.is_empty() {
            return ValidationRun::failed(
                Some(context),
                SubmissionError::EmptyDataset,
                source.describe(),
            );
        }

        let mut run = ValidationRun::new(context.clone());
        for (offset, raw) in sheet.rows.iter().enumerate() {
            let evaluation = evaluate_row(offset + 1, raw, &context, table);
            run.commit(table, evaluation);
        }

        tracing::info!(
            variant = %context.variant,
            issuer = %context.issuer_id,
            rows = run.total_rows(),
            valid_rows = run.valid_rows(),
            errors = run.error_count(),
            warnings = run.warning_count(),
            "validation complete"
        );
        run
    }
}

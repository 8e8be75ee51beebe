//! Submission context from the filename.
//!
//! Filenames follow `<TAG>_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx`, where the tag
//! selects the exchange variant, the firm id is the filing participant's
//! five-digit broker code and the date is the submission date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use pgtd_model::{Result, RuleVariant, SubmissionContext, SubmissionError, parse_compact_date};

/// Tag and extension match case-insensitively; digits are ASCII only.
static FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?i:SH|SZ))_PGTDRPT_([0-9]{5})_([0-9]{8})\.(?i:xlsx)$")
        .expect("Invalid submission filename regex")
});

/// Resolve the submission context from `filename`, treating `today` as the
/// latest acceptable submission date.
pub fn resolve_context(filename: &str, today: NaiveDate) -> Result<SubmissionContext> {
    let captures =
        FILENAME_REGEX
            .captures(filename)
            .ok_or_else(|| SubmissionError::FilenameFormat {
                filename: filename.to_string(),
            })?;

    let tag = &captures[1];
    let issuer_id = &captures[2];
    let date = &captures[3];

    let variant = RuleVariant::from_tag(tag).ok_or_else(|| SubmissionError::UnknownVariant {
        tag: tag.to_string(),
    })?;

    let submission_date = parse_compact_date(date).ok_or_else(|| SubmissionError::InvalidDate {
        date: date.to_string(),
    })?;

    if submission_date > today {
        return Err(SubmissionError::FutureDate {
            date: date.to_string(),
        });
    }

    tracing::debug!(%variant, issuer_id, %submission_date, "resolved submission context");
    Ok(SubmissionContext::new(variant, submission_date, issuer_id))
}

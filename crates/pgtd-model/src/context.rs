use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::variant::RuleVariant;

/// Submission facts derived from the filename, fixed for the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionContext {
    pub variant: RuleVariant,
    pub submission_date: NaiveDate,
    /// Five-digit broker code of the filing participant.
    pub issuer_id: String,
}

impl SubmissionContext {
    pub fn new(variant: RuleVariant, submission_date: NaiveDate, issuer_id: impl Into<String>) -> Self {
        Self {
            variant,
            submission_date,
            issuer_id: issuer_id.into(),
        }
    }

    /// Submission date in the compact `YYYYMMDD` form used by filenames.
    pub fn submission_date_compact(&self) -> String {
        self.submission_date.format("%Y%m%d").to_string()
    }
}

/// Parse an 8-digit `YYYYMMDD` string into a calendar date.
///
/// Returns `None` unless the input is exactly eight ASCII digits naming a
/// real date.
pub fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

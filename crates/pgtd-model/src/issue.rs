//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Severity, category
//! and message text are derived from the variant.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SubmissionError;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Invalidates the row and the submission
    Error,
    /// Should review; never invalidates
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of issues for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    File,
    Presence,
    Limit,
    Terminology,
    Format,
    Consistency,
    CrossReference,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::File => "File",
            Category::Presence => "Presence",
            Category::Limit => "Limit",
            Category::Terminology => "Terminology",
            Category::Format => "Format",
            Category::Consistency => "Consistency",
            Category::CrossReference => "Cross-reference",
        }
    }
}

/// Constraint broken by a leverage ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioBound {
    /// Ratio below 100%.
    AtLeastHundred,
    /// No leveraged funds, but ratio is not exactly 100%.
    ExactlyHundred,
    /// Leveraged funds declared, but ratio is not above 100%.
    AboveHundred,
}

/// Constraint broken by a leverage fund size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeBound {
    ZeroWithoutLeverage,
    PositiveWithLeverage,
    ExceedsFundSize { fund_size: String },
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // File-level
    /// Fatal condition; no rows were checked
    File { error: SubmissionError },

    // Per-field checks
    RequiredField,
    LengthExceeded { max_length: usize },
    /// Value outside the enumeration; `invalid` names the offending part of a
    /// multi-value selection
    EnumViolation {
        invalid: Option<String>,
        allowed: Vec<String>,
    },
    MultiValueDuplicate,
    MultiValueCountExceeded { max_count: usize },
    MultiValueWhitespace,

    // Identity checks
    IssuerCodeFormat,
    IssuerCodeMismatch { expected: String },
    ClientCodeLength,
    DateFormat,
    InvalidReportDate,
    DateAfterSubmission { submission_date: String },

    // Numeric checks
    NumericFormat,
    NegativeValue,
    DecimalPrecision,
    LeverageRatioRange { bound: RatioBound },
    LeverageSizeConsistency { bound: SizeBound },

    // Fund-source ratio
    FundRatioSyntax,
    FundRatioMissingSource { source: String },
    FundRatioSum { total: f64 },

    // High-frequency trading
    HighFrequencyUploadRequired,
    HighFrequencyServerLocationMissing,
    HighFrequencyServerLocationMismatch { expected: String },

    // Cross-row
    DuplicateClientCode { first_row: usize },
}

impl Issue {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::File { error } => match error {
                SubmissionError::FilenameFormat { .. } => "FILENAME_FORMAT",
                SubmissionError::InvalidDate { .. } => "INVALID_SUBMISSION_DATE",
                SubmissionError::FutureDate { .. } => "FUTURE_SUBMISSION_DATE",
                SubmissionError::UnknownVariant { .. } => "UNKNOWN_VARIANT",
                SubmissionError::FileNotFound { .. } => "FILE_NOT_FOUND",
                SubmissionError::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
                SubmissionError::HeaderNotFound { .. } => "HEADER_NOT_FOUND",
                SubmissionError::WorkbookRead { .. } => "WORKBOOK_READ",
                SubmissionError::EmptyDataset => "EMPTY_DATASET",
            },
            Issue::RequiredField => "REQUIRED_FIELD",
            Issue::LengthExceeded { .. } => "LENGTH_EXCEEDED",
            Issue::EnumViolation { .. } => "ENUM_VIOLATION",
            Issue::MultiValueDuplicate => "MULTI_VALUE_DUPLICATE",
            Issue::MultiValueCountExceeded { .. } => "MULTI_VALUE_COUNT_EXCEEDED",
            Issue::MultiValueWhitespace => "MULTI_VALUE_WHITESPACE",
            Issue::IssuerCodeFormat => "ISSUER_CODE_FORMAT",
            Issue::IssuerCodeMismatch { .. } => "ISSUER_CODE_MISMATCH",
            Issue::ClientCodeLength => "CLIENT_CODE_LENGTH",
            Issue::DateFormat => "DATE_FORMAT",
            Issue::InvalidReportDate => "INVALID_REPORT_DATE",
            Issue::DateAfterSubmission { .. } => "DATE_AFTER_SUBMISSION",
            Issue::NumericFormat => "NUMERIC_FORMAT",
            Issue::NegativeValue => "NEGATIVE_VALUE",
            Issue::DecimalPrecision => "DECIMAL_PRECISION",
            Issue::LeverageRatioRange { .. } => "LEVERAGE_RATIO_RANGE",
            Issue::LeverageSizeConsistency { .. } => "LEVERAGE_SIZE_CONSISTENCY",
            Issue::FundRatioSyntax => "FUND_RATIO_SYNTAX",
            Issue::FundRatioMissingSource { .. } => "FUND_RATIO_MISSING_SOURCE",
            Issue::FundRatioSum { .. } => "FUND_RATIO_SUM",
            Issue::HighFrequencyUploadRequired => "HIGH_FREQUENCY_UPLOAD_REQUIRED",
            Issue::HighFrequencyServerLocationMissing => "HIGH_FREQUENCY_SERVER_LOCATION_MISSING",
            Issue::HighFrequencyServerLocationMismatch { .. } => {
                "HIGH_FREQUENCY_SERVER_LOCATION_MISMATCH"
            }
            Issue::DuplicateClientCode { .. } => "DUPLICATE_CLIENT_CODE",
        }
    }

    /// Severity for this issue type.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::HighFrequencyServerLocationMissing
            | Issue::HighFrequencyServerLocationMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Category for this issue type.
    pub fn category(&self) -> Category {
        match self {
            Issue::File { .. } => Category::File,
            Issue::RequiredField => Category::Presence,
            Issue::LengthExceeded { .. } | Issue::MultiValueCountExceeded { .. } => Category::Limit,
            Issue::EnumViolation { .. } => Category::Terminology,
            Issue::MultiValueDuplicate
            | Issue::MultiValueWhitespace
            | Issue::IssuerCodeFormat
            | Issue::ClientCodeLength
            | Issue::DateFormat
            | Issue::InvalidReportDate
            | Issue::NumericFormat
            | Issue::NegativeValue
            | Issue::DecimalPrecision
            | Issue::FundRatioSyntax => Category::Format,
            Issue::IssuerCodeMismatch { .. }
            | Issue::DateAfterSubmission { .. }
            | Issue::LeverageRatioRange { .. }
            | Issue::LeverageSizeConsistency { .. }
            | Issue::FundRatioMissingSource { .. }
            | Issue::FundRatioSum { .. }
            | Issue::HighFrequencyUploadRequired
            | Issue::HighFrequencyServerLocationMissing
            | Issue::HighFrequencyServerLocationMismatch { .. } => Category::Consistency,
            Issue::DuplicateClientCode { .. } => Category::CrossReference,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::File { error } => error.to_string(),
            Issue::RequiredField => "Required field".to_string(),
            Issue::LengthExceeded { max_length } => {
                format!("Exceeds maximum length of {}", max_length)
            }
            Issue::EnumViolation {
                invalid: Some(value),
                allowed,
            } => format!(
                "Invalid value '{}'. Must be one of: {}",
                value,
                allowed.join(", ")
            ),
            Issue::EnumViolation {
                invalid: None,
                allowed,
            } => format!("Must be one of: {}", allowed.join(", ")),
            Issue::MultiValueDuplicate => "Duplicate values not allowed".to_string(),
            Issue::MultiValueCountExceeded { max_count } => {
                format!("Maximum {} values allowed", max_count)
            }
            Issue::MultiValueWhitespace => {
                "Values must not contain leading/trailing spaces or line breaks".to_string()
            }
            Issue::IssuerCodeFormat => "Must be exactly 5 digits".to_string(),
            Issue::IssuerCodeMismatch { expected } => {
                format!("Broker code must match filename FIRM_ID ({})", expected)
            }
            Issue::ClientCodeLength => "Must be 3-10 characters".to_string(),
            Issue::DateFormat => "Must be in YYYYMMDD format".to_string(),
            Issue::InvalidReportDate => "Invalid date".to_string(),
            Issue::DateAfterSubmission { submission_date } => format!(
                "Report date cannot be later than submission date ({})",
                submission_date
            ),
            Issue::NumericFormat => "Must be a valid number".to_string(),
            Issue::NegativeValue => "Must be non-negative".to_string(),
            Issue::DecimalPrecision => "Maximum 2 decimal places allowed".to_string(),
            Issue::LeverageRatioRange { bound } => match bound {
                RatioBound::AtLeastHundred => {
                    "Must be >= 100 (leverage ratio cannot be less than 100%)".to_string()
                }
                RatioBound::ExactlyHundred => "Must be 100 when no leverage funds".to_string(),
                RatioBound::AboveHundred => "Must be > 100 when leverage funds exist".to_string(),
            },
            Issue::LeverageSizeConsistency { bound } => match bound {
                SizeBound::ZeroWithoutLeverage => {
                    "Must be 0 when leverage not in fund sources".to_string()
                }
                SizeBound::PositiveWithLeverage => {
                    "Must be > 0 when leverage is in fund sources".to_string()
                }
                SizeBound::ExceedsFundSize { fund_size } => {
                    format!("Cannot exceed total fund size ({})", fund_size)
                }
            },
            Issue::FundRatioSyntax => "Invalid format. Expected: '来源1XX%;来源2XX%'".to_string(),
            Issue::FundRatioMissingSource { source } => {
                format!("Missing ratio for source: {}", source)
            }
            Issue::FundRatioSum { total } => {
                format!("Ratios must sum to 100% (current: {total:.1}%)")
            }
            Issue::HighFrequencyUploadRequired => {
                "High-frequency accounts must upload test report or apply for exemption"
                    .to_string()
            }
            Issue::HighFrequencyServerLocationMissing => {
                "Required for high-frequency trading accounts".to_string()
            }
            Issue::HighFrequencyServerLocationMismatch { expected } => {
                format!("Should be '{}' when applying for exemption", expected)
            }
            Issue::DuplicateClientCode { first_row } => {
                format!("Duplicate client code (first occurrence: row {})", first_row)
            }
        }
    }
}

impl From<SubmissionError> for Issue {
    fn from(error: SubmissionError) -> Self {
        Issue::File { error }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exchange rule set selected from the submission filename.
///
/// Shanghai reports carry 42 columns including the free-text "other"
/// descriptions. Shenzhen reports prepend a sequence-number column and drop
/// those free-text fields, which leaves 38 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleVariant {
    Shanghai,
    Shenzhen,
}

impl RuleVariant {
    pub const ALL: [RuleVariant; 2] = [RuleVariant::Shanghai, RuleVariant::Shenzhen];

    /// Two-letter filename tag.
    pub fn tag(&self) -> &'static str {
        match self {
            RuleVariant::Shanghai => "SH",
            RuleVariant::Shenzhen => "SZ",
        }
    }

    /// Map a filename tag (case-insensitive) to a variant.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "SH" => Some(RuleVariant::Shanghai),
            "SZ" => Some(RuleVariant::Shenzhen),
            _ => None,
        }
    }

    /// Number of data columns in a report of this variant.
    pub fn column_count(&self) -> usize {
        match self {
            RuleVariant::Shanghai => 42,
            RuleVariant::Shenzhen => 38,
        }
    }

    /// Column shift relative to the Shanghai layout.
    pub fn offset(&self) -> usize {
        match self {
            RuleVariant::Shanghai => 0,
            RuleVariant::Shenzhen => 1,
        }
    }

    /// Returns the canonical name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleVariant::Shanghai => "SHANGHAI",
            RuleVariant::Shenzhen => "SHENZHEN",
        }
    }

    /// Exchange label for report headers.
    pub fn exchange_label(&self) -> &'static str {
        match self {
            RuleVariant::Shanghai => "Shanghai Stock Exchange (上海证券交易所)",
            RuleVariant::Shenzhen => "Shenzhen Stock Exchange (深圳证券交易所)",
        }
    }

    /// Report title lines (English, Chinese).
    pub fn report_title(&self) -> (&'static str, &'static str) {
        match self {
            RuleVariant::Shanghai => (
                "SSE Programmatic Trading Report Validation Results",
                "沪股通投资者程序化交易信息报告表验证结果",
            ),
            RuleVariant::Shenzhen => (
                "SZSE Programmatic Trading Report Validation Results",
                "深股通投资者程序化交易信息报告表验证结果",
            ),
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleVariant {
    type Err = String;

    /// Accepts either the filename tag (`SH`) or the canonical name (`SHANGHAI`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SH" | "SHANGHAI" => Ok(RuleVariant::Shanghai),
            "SZ" | "SHENZHEN" => Ok(RuleVariant::Shenzhen),
            _ => Err(format!("Unknown rule variant: {}", s)),
        }
    }
}

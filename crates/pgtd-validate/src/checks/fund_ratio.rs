//! Fund-source ratio: `来源1XX%;来源2XX%`, one entry per declared source,
//! summing to 100%.

use std::sync::LazyLock;

use regex::Regex;

use pgtd_model::{FieldKey, Finding, Issue};
use pgtd_standards::codelists::split_selection;

use super::{RowContext, is_reported_elsewhere};

static RATIO_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^;]+?)([0-9]+(?:\.[0-9]+)?)\s*%").expect("Invalid fund ratio regex")
});

const SUM_TOLERANCE: f64 = 0.01;

pub fn check(ctx: &RowContext<'_>) -> Option<Finding> {
    let ratio = ctx.value(FieldKey::FundSourceRatio);
    let sources = ctx.value(FieldKey::FundSources);
    let issue = check_ratio(ratio, sources)?;
    ctx.finding(FieldKey::FundSourceRatio, ratio, issue)
}

/// A source name and its percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioEntry {
    pub source: String,
    pub percent: f64,
}

/// Every `<source><number>%` entry in the cell, in order.
pub fn parse_entries(value: &str) -> Vec<RatioEntry> {
    RATIO_ENTRY_REGEX
        .captures_iter(value)
        .filter_map(|caps| {
            let percent = caps[2].parse::<f64>().ok()?;
            Some(RatioEntry {
                source: caps[1].trim().to_string(),
                percent,
            })
        })
        .collect()
}

pub fn check_ratio(ratio: &str, sources: &str) -> Option<Issue> {
    if ratio.is_empty() || is_reported_elsewhere(ratio) {
        return None;
    }
    if sources.is_empty() || is_reported_elsewhere(sources) {
        return None;
    }

    let entries = parse_entries(ratio);
    if entries.is_empty() {
        return Some(Issue::FundRatioSyntax);
    }

    if let Some(missing) = split_selection(sources)
        .into_iter()
        .find(|source| !entries.iter().any(|entry| entry.source == *source))
    {
        return Some(Issue::FundRatioMissingSource {
            source: missing.to_string(),
        });
    }

    let total: f64 = entries.iter().map(|entry| entry.percent).sum();
    if (total - 100.0).abs() > SUM_TOLERANCE {
        return Some(Issue::FundRatioSum { total });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sources_sum_to_hundred() {
        assert_eq!(check_ratio("自有资金60%;募集资金40%", "自有资金;募集资金"), None);
        assert_eq!(check_ratio("自有资金 60.5 %; 募集资金39.5%", "自有资金;募集资金"), None);
    }

    #[test]
    fn sum_off_by_more_than_tolerance() {
        assert_eq!(
            check_ratio("自有资金60%;募集资金30%", "自有资金;募集资金"),
            Some(Issue::FundRatioSum { total: 90.0 })
        );
    }

    #[test]
    fn missing_source() {
        assert_eq!(
            check_ratio("自有资金100%", "自有资金;募集资金"),
            Some(Issue::FundRatioMissingSource {
                source: "募集资金".to_string()
            })
        );
    }

    #[test]
    fn unparseable_ratio() {
        assert_eq!(
            check_ratio("全部自有", "自有资金"),
            Some(Issue::FundRatioSyntax)
        );
    }

    #[test]
    fn skipped_when_either_side_absent() {
        assert_eq!(check_ratio("", "自有资金"), None);
        assert_eq!(check_ratio("自有资金50%", ""), None);
        assert_eq!(check_ratio("已在其他联交所参与者报告", "自有资金"), None);
    }

    #[test]
    fn entries_are_trimmed() {
        assert_eq!(
            parse_entries(" 自有资金 80%;募集资金20%"),
            vec![
                RatioEntry {
                    source: "自有资金".to_string(),
                    percent: 80.0
                },
                RatioEntry {
                    source: "募集资金".to_string(),
                    percent: 20.0
                },
            ]
        );
    }
}

//! Fund and leverage figures.

use pgtd_model::{FieldKey, Finding, Issue, RatioBound, SizeBound};
use pgtd_standards::codelists::{LEVERAGE_FUNDS, selection_contains};

use super::{RowContext, is_reported_elsewhere};

const MAX_DECIMALS: usize = 2;

pub fn check(ctx: &RowContext<'_>) -> Vec<Finding> {
    let has_leverage = selection_contains(ctx.value(FieldKey::FundSources), LEVERAGE_FUNDS);

    let mut findings: Vec<Finding> = [FieldKey::FundSize, FieldKey::LeverageSize]
        .into_iter()
        .filter_map(|key| {
            let value = ctx.value(key);
            check_amount(value).and_then(|issue| ctx.finding(key, value, issue))
        })
        .collect();

    let ratio = ctx.value(FieldKey::LeverageRatio);
    if let Some(issue) = check_leverage_ratio(ratio, has_leverage) {
        findings.extend(ctx.finding(FieldKey::LeverageRatio, ratio, issue));
    }

    let leverage_size = ctx.value(FieldKey::LeverageSize);
    let fund_size = ctx.value(FieldKey::FundSize);
    if let Some(bound) = check_leverage_size(leverage_size, fund_size, has_leverage) {
        findings.extend(ctx.finding(
            FieldKey::LeverageSize,
            leverage_size,
            Issue::LeverageSizeConsistency { bound },
        ));
    }

    findings
}

/// Parse a finite decimal number.
pub fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Non-negative amount with at most two decimals.
pub fn check_amount(value: &str) -> Option<Issue> {
    if value.is_empty() || is_reported_elsewhere(value) {
        return None;
    }
    let Some(number) = parse_number(value) else {
        return Some(Issue::NumericFormat);
    };
    if number < 0.0 {
        return Some(Issue::NegativeValue);
    }
    let decimals = value
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().count());
    if decimals > MAX_DECIMALS {
        return Some(Issue::DecimalPrecision);
    }
    None
}

/// Leverage ratio in percent: at least 100, exactly 100 without leveraged
/// funds, above 100 with them.
pub fn check_leverage_ratio(value: &str, has_leverage: bool) -> Option<Issue> {
    if value.is_empty() || is_reported_elsewhere(value) {
        return None;
    }
    let Some(ratio) = parse_number(value) else {
        return Some(Issue::NumericFormat);
    };
    let bound = if ratio < 100.0 {
        RatioBound::AtLeastHundred
    } else if !has_leverage && ratio != 100.0 {
        RatioBound::ExactlyHundred
    } else if has_leverage && ratio <= 100.0 {
        RatioBound::AboveHundred
    } else {
        return None;
    };
    Some(Issue::LeverageRatioRange { bound })
}

/// Leveraged amount against the declared sources and the total fund size.
///
/// Empty amounts count as zero; unparseable amounts are left to
/// [`check_amount`].
pub fn check_leverage_size(leverage_size: &str, fund_size: &str, has_leverage: bool) -> Option<SizeBound> {
    if is_reported_elsewhere(leverage_size) || is_reported_elsewhere(fund_size) {
        return None;
    }
    let amount = |value: &str| {
        if value.is_empty() {
            Some(0.0)
        } else {
            parse_number(value)
        }
    };
    let leverage = amount(leverage_size)?;
    let fund = amount(fund_size)?;

    if !has_leverage && leverage != 0.0 {
        Some(SizeBound::ZeroWithoutLeverage)
    } else if has_leverage && leverage <= 0.0 {
        Some(SizeBound::PositiveWithLeverage)
    } else if leverage > fund && fund > 0.0 {
        Some(SizeBound::ExceedsFundSize {
            fund_size: fund_size.to_string(),
        })
    } else {
        None
    }
}

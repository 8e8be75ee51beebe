//! Per-field checks: length, presence, multi-value selections and
//! enumerations.

use std::collections::HashSet;

use pgtd_model::{FieldSpec, Finding, Issue};
use pgtd_standards::codelists::split_selection;

use super::{RowContext, is_reported_elsewhere};
use crate::requirement::is_required;

/// Longest value echoed back in a length finding.
const DISPLAY_LIMIT: usize = 50;

/// Check every field of the row in column order.
pub fn check(ctx: &RowContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for spec in ctx.table {
        let value = ctx.row.get(spec.index);

        if value.chars().count() > spec.max_length {
            findings.push(ctx.scope.finding(
                spec,
                &display_value(value),
                Issue::LengthExceeded {
                    max_length: spec.max_length,
                },
            ));
        }

        if value.is_empty() {
            if is_required(spec, ctx.row) {
                findings.push(ctx.scope.finding(spec, "", Issue::RequiredField));
            }
            continue;
        }

        let issue = if spec.multi_value {
            check_selection(spec, value)
        } else {
            check_enumeration(spec, value)
        };
        if let Some(issue) = issue {
            findings.push(ctx.scope.finding(spec, value, issue));
        }
    }

    findings
}

/// Presence of the identity fields only, for stop-use rows.
pub fn check_identity_presence(ctx: &RowContext<'_>) -> Vec<Finding> {
    pgtd_model::FieldKey::IDENTITY
        .iter()
        .filter(|key| ctx.value(**key).is_empty())
        .filter_map(|key| ctx.finding(*key, "", Issue::RequiredField))
        .collect()
}

/// Multi-value selection checks. Only the first failing check is reported.
pub fn check_selection(spec: &FieldSpec, value: &str) -> Option<Issue> {
    if is_reported_elsewhere(value) {
        return None;
    }
    let parts = split_selection(value);

    let mut seen = HashSet::with_capacity(parts.len());
    if !parts.iter().all(|part| seen.insert(*part)) {
        return Some(Issue::MultiValueDuplicate);
    }

    if let Some(max_count) = spec.max_multi_count
        && parts.len() > max_count
    {
        return Some(Issue::MultiValueCountExceeded { max_count });
    }

    if let Some(allowed) = spec.allowed_values
        && let Some(invalid) = parts
            .iter()
            .find(|part| !allowed.contains(*part) && !is_reported_elsewhere(part))
    {
        return Some(Issue::EnumViolation {
            invalid: Some((*invalid).to_string()),
            allowed: allowed_list(allowed),
        });
    }

    if parts.iter().any(|part| has_bad_whitespace(part)) {
        return Some(Issue::MultiValueWhitespace);
    }

    None
}

/// Single-value enumeration check.
pub fn check_enumeration(spec: &FieldSpec, value: &str) -> Option<Issue> {
    let allowed = spec.allowed_values?;
    if allowed.contains(&value) || is_reported_elsewhere(value) {
        return None;
    }
    Some(Issue::EnumViolation {
        invalid: None,
        allowed: allowed_list(allowed),
    })
}

fn allowed_list(allowed: &[&str]) -> Vec<String> {
    allowed.iter().map(|v| (*v).to_string()).collect()
}

fn has_bad_whitespace(part: &str) -> bool {
    part.contains("  ") || part.contains(['\n', '\r', '\t'])
}

/// Value as echoed in findings, cut to the display limit.
pub fn display_value(value: &str) -> String {
    if value.chars().count() > DISPLAY_LIMIT {
        let head: String = value.chars().take(DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

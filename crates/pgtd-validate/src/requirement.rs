//! Interpreter for conditional requirement rules.

use pgtd_model::{FieldSpec, RequirementRule, Row};
use pgtd_standards::codelists::{
    EXEMPT, NO, YES, is_first_or_change, is_high_frequency, selection_contains,
};

/// True when `spec` must be filled in `row`.
pub fn is_required(spec: &FieldSpec, row: &Row) -> bool {
    spec.always_required
        || spec
            .requirement
            .as_ref()
            .is_some_and(|rule| evaluate(rule, row))
}

/// Evaluate a requirement rule against the current row only.
pub fn evaluate(rule: &RequirementRule, row: &Row) -> bool {
    match rule {
        RequirementRule::ReportTypeIn { report_type } => is_first_or_change(row.get(*report_type)),
        RequirementRule::OptionSelected { field, option } => {
            selection_contains(row.get(*field), option)
        }
        RequirementRule::ValueEquals { field, value } => row.get(*field) == *value,
        RequirementRule::ValuePresent { field } => !row.get(*field).is_empty(),
        RequirementRule::HighFrequencyUnexempt {
            report_type,
            order_rate,
            daily_orders,
            upload,
        } => {
            let answer = row.get(*upload);
            high_frequency_filing(row, *report_type, *order_rate, *daily_orders)
                && answer != EXEMPT
                && answer != YES
        }
        RequirementRule::HighFrequencyWithoutUpload {
            report_type,
            order_rate,
            daily_orders,
            upload,
        } => {
            high_frequency_filing(row, *report_type, *order_rate, *daily_orders)
                && row.get(*upload) == NO
        }
    }
}

fn high_frequency_filing(row: &Row, report_type: usize, order_rate: usize, daily_orders: usize) -> bool {
    is_first_or_change(row.get(report_type))
        && is_high_frequency(row.get(order_rate), row.get(daily_orders))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::normalize(cells, 6)
    }

    const HF_UNEXEMPT: RequirementRule = RequirementRule::HighFrequencyUnexempt {
        report_type: 0,
        order_rate: 1,
        daily_orders: 2,
        upload: 3,
    };

    const HF_WITHOUT_UPLOAD: RequirementRule = RequirementRule::HighFrequencyWithoutUpload {
        report_type: 0,
        order_rate: 1,
        daily_orders: 2,
        upload: 3,
    };

    #[test]
    fn report_type_in() {
        let rule = RequirementRule::ReportTypeIn { report_type: 0 };
        assert!(evaluate(&rule, &row(&["首次"])));
        assert!(evaluate(&rule, &row(&["变更"])));
        assert!(!evaluate(&rule, &row(&["停止使用"])));
        assert!(!evaluate(&rule, &row(&[""])));
    }

    #[test]
    fn option_selected_is_part_wise() {
        let rule = RequirementRule::OptionSelected {
            field: 1,
            option: "其他",
        };
        assert!(evaluate(&rule, &row(&["", "自有资金;其他"])));
        assert!(!evaluate(&rule, &row(&["", "自有资金"])));
        assert!(!evaluate(&rule, &row(&["", "其他资金"])));
    }

    #[test]
    fn value_rules() {
        let equals = RequirementRule::ValueEquals {
            field: 0,
            value: "是",
        };
        assert!(evaluate(&equals, &row(&["是"])));
        assert!(!evaluate(&equals, &row(&["否"])));

        let present = RequirementRule::ValuePresent { field: 2 };
        assert!(evaluate(&present, &row(&["", "", "x"])));
        assert!(!evaluate(&present, &row(&["", "", "  "])));
    }

    #[test]
    fn high_frequency_unexempt() {
        assert!(evaluate(&HF_UNEXEMPT, &row(&["首次", "500笔及以上", "", ""])));
        assert!(evaluate(&HF_UNEXEMPT, &row(&["变更", "", "25000笔及以上", "否"])));
        assert!(!evaluate(&HF_UNEXEMPT, &row(&["首次", "500笔及以上", "", "是"])));
        assert!(!evaluate(&HF_UNEXEMPT, &row(&["首次", "500笔及以上", "", "已申请豁免"])));
        assert!(!evaluate(&HF_UNEXEMPT, &row(&["停止使用", "500笔及以上", "", ""])));
        assert!(!evaluate(&HF_UNEXEMPT, &row(&["首次", "100笔以下", "10000笔以下", ""])));
    }

    #[test]
    fn high_frequency_without_upload() {
        assert!(evaluate(&HF_WITHOUT_UPLOAD, &row(&["首次", "300笔至499笔", "", "否"])));
        assert!(!evaluate(&HF_WITHOUT_UPLOAD, &row(&["首次", "300笔至499笔", "", "是"])));
        assert!(!evaluate(&HF_WITHOUT_UPLOAD, &row(&["首次", "100笔以下", "", "否"])));
    }
}

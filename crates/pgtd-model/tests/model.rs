use chrono::NaiveDate;

use pgtd_model::{
    FieldKey, FieldRef, FieldSpec, Finding, Issue, RatioBound, RequirementRule, RowOutcome,
    RowScope, RuleVariant, Severity, SizeBound, SubmissionContext, SubmissionError,
};

fn account_name_spec() -> FieldSpec {
    FieldSpec {
        index: 2,
        key: FieldKey::AccountName,
        local_name: "账户名称",
        max_length: 200,
        always_required: true,
        requirement: None,
        allowed_values: None,
        multi_value: false,
        max_multi_count: None,
    }
}

#[test]
fn variant_tags_round_trip() {
    for variant in RuleVariant::ALL {
        assert_eq!(RuleVariant::from_tag(variant.tag()), Some(variant));
        assert_eq!(variant.as_str().parse::<RuleVariant>(), Ok(variant));
    }
    assert_eq!(RuleVariant::from_tag("sz"), Some(RuleVariant::Shenzhen));
    assert_eq!(RuleVariant::from_tag("HK"), None);
}

#[test]
fn variant_layout() {
    assert_eq!(RuleVariant::Shanghai.column_count(), 42);
    assert_eq!(RuleVariant::Shenzhen.column_count(), 38);
    assert_eq!(RuleVariant::Shanghai.offset(), 0);
    assert_eq!(RuleVariant::Shenzhen.offset(), 1);
    assert_eq!(
        serde_json::to_string(&RuleVariant::Shenzhen).unwrap(),
        "\"SHENZHEN\""
    );
}

#[test]
fn context_formats_compact_date() {
    let ctx = SubmissionContext::new(
        RuleVariant::Shanghai,
        NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
        "09999",
    );
    assert_eq!(ctx.submission_date_compact(), "20250805");
}

#[test]
fn field_key_parse() {
    assert_eq!("qfii_code".parse::<FieldKey>(), Ok(FieldKey::QfiiCode));
    assert!("nope".parse::<FieldKey>().is_err());
    assert_eq!(FieldKey::HftServerLocation.to_string(), "hft_server_location");
}

#[test]
fn requirement_dependencies() {
    let rule = RequirementRule::HighFrequencyUnexempt {
        report_type: 7,
        order_rate: 31,
        daily_orders: 32,
        upload: 40,
    };
    assert_eq!(rule.dependencies(), vec![7, 31, 32, 40]);
    assert_eq!(
        RequirementRule::OptionSelected {
            field: 11,
            option: "其他"
        }
        .dependencies(),
        vec![11]
    );
}

#[test]
fn only_server_location_findings_are_warnings() {
    assert_eq!(
        Issue::HighFrequencyServerLocationMissing.severity(),
        Severity::Warning
    );
    assert_eq!(
        Issue::HighFrequencyServerLocationMismatch {
            expected: "已申请豁免".to_string()
        }
        .severity(),
        Severity::Warning
    );
    assert_eq!(Issue::RequiredField.severity(), Severity::Error);
    assert_eq!(
        Issue::HighFrequencyUploadRequired.severity(),
        Severity::Error
    );
}

#[test]
fn issue_messages() {
    assert_eq!(
        Issue::LengthExceeded { max_length: 10 }.message(),
        "Exceeds maximum length of 10"
    );
    assert_eq!(
        Issue::EnumViolation {
            invalid: None,
            allowed: vec!["是".to_string(), "否".to_string()],
        }
        .message(),
        "Must be one of: 是, 否"
    );
    assert_eq!(
        Issue::EnumViolation {
            invalid: Some("债券".to_string()),
            allowed: vec!["股票".to_string(), "基金".to_string()],
        }
        .message(),
        "Invalid value '债券'. Must be one of: 股票, 基金"
    );
    assert_eq!(
        Issue::LeverageRatioRange {
            bound: RatioBound::AboveHundred
        }
        .message(),
        "Must be > 100 when leverage funds exist"
    );
    assert_eq!(
        Issue::LeverageSizeConsistency {
            bound: SizeBound::ExceedsFundSize {
                fund_size: "1000".to_string()
            }
        }
        .message(),
        "Cannot exceed total fund size (1000)"
    );
    assert_eq!(
        Issue::FundRatioSum { total: 90.0 }.message(),
        "Ratios must sum to 100% (current: 90.0%)"
    );
    assert_eq!(
        Issue::FundRatioSum { total: 33.3 + 33.3 + 33.3 }.message(),
        "Ratios must sum to 100% (current: 99.9%)"
    );
    assert_eq!(
        Issue::DuplicateClientCode { first_row: 1 }.message(),
        "Duplicate client code (first occurrence: row 1)"
    );
}

#[test]
fn severity_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"ERROR\"");
    assert_eq!(Severity::parse("warn"), Some(Severity::Warning));
    assert_eq!(Severity::parse("info"), None);
}

#[test]
fn row_finding_display() {
    let scope = RowScope::new(3, "Alpha Fund", "C001");
    let finding = scope.finding(&account_name_spec(), "", Issue::RequiredField);
    assert_eq!(
        finding.to_string(),
        "[ERROR] Row 3 [Account: Alpha Fund, BCAN: C001], Column 3 '账户名称' (account_name): Required field (value: '')"
    );
}

#[test]
fn row_finding_display_without_identity() {
    let scope = RowScope::new(1, "", "");
    let finding = scope.finding(&account_name_spec(), "", Issue::RequiredField);
    assert_eq!(
        finding.to_string(),
        "[ERROR] Row 1, Column 3 '账户名称' (account_name): Required field (value: '')"
    );
}

#[test]
fn file_level_finding() {
    let finding = Finding::file_level(
        SubmissionError::FilenameFormat {
            filename: "report.xlsx".to_string(),
        },
        "report.xlsx",
    );
    assert_eq!(finding.row, 0);
    assert_eq!(finding.field, FieldRef::file_level("Filename"));
    assert_eq!(finding.code(), "FILENAME_FORMAT");
    assert!(finding.to_string().starts_with(
        "[ERROR] Row 0, 'Filename': Invalid filename format: 'report.xlsx'. Expected format: SH_PGTDRPT_<FIRM_ID>_<YYYYMMDD>.xlsx"
    ));

    let empty = Finding::file_level(SubmissionError::EmptyDataset, "/tmp/x.xlsx");
    assert_eq!(empty.field.local_name, "File");
    assert_eq!(empty.message(), "No data rows found");
}

#[test]
fn row_outcome_validity() {
    let outcome = RowOutcome {
        row: 1,
        account_name: String::new(),
        client_code: "C1".to_string(),
        error_count: 0,
        warning_count: 2,
    };
    assert!(outcome.is_valid());
}

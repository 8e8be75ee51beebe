mod common;

use common::{RowBuilder, codes, on_field};
use pgtd_model::{FieldKey, Issue, RatioBound, RuleVariant, Severity};

#[test]
fn valid_rows_have_no_findings() {
    for variant in RuleVariant::ALL {
        let eval = RowBuilder::valid(variant).evaluate();
        assert!(eval.findings.is_empty(), "{variant}: {:#?}", eval.findings);
        assert_eq!(eval.account_name(), "Alpha Fund");
        assert_eq!(eval.client_code(), "C001");
    }
}

#[test]
fn conditional_field_required_for_first_time_filing() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::IdNumber, "")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["REQUIRED_FIELD"]);
    let finding = &eval.findings[0];
    assert_eq!(finding.field.canonical_name, "id_number");
    assert_eq!(finding.field.local_name, "证件号码");
    assert_eq!(finding.field.column, 4);
    assert_eq!(finding.account_name, "Alpha Fund");
    assert_eq!(finding.client_code, "C001");
}

#[test]
fn length_exceeded_shows_truncated_value() {
    let long = "名".repeat(201);
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::AccountName, &long)
        .evaluate();
    let findings = on_field(&eval.findings, FieldKey::AccountName);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message(), "Exceeds maximum length of 200");
    assert_eq!(findings[0].value, format!("{}...", "名".repeat(50)));
}

#[test]
fn single_value_enumeration() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::IsQuantitative, "Y")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["ENUM_VIOLATION"]);
    assert_eq!(eval.findings[0].message(), "Must be one of: 是, 否");
}

#[test]
fn reported_elsewhere_accepted_for_enumerations_and_amounts() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::MaxOrderRate, "已在其他联交所参与者报告")
        .set(FieldKey::FundSize, "已在其他联交所参与者报告")
        .set(FieldKey::LeverageRatio, "已在其他联交所参与者报告")
        .evaluate();
    assert!(eval.findings.is_empty(), "{:#?}", eval.findings);
}

#[test]
fn duplicate_selection() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::TradingProducts, "股票;股票")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["MULTI_VALUE_DUPLICATE"]);
}

#[test]
fn sub_strategy_limited_to_two() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::SubStrategy, "指数增强策略;市场中性策略;多空灵活策略")
        .set(FieldKey::SubStrategyDesc, "Hedged index exposure")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["MULTI_VALUE_COUNT_EXCEEDED"]);
    assert_eq!(eval.findings[0].message(), "Maximum 2 values allowed");
}

#[test]
fn strategy_overview_follows_strategy() {
    let eval = RowBuilder::valid(RuleVariant::Shenzhen)
        .set(FieldKey::IsQuantitative, "是")
        .evaluate();
    let findings = on_field(&eval.findings, FieldKey::MainStrategy);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].issue, Issue::RequiredField);

    let eval = RowBuilder::valid(RuleVariant::Shenzhen)
        .set(FieldKey::IsQuantitative, "是")
        .set(FieldKey::MainStrategy, "市场中性策略")
        .evaluate();
    assert_eq!(
        on_field(&eval.findings, FieldKey::MainStrategyDesc).len(),
        1
    );
}

#[test]
fn leveraged_account() {
    let leveraged = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::FundSources, "自有资金;杠杆资金")
        .set(FieldKey::FundSourceRatio, "自有资金60%;杠杆资金40%")
        .set(FieldKey::LeverageSize, "400")
        .set(FieldKey::LeverageSources, "融资融券")
        .set(FieldKey::LeverageRatio, "150");
    assert!(leveraged.clone().evaluate().findings.is_empty());

    let eval = leveraged
        .clone()
        .set(FieldKey::LeverageSources, "")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["REQUIRED_FIELD"]);

    let eval = leveraged.clone().set(FieldKey::LeverageRatio, "100").evaluate();
    assert_eq!(
        eval.findings[0].issue,
        Issue::LeverageRatioRange {
            bound: RatioBound::AboveHundred
        }
    );

    let eval = leveraged.set(FieldKey::LeverageSize, "1500").evaluate();
    assert_eq!(
        eval.findings[0].message(),
        "Cannot exceed total fund size (1000)"
    );
}

#[test]
fn leverage_size_without_leveraged_funds() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::LeverageSize, "10")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["LEVERAGE_SIZE_CONSISTENCY"]);
    assert_eq!(
        eval.findings[0].message(),
        "Must be 0 when leverage not in fund sources"
    );
}

#[test]
fn negative_and_malformed_amounts() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::FundSize, "-5")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["NEGATIVE_VALUE"]);

    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::FundSize, "1000.123")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["DECIMAL_PRECISION"]);
}

#[test]
fn fund_ratio_cases() {
    let two_sources = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::FundSources, "自有资金;募集资金");

    let eval = two_sources
        .clone()
        .set(FieldKey::FundSourceRatio, "自有资金60%;募集资金40%")
        .evaluate();
    assert!(eval.findings.is_empty());

    let eval = two_sources
        .clone()
        .set(FieldKey::FundSourceRatio, "自有资金60%;募集资金30%")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["FUND_RATIO_SUM"]);
    assert_eq!(
        eval.findings[0].message(),
        "Ratios must sum to 100% (current: 90.0%)"
    );

    let eval = two_sources
        .set(FieldKey::FundSourceRatio, "自有资金100%")
        .evaluate();
    assert_eq!(
        eval.findings[0].message(),
        "Missing ratio for source: 募集资金"
    );
}

#[test]
fn broker_code_checks() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::BrokerCode, "12345")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["ISSUER_CODE_MISMATCH"]);
    assert_eq!(
        eval.findings[0].message(),
        "Broker code must match filename FIRM_ID (09999)"
    );

    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::BrokerCode, "0999A")
        .evaluate();
    assert_eq!(codes(&eval.findings), vec!["ISSUER_CODE_FORMAT"]);
}

#[test]
fn client_code_length() {
    for code in ["AB", "ABCDEFGHIJK"] {
        let eval = RowBuilder::valid(RuleVariant::Shanghai)
            .set(FieldKey::ClientCode, code)
            .evaluate();
        assert!(codes(&eval.findings).contains(&"CLIENT_CODE_LENGTH"), "{code}");
    }
}

#[test]
fn report_date_checks() {
    let cases = [
        ("20250806", "DATE_AFTER_SUBMISSION"),
        ("20250231", "INVALID_REPORT_DATE"),
        ("2025080A", "DATE_FORMAT"),
    ];
    for (date, code) in cases {
        let eval = RowBuilder::valid(RuleVariant::Shanghai)
            .set(FieldKey::ReportDate, date)
            .evaluate();
        assert_eq!(codes(&eval.findings), vec![code], "{date}");
    }

    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::ReportDate, "20250806")
        .evaluate();
    assert_eq!(
        eval.findings[0].message(),
        "Report date cannot be later than submission date (20250805)"
    );

    let same_day = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::ReportDate, "20250805")
        .evaluate();
    assert!(same_day.findings.is_empty());
}

#[test]
fn high_frequency_without_test_report() {
    let eval = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::MaxOrderRate, "500笔及以上")
        .set(FieldKey::UploadTestReport, "否")
        .evaluate();
    assert_eq!(
        codes(&eval.findings),
        vec!["REQUIRED_FIELD", "REQUIRED_FIELD", "HIGH_FREQUENCY_UPLOAD_REQUIRED"]
    );
    assert_eq!(
        on_field(&eval.findings, FieldKey::HftServerLocation).len(),
        1
    );
    assert_eq!(on_field(&eval.findings, FieldKey::QfiiCode).len(), 1);
    assert!(eval.findings.iter().all(|f| f.severity() == Severity::Error));
}

#[test]
fn high_frequency_with_test_report_warns_on_missing_server() {
    let eval = RowBuilder::valid(RuleVariant::Shenzhen)
        .set(FieldKey::MaxDailyOrders, "25000笔及以上")
        .set(FieldKey::UploadTestReport, "是")
        .evaluate();
    assert_eq!(
        codes(&eval.findings),
        vec!["HIGH_FREQUENCY_SERVER_LOCATION_MISSING"]
    );
    assert_eq!(eval.findings[0].severity(), Severity::Warning);
}

#[test]
fn high_frequency_exemption() {
    let exempt = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::MaxOrderRate, "300笔至499笔")
        .set(FieldKey::UploadTestReport, "已申请豁免");
    assert!(exempt.clone().evaluate().findings.is_empty());

    let eval = exempt
        .set(FieldKey::HftServerLocation, "Hong Kong")
        .evaluate();
    assert_eq!(
        codes(&eval.findings),
        vec!["HIGH_FREQUENCY_SERVER_LOCATION_MISMATCH"]
    );
    assert_eq!(
        eval.findings[0].message(),
        "Should be '已申请豁免' when applying for exemption"
    );
}

#[test]
fn stop_use_checks_identity_only() {
    for variant in RuleVariant::ALL {
        let eval = RowBuilder::stop_use(variant).evaluate();
        assert!(eval.findings.is_empty(), "{variant}");

        let eval = RowBuilder::stop_use(variant)
            .set(FieldKey::ClientCode, "")
            .set(FieldKey::BrokerCode, "bad")
            .evaluate();
        assert_eq!(codes(&eval.findings), vec!["REQUIRED_FIELD"]);
        assert_eq!(eval.findings[0].field.canonical_name, "client_code");
    }
}

#[test]
fn other_fund_source_needs_description_in_shanghai_only() {
    let sh = RowBuilder::valid(RuleVariant::Shanghai)
        .set(FieldKey::FundSources, "其他")
        .set(FieldKey::FundSourceRatio, "其他100%")
        .evaluate();
    assert_eq!(codes(&sh.findings), vec!["REQUIRED_FIELD"]);
    assert_eq!(sh.findings[0].field.canonical_name, "other_fund_desc");

    let sz = RowBuilder::valid(RuleVariant::Shenzhen)
        .set(FieldKey::FundSources, "其他")
        .set(FieldKey::FundSourceRatio, "其他100%")
        .evaluate();
    assert!(sz.findings.is_empty());
}

#[test]
fn shenzhen_findings_use_shenzhen_columns() {
    let eval = RowBuilder::valid(RuleVariant::Shenzhen)
        .set(FieldKey::ClientCode, "AB")
        .evaluate();
    let finding = &eval.findings[0];
    assert_eq!(finding.field.local_name, "深市券商客户编码");
    assert_eq!(finding.field.column, 7);
}

#[test]
fn evaluation_pads_short_rows() {
    let variant = RuleVariant::Shanghai;
    let mut raw = RowBuilder::valid(variant).build();
    raw.truncate(10);
    let eval = pgtd_validate::evaluate_row(
        3,
        &raw,
        &common::context(variant),
        common::table(variant),
    );
    assert_eq!(eval.row.width(), 42);
    assert_eq!(eval.row_number(), 3);
    assert!(eval.findings.iter().all(|f| f.row == 3));
    assert!(!eval.findings.is_empty());
}

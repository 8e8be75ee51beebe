#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use pgtd_model::{FieldKey, Finding, RuleVariant, SubmissionContext};
use pgtd_standards::{FieldTable, field_table};
use pgtd_validate::{RowEvaluation, evaluate_row};

pub const ISSUER: &str = "09999";

pub fn submission_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()
}

pub fn context(variant: RuleVariant) -> SubmissionContext {
    SubmissionContext::new(variant, submission_date(), ISSUER)
}

pub fn filename(variant: RuleVariant) -> String {
    format!("{}_PGTDRPT_{ISSUER}_20250805.xlsx", variant.tag())
}

/// Builds raw rows by field key, starting from a valid first-time filing.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    variant: RuleVariant,
    cells: Vec<String>,
}

impl RowBuilder {
    pub fn empty(variant: RuleVariant) -> Self {
        Self {
            variant,
            cells: vec![String::new(); variant.column_count()],
        }
    }

    pub fn valid(variant: RuleVariant) -> Self {
        Self::empty(variant)
            .set(FieldKey::EpName, "Alpha Securities Ltd")
            .set(FieldKey::BrokerCode, ISSUER)
            .set(FieldKey::AccountName, "Alpha Fund")
            .set(FieldKey::IdNumber, "ID12345")
            .set(FieldKey::ClientCode, "C001")
            .set(FieldKey::ReportType, "首次")
            .set(FieldKey::ReportDate, "20250801")
            .set(FieldKey::ConsolidatedReporting, "否")
            .set(FieldKey::FundSize, "1000")
            .set(FieldKey::FundSources, "自有资金")
            .set(FieldKey::FundSourceRatio, "自有资金100%")
            .set(FieldKey::LeverageSize, "0")
            .set(FieldKey::LeverageRatio, "100")
            .set(FieldKey::TradingProducts, "股票")
            .set(FieldKey::IsQuantitative, "否")
            .set(FieldKey::ExecutionMethod, "TWAP")
            .set(FieldKey::ExecutionDesc, "Orders sliced evenly over the session")
            .set(FieldKey::MaxOrderRate, "100笔以下")
            .set(FieldKey::MaxDailyOrders, "10000笔以下")
            .set(FieldKey::SoftwareName, "QuantTrader v1.0")
            .set(FieldKey::SoftwareDeveloper, "Alpha Tech")
            .set(FieldKey::UploadTestReport, "是")
    }

    /// A stop-use row with only the identity fields filled.
    pub fn stop_use(variant: RuleVariant) -> Self {
        Self::empty(variant)
            .set(FieldKey::EpName, "Alpha Securities Ltd")
            .set(FieldKey::BrokerCode, ISSUER)
            .set(FieldKey::AccountName, "Alpha Fund")
            .set(FieldKey::ClientCode, "C001")
            .set(FieldKey::ReportType, "停止使用")
            .set(FieldKey::ReportDate, "20250801")
    }

    pub fn set(mut self, key: FieldKey, value: &str) -> Self {
        let index = table(self.variant)
            .index_of(key)
            .unwrap_or_else(|| panic!("{key} is not a {} column", self.variant));
        self.cells[index] = value.to_string();
        self
    }

    pub fn build(self) -> Vec<String> {
        self.cells
    }

    pub fn evaluate(self) -> RowEvaluation {
        let variant = self.variant;
        evaluate_row(1, &self.cells, &context(variant), table(variant))
    }
}

pub fn table(variant: RuleVariant) -> &'static FieldTable {
    field_table(variant)
}

/// Codes of all findings, in order.
pub fn codes(findings: &[Finding]) -> Vec<&'static str> {
    findings.iter().map(Finding::code).collect()
}

/// Findings against one column.
pub fn on_field<'a>(findings: &'a [Finding], key: FieldKey) -> Vec<&'a Finding> {
    findings
        .iter()
        .filter(|finding| finding.field.canonical_name == key.as_str())
        .collect()
}

/// Write `rows` below a title, an instruction line and the template header.
///
/// An empty row leaves a blank line in the sheet.
pub fn write_workbook(path: &Path, variant: RuleVariant, rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "程序化交易信息报告表").unwrap();
    sheet.write_string(1, 0, "填报说明：请勿修改表头").unwrap();
    for spec in table(variant) {
        sheet.write_string(2, spec.index as u16, spec.local_name).unwrap();
    }
    for (offset, row) in rows.iter().enumerate() {
        let excel_row = (offset + 3) as u32;
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(excel_row, col as u16, value.as_str()).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

//! Field identifiers, field specifications and conditional requirement rules.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Canonical identifier of a report column.
///
/// Canonical names are stable across variants; the column position is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    SequenceNum,
    EpName,
    BrokerCode,
    AccountName,
    IdNumber,
    ProductCode,
    ClientCode,
    FundManager,
    ReportType,
    ReportDate,
    ConsolidatedReporting,
    FundSize,
    FundSources,
    OtherFundDesc,
    FundSourceRatio,
    LeverageSize,
    LeverageSources,
    OtherLeverageDesc,
    LeverageRatio,
    TradingProducts,
    IsQuantitative,
    MainStrategy,
    OtherMainStrategy,
    MainStrategyDesc,
    SubStrategy,
    OtherSubStrategy,
    SubStrategyDesc,
    FuturesAccountName,
    FuturesAccountCode,
    ExecutionMethod,
    OtherExecutionDesc,
    ExecutionDesc,
    MaxOrderRate,
    MaxDailyOrders,
    SoftwareName,
    SoftwareDeveloper,
    HftServerLocation,
    EpContact,
    EpContactInfo,
    InvestorContact,
    InvestorContactInfo,
    UploadTestReport,
    QfiiCode,
}

impl FieldKey {
    /// Fields checked for presence on a stop-use row.
    pub const IDENTITY: [FieldKey; 5] = [
        FieldKey::EpName,
        FieldKey::BrokerCode,
        FieldKey::AccountName,
        FieldKey::ClientCode,
        FieldKey::ReportDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::SequenceNum => "sequence_num",
            FieldKey::EpName => "ep_name",
            FieldKey::BrokerCode => "broker_code",
            FieldKey::AccountName => "account_name",
            FieldKey::IdNumber => "id_number",
            FieldKey::ProductCode => "product_code",
            FieldKey::ClientCode => "client_code",
            FieldKey::FundManager => "fund_manager",
            FieldKey::ReportType => "report_type",
            FieldKey::ReportDate => "report_date",
            FieldKey::ConsolidatedReporting => "consolidated_reporting",
            FieldKey::FundSize => "fund_size",
            FieldKey::FundSources => "fund_sources",
            FieldKey::OtherFundDesc => "other_fund_desc",
            FieldKey::FundSourceRatio => "fund_source_ratio",
            FieldKey::LeverageSize => "leverage_size",
            FieldKey::LeverageSources => "leverage_sources",
            FieldKey::OtherLeverageDesc => "other_leverage_desc",
            FieldKey::LeverageRatio => "leverage_ratio",
            FieldKey::TradingProducts => "trading_products",
            FieldKey::IsQuantitative => "is_quantitative",
            FieldKey::MainStrategy => "main_strategy",
            FieldKey::OtherMainStrategy => "other_main_strategy",
            FieldKey::MainStrategyDesc => "main_strategy_desc",
            FieldKey::SubStrategy => "sub_strategy",
            FieldKey::OtherSubStrategy => "other_sub_strategy",
            FieldKey::SubStrategyDesc => "sub_strategy_desc",
            FieldKey::FuturesAccountName => "futures_account_name",
            FieldKey::FuturesAccountCode => "futures_account_code",
            FieldKey::ExecutionMethod => "execution_method",
            FieldKey::OtherExecutionDesc => "other_execution_desc",
            FieldKey::ExecutionDesc => "execution_desc",
            FieldKey::MaxOrderRate => "max_order_rate",
            FieldKey::MaxDailyOrders => "max_daily_orders",
            FieldKey::SoftwareName => "software_name",
            FieldKey::SoftwareDeveloper => "software_developer",
            FieldKey::HftServerLocation => "hft_server_location",
            FieldKey::EpContact => "ep_contact",
            FieldKey::EpContactInfo => "ep_contact_info",
            FieldKey::InvestorContact => "investor_contact",
            FieldKey::InvestorContactInfo => "investor_contact_info",
            FieldKey::UploadTestReport => "upload_test_report",
            FieldKey::QfiiCode => "qfii_code",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

const ALL_KEYS: [FieldKey; 43] = [
    FieldKey::SequenceNum,
    FieldKey::EpName,
    FieldKey::BrokerCode,
    FieldKey::AccountName,
    FieldKey::IdNumber,
    FieldKey::ProductCode,
    FieldKey::ClientCode,
    FieldKey::FundManager,
    FieldKey::ReportType,
    FieldKey::ReportDate,
    FieldKey::ConsolidatedReporting,
    FieldKey::FundSize,
    FieldKey::FundSources,
    FieldKey::OtherFundDesc,
    FieldKey::FundSourceRatio,
    FieldKey::LeverageSize,
    FieldKey::LeverageSources,
    FieldKey::OtherLeverageDesc,
    FieldKey::LeverageRatio,
    FieldKey::TradingProducts,
    FieldKey::IsQuantitative,
    FieldKey::MainStrategy,
    FieldKey::OtherMainStrategy,
    FieldKey::MainStrategyDesc,
    FieldKey::SubStrategy,
    FieldKey::OtherSubStrategy,
    FieldKey::SubStrategyDesc,
    FieldKey::FuturesAccountName,
    FieldKey::FuturesAccountCode,
    FieldKey::ExecutionMethod,
    FieldKey::OtherExecutionDesc,
    FieldKey::ExecutionDesc,
    FieldKey::MaxOrderRate,
    FieldKey::MaxDailyOrders,
    FieldKey::SoftwareName,
    FieldKey::SoftwareDeveloper,
    FieldKey::HftServerLocation,
    FieldKey::EpContact,
    FieldKey::EpContactInfo,
    FieldKey::InvestorContact,
    FieldKey::InvestorContactInfo,
    FieldKey::UploadTestReport,
    FieldKey::QfiiCode,
];

/// Conditional requirement, resolved against the column indices of one variant.
///
/// Rules only ever read values of the row under validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementRule {
    /// Report type is first-time or changed.
    ReportTypeIn { report_type: usize },
    /// The `;`-separated selection in `field` includes `option`.
    OptionSelected { field: usize, option: &'static str },
    /// `field` holds exactly `value`.
    ValueEquals { field: usize, value: &'static str },
    /// `field` is non-empty.
    ValuePresent { field: usize },
    /// High-frequency account, first-time or changed report, and the
    /// test-report answer is neither the exemption value nor "yes".
    HighFrequencyUnexempt {
        report_type: usize,
        order_rate: usize,
        daily_orders: usize,
        upload: usize,
    },
    /// High-frequency account, first-time or changed report, and the
    /// test-report answer is explicitly "no".
    HighFrequencyWithoutUpload {
        report_type: usize,
        order_rate: usize,
        daily_orders: usize,
        upload: usize,
    },
}

impl RequirementRule {
    /// Column indices the rule reads.
    pub fn dependencies(&self) -> Vec<usize> {
        match self {
            RequirementRule::ReportTypeIn { report_type } => vec![*report_type],
            RequirementRule::OptionSelected { field, .. }
            | RequirementRule::ValueEquals { field, .. }
            | RequirementRule::ValuePresent { field } => vec![*field],
            RequirementRule::HighFrequencyUnexempt {
                report_type,
                order_rate,
                daily_orders,
                upload,
            }
            | RequirementRule::HighFrequencyWithoutUpload {
                report_type,
                order_rate,
                daily_orders,
                upload,
            } => vec![*report_type, *order_rate, *daily_orders, *upload],
        }
    }
}

/// Specification for a single report column.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// 0-based column position within the variant.
    pub index: usize,
    pub key: FieldKey,
    /// Header text as printed in the exchange template.
    pub local_name: &'static str,
    pub max_length: usize,
    pub always_required: bool,
    pub requirement: Option<RequirementRule>,
    pub allowed_values: Option<&'static [&'static str]>,
    pub multi_value: bool,
    pub max_multi_count: Option<usize>,
}

impl FieldSpec {
    pub fn canonical_name(&self) -> &'static str {
        self.key.as_str()
    }

    /// 1-based spreadsheet column number.
    pub fn column(&self) -> usize {
        self.index + 1
    }

    pub fn is_enumerated(&self) -> bool {
        self.allowed_values.is_some()
    }
}

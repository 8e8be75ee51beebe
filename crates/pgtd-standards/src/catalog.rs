//! Declarative column catalog shared by both exchange variants.
//!
//! Entries are listed in template order. A variant's column positions are
//! the positions of the entries present in it, so the Shenzhen layout (a
//! leading sequence number, no free-text "other" fields) falls out of the
//! same list as the Shanghai layout.

use pgtd_model::{FieldKey, RuleVariant};

use crate::codelists::{
    DAILY_ORDER_COUNTS, EXECUTION_METHODS, FUND_SOURCES, LEVERAGE_FUNDS, LEVERAGE_SOURCES, OTHER,
    ORDER_RATES, REPORT_TYPES, STRATEGY_TYPES, TRADING_PRODUCTS, YES, YES_NO, YES_NO_EXEMPT,
};

/// Which variants carry a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Both,
    ShanghaiOnly,
    ShenzhenOnly,
}

impl Presence {
    pub fn includes(self, variant: RuleVariant) -> bool {
        match self {
            Presence::Both => true,
            Presence::ShanghaiOnly => variant == RuleVariant::Shanghai,
            Presence::ShenzhenOnly => variant == RuleVariant::Shenzhen,
        }
    }
}

/// Requirement condition expressed over field keys.
///
/// Resolved to column indices per variant by [`crate::FieldTable::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    FirstOrChange,
    OptionSelected { field: FieldKey, option: &'static str },
    ValueEquals { field: FieldKey, value: &'static str },
    ValuePresent { field: FieldKey },
    HighFrequencyUnexempt,
    HighFrequencyWithoutUpload,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: FieldKey,
    pub presence: Presence,
    pub shanghai_name: &'static str,
    /// Shenzhen header text when it differs from the Shanghai one.
    pub shenzhen_name: Option<&'static str>,
    pub max_length: usize,
    pub required: bool,
    pub condition: Option<Condition>,
    pub allowed_values: Option<&'static [&'static str]>,
    pub multi_value: bool,
    pub max_multi_count: Option<usize>,
}

impl FieldDef {
    const fn new(key: FieldKey, name: &'static str, max_length: usize) -> Self {
        Self {
            key,
            presence: Presence::Both,
            shanghai_name: name,
            shenzhen_name: None,
            max_length,
            required: false,
            condition: None,
            allowed_values: None,
            multi_value: false,
            max_multi_count: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = Some(values);
        self
    }

    const fn multi(mut self) -> Self {
        self.multi_value = true;
        self
    }

    const fn max_count(mut self, count: usize) -> Self {
        self.max_multi_count = Some(count);
        self
    }

    const fn shanghai_only(mut self) -> Self {
        self.presence = Presence::ShanghaiOnly;
        self
    }

    const fn shenzhen_only(mut self) -> Self {
        self.presence = Presence::ShenzhenOnly;
        self
    }

    const fn shenzhen_name(mut self, name: &'static str) -> Self {
        self.shenzhen_name = Some(name);
        self
    }

    /// Header text printed for `variant`.
    pub fn local_name(&self, variant: RuleVariant) -> &'static str {
        match (variant, self.shenzhen_name) {
            (RuleVariant::Shenzhen, Some(name)) => name,
            _ => self.shanghai_name,
        }
    }
}

use Condition::{FirstOrChange, HighFrequencyUnexempt, HighFrequencyWithoutUpload};

/// All report columns in template order.
pub const CATALOG: &[FieldDef] = &[
    FieldDef::new(FieldKey::SequenceNum, "序号", 10).shenzhen_only(),
    // Basic information
    FieldDef::new(FieldKey::EpName, "联交所参与者名称", 100).required(),
    FieldDef::new(FieldKey::BrokerCode, "经纪商代码", 5).required(),
    FieldDef::new(FieldKey::AccountName, "账户名称", 200).required(),
    FieldDef::new(FieldKey::IdNumber, "证件号码", 80).when(FirstOrChange),
    FieldDef::new(FieldKey::ProductCode, "产品编码（选填）", 50),
    FieldDef::new(FieldKey::ClientCode, "券商客户编码", 10)
        .required()
        .shenzhen_name("深市券商客户编码"),
    FieldDef::new(FieldKey::FundManager, "产品管理机构名称", 200),
    FieldDef::new(FieldKey::ReportType, "报告类型", 6)
        .required()
        .one_of(REPORT_TYPES)
        .shenzhen_name("报告类型（首次/变更/停止使用）"),
    FieldDef::new(FieldKey::ReportDate, "报告日期", 8).required(),
    // Funds
    FieldDef::new(
        FieldKey::ConsolidatedReporting,
        "是否选取一家联交所参与者集中填报资金信息",
        1,
    )
    .when(FirstOrChange)
    .one_of(YES_NO),
    FieldDef::new(FieldKey::FundSize, "账户资金规模（人民币，万元）", 30).when(FirstOrChange),
    FieldDef::new(FieldKey::FundSources, "账户资金来源", 30)
        .when(FirstOrChange)
        .one_of(FUND_SOURCES)
        .multi(),
    FieldDef::new(FieldKey::OtherFundDesc, "其他资金来源描述", 200)
        .when(Condition::OptionSelected {
            field: FieldKey::FundSources,
            option: OTHER,
        })
        .shanghai_only(),
    FieldDef::new(FieldKey::FundSourceRatio, "资金来源占比", 50)
        .when(FirstOrChange)
        .shenzhen_name("资金来源占比（%）"),
    FieldDef::new(FieldKey::LeverageSize, "杠杆资金规模（人民币，万元）", 30).when(FirstOrChange),
    FieldDef::new(FieldKey::LeverageSources, "杠杆资金来源", 30)
        .when(Condition::OptionSelected {
            field: FieldKey::FundSources,
            option: LEVERAGE_FUNDS,
        })
        .one_of(LEVERAGE_SOURCES)
        .multi(),
    FieldDef::new(FieldKey::OtherLeverageDesc, "其他杠杆资金来源描述", 200)
        .when(Condition::OptionSelected {
            field: FieldKey::LeverageSources,
            option: OTHER,
        })
        .shanghai_only(),
    FieldDef::new(FieldKey::LeverageRatio, "杠杆率（%）", 20).when(FirstOrChange),
    // Trading
    FieldDef::new(FieldKey::TradingProducts, "交易品种", 20)
        .when(FirstOrChange)
        .one_of(TRADING_PRODUCTS)
        .multi(),
    FieldDef::new(FieldKey::IsQuantitative, "是否量化交易", 1)
        .when(FirstOrChange)
        .one_of(YES_NO),
    FieldDef::new(FieldKey::MainStrategy, "主策略类型", 20)
        .when(Condition::ValueEquals {
            field: FieldKey::IsQuantitative,
            value: YES,
        })
        .one_of(STRATEGY_TYPES),
    FieldDef::new(FieldKey::OtherMainStrategy, "其他主策略类型", 200)
        .when(Condition::ValueEquals {
            field: FieldKey::MainStrategy,
            value: OTHER,
        })
        .shanghai_only(),
    FieldDef::new(FieldKey::MainStrategyDesc, "主策略概述", 500).when(Condition::ValuePresent {
        field: FieldKey::MainStrategy,
    }),
    FieldDef::new(FieldKey::SubStrategy, "辅策略类型", 50)
        .one_of(STRATEGY_TYPES)
        .multi()
        .max_count(2),
    FieldDef::new(FieldKey::OtherSubStrategy, "其他辅策略类型", 200)
        .when(Condition::OptionSelected {
            field: FieldKey::SubStrategy,
            option: OTHER,
        })
        .shanghai_only(),
    FieldDef::new(FieldKey::SubStrategyDesc, "辅策略概述", 500).when(Condition::ValuePresent {
        field: FieldKey::SubStrategy,
    }),
    FieldDef::new(FieldKey::FuturesAccountName, "期货市场账户名称（选填）", 200).multi(),
    FieldDef::new(FieldKey::FuturesAccountCode, "期货市场账户代码（选填）", 300).multi(),
    FieldDef::new(FieldKey::ExecutionMethod, "交易指令执行方式", 50)
        .when(FirstOrChange)
        .one_of(EXECUTION_METHODS)
        .multi(),
    FieldDef::new(FieldKey::OtherExecutionDesc, "其他方式描述", 500)
        .when(Condition::OptionSelected {
            field: FieldKey::ExecutionMethod,
            option: OTHER,
        })
        .shanghai_only(),
    FieldDef::new(FieldKey::ExecutionDesc, "指令执行方式概述", 500)
        .when(FirstOrChange)
        .shenzhen_name("交易指令执行方式概述"),
    FieldDef::new(FieldKey::MaxOrderRate, "账户最高申报速率", 20)
        .when(FirstOrChange)
        .one_of(ORDER_RATES)
        .shenzhen_name("账户最高申报速率（笔/秒）"),
    FieldDef::new(FieldKey::MaxDailyOrders, "账户单日最高申报笔数", 20)
        .when(FirstOrChange)
        .one_of(DAILY_ORDER_COUNTS)
        .shenzhen_name("账户单日最高申报笔数（笔）"),
    // Software
    FieldDef::new(FieldKey::SoftwareName, "程序化交易软件名称及版本号", 200)
        .when(FirstOrChange)
        .multi(),
    FieldDef::new(FieldKey::SoftwareDeveloper, "程序化交易软件开发主体", 200)
        .when(FirstOrChange)
        .multi(),
    // Other
    FieldDef::new(FieldKey::HftServerLocation, "高频交易系统服务器所在地", 100)
        .when(HighFrequencyUnexempt),
    FieldDef::new(FieldKey::EpContact, "联交所参与者联络人（选填）", 80),
    FieldDef::new(FieldKey::EpContactInfo, "联交所参与者联络人联系方式（选填）", 80)
        .shenzhen_name("联系方式（选填）"),
    FieldDef::new(FieldKey::InvestorContact, "投资者相关业务负责人（选填）", 80),
    FieldDef::new(
        FieldKey::InvestorContactInfo,
        "投资者相关业务负责人联系方式（选填）",
        80,
    )
    .shenzhen_name("联系方式（选填）"),
    FieldDef::new(FieldKey::UploadTestReport, "是否上传测试报告及应急方案", 5)
        .when(FirstOrChange)
        .one_of(YES_NO_EXEMPT)
        .shenzhen_name("是否提交测试报告及应急方案"),
    FieldDef::new(FieldKey::QfiiCode, "合格境外投资者编码", 50).when(HighFrequencyWithoutUpload),
];

/// Catalog entries present in `variant`, in column order.
pub fn fields_for(variant: RuleVariant) -> impl Iterator<Item = &'static FieldDef> {
    CATALOG
        .iter()
        .filter(move |def| def.presence.includes(variant))
}

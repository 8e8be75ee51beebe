//! Controlled value lists printed in the exchange templates.

/// Report type for a first-time filing.
pub const REPORT_TYPE_FIRST: &str = "首次";
/// Report type for a change filing.
pub const REPORT_TYPE_CHANGE: &str = "变更";
/// Report type for a stop-use filing.
pub const REPORT_TYPE_STOP: &str = "停止使用";

pub const REPORT_TYPES: &[&str] = &[REPORT_TYPE_FIRST, REPORT_TYPE_CHANGE, REPORT_TYPE_STOP];

pub const YES: &str = "是";
pub const NO: &str = "否";
/// Test report answer for accounts that applied for an exemption.
pub const EXEMPT: &str = "已申请豁免";

pub const YES_NO: &[&str] = &[YES, NO];
pub const YES_NO_EXEMPT: &[&str] = &[YES, NO, EXEMPT];

/// Option that marks leveraged funds among the fund sources.
pub const LEVERAGE_FUNDS: &str = "杠杆资金";
/// "Other" option of every selection list.
pub const OTHER: &str = "其他";

pub const FUND_SOURCES: &[&str] = &["自有资金", "募集资金", LEVERAGE_FUNDS, OTHER];

pub const LEVERAGE_SOURCES: &[&str] = &["融资融券", "场外衍生品", OTHER];

pub const TRADING_PRODUCTS: &[&str] = &["股票", "基金"];

pub const STRATEGY_TYPES: &[&str] = &[
    "指数增强策略",
    "市场中性策略",
    "多空灵活策略",
    "量化多头策略",
    "管理期货策略CTA",
    "参与新股发行策略",
    "量化套利策略",
    "日内回转策略",
    OTHER,
];

pub const EXECUTION_METHODS: &[&str] = &["TWAP", "VWAP", "POV", OTHER];

pub const ORDER_RATES: &[&str] = &["500笔及以上", "300笔至499笔", "100笔至299笔", "100笔以下"];

pub const DAILY_ORDER_COUNTS: &[&str] = &[
    "25000笔及以上",
    "20000笔至24999笔",
    "15000笔至19999笔",
    "10000笔至14999笔",
    "10000笔以下",
];

/// Order-rate bands that make an account high-frequency.
pub const HIGH_FREQUENCY_RATES: &[&str] = &["500笔及以上", "300笔至499笔"];

/// Daily order-count bands that make an account high-frequency.
pub const HIGH_FREQUENCY_DAILY: &[&str] = &["25000笔及以上", "20000笔至24999笔"];

/// Sentinel accepted in place of data already reported through another
/// participant.
pub const REPORTED_ELSEWHERE: &str = "已在其他联交所参与者报告";

/// Separator between the parts of a multi-value cell.
pub const MULTI_VALUE_SEPARATOR: char = ';';

/// Text of the first header cell; marks the header row of a worksheet.
pub const HEADER_ANCHOR: &str = "联交所参与者名称";

/// True when the report type is first-time or change.
pub fn is_first_or_change(report_type: &str) -> bool {
    report_type == REPORT_TYPE_FIRST || report_type == REPORT_TYPE_CHANGE
}

/// True when either order band falls in the high-frequency range.
pub fn is_high_frequency(order_rate: &str, daily_orders: &str) -> bool {
    HIGH_FREQUENCY_RATES.contains(&order_rate) || HIGH_FREQUENCY_DAILY.contains(&daily_orders)
}

/// Non-empty trimmed parts of a multi-value cell.
pub fn split_selection(value: &str) -> Vec<&str> {
    value
        .split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// True when the selection cell lists `option` as one of its parts.
pub fn selection_contains(value: &str, option: &str) -> bool {
    split_selection(value).contains(&option)
}

//! High-frequency accounts: test report and server location.

use pgtd_model::{FieldKey, Finding, Issue};
use pgtd_standards::codelists::{EXEMPT, NO, YES, is_high_frequency};

use super::RowContext;

pub fn check(ctx: &RowContext<'_>) -> Option<Finding> {
    let rate = ctx.value(FieldKey::MaxOrderRate);
    let daily = ctx.value(FieldKey::MaxDailyOrders);
    if !is_high_frequency(rate, daily) {
        return None;
    }

    let upload = ctx.value(FieldKey::UploadTestReport);
    let server = ctx.value(FieldKey::HftServerLocation);

    match upload {
        NO => ctx.finding(
            FieldKey::UploadTestReport,
            upload,
            Issue::HighFrequencyUploadRequired,
        ),
        YES if server.is_empty() => ctx.finding(
            FieldKey::HftServerLocation,
            server,
            Issue::HighFrequencyServerLocationMissing,
        ),
        EXEMPT if !server.is_empty() && server != EXEMPT => ctx.finding(
            FieldKey::HftServerLocation,
            server,
            Issue::HighFrequencyServerLocationMismatch {
                expected: EXEMPT.to_string(),
            },
        ),
        _ => None,
    }
}

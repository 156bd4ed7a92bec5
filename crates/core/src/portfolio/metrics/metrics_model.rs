use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Summary metrics for the portfolio as of the latest aggregate row.
///
/// Returns are relative to the $100 starting capital, so the dollar return
/// and the percent return coincide numerically. Alpha is the exact excess of
/// the portfolio return over the benchmark return, in percentage points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_equity: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
    pub benchmark_return: Decimal,
    pub benchmark_return_percent: Decimal,
    pub alpha: Decimal,
    pub cash: Decimal,
    pub invested_value: Decimal,
    pub day_change: Decimal,
    pub day_change_percent: Decimal,
}

impl Default for PortfolioMetrics {
    /// The empty-ledger state: all capital intact and idle, no returns.
    fn default() -> Self {
        PortfolioMetrics {
            total_equity: dec!(100),
            total_return: Decimal::ZERO,
            total_return_percent: Decimal::ZERO,
            benchmark_return: Decimal::ZERO,
            benchmark_return_percent: Decimal::ZERO,
            alpha: Decimal::ZERO,
            cash: dec!(100),
            invested_value: Decimal::ZERO,
            day_change: Decimal::ZERO,
            day_change_percent: Decimal::ZERO,
        }
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the benchmarked performance series: portfolio equity and the
/// rebased benchmark for a trading session, plus the day-over-day return.
///
/// The series always opens with a synthetic baseline sample on the
/// experiment's start date where both values equal the starting capital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    pub date: NaiveDate,
    pub portfolio_value: Decimal,
    pub benchmark_value: Decimal,
    pub daily_return_percent: Decimal,
}

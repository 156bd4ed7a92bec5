//! Metrics aggregator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::metrics_model::PortfolioMetrics;
use crate::constants::STARTING_CAPITAL;
use crate::ledger::PortfolioRecord;
use crate::portfolio::performance::PerformanceSample;
use crate::utils::num_utils::{coerce_decimal, decimal_or_zero};

/// Reduces the latest aggregate row and the performance series into one
/// summary record.
#[derive(Debug, Default)]
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Builds the summary from the last aggregate row in ledger order.
    /// Without any aggregate row the documented defaults apply: all capital
    /// intact and idle, every return zero.
    pub fn build(
        &self,
        records: &[PortfolioRecord],
        series: &[PerformanceSample],
    ) -> PortfolioMetrics {
        let Some(latest_total) = records.iter().rfind(|r| r.is_aggregate()) else {
            return PortfolioMetrics::default();
        };

        let total_equity = coerce_decimal(&latest_total.total_equity).or(STARTING_CAPITAL);
        let cash = decimal_or_zero(&latest_total.cash_balance);
        let invested_value = total_equity - cash;

        let total_return = total_equity - STARTING_CAPITAL;
        let total_return_percent =
            (total_equity - STARTING_CAPITAL) / STARTING_CAPITAL * dec!(100);

        let benchmark_value = series
            .last()
            .map(|sample| sample.benchmark_value)
            .unwrap_or(STARTING_CAPITAL);
        let benchmark_return = benchmark_value - STARTING_CAPITAL;
        let benchmark_return_percent =
            (benchmark_value - STARTING_CAPITAL) / STARTING_CAPITAL * dec!(100);

        let alpha = total_return_percent - benchmark_return_percent;

        let (day_change, day_change_percent) = match series {
            [.., yesterday, today] => {
                let change = today.portfolio_value - yesterday.portfolio_value;
                let percent = if yesterday.portfolio_value.is_zero() {
                    Decimal::ZERO
                } else {
                    change / yesterday.portfolio_value * dec!(100)
                };
                (change, percent)
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };

        PortfolioMetrics {
            total_equity,
            total_return,
            total_return_percent,
            benchmark_return,
            benchmark_return_percent,
            alpha,
            cash,
            invested_value,
            day_change,
            day_change_percent,
        }
    }
}

//! Performance series builder.

use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::performance_model::PerformanceSample;
use crate::benchmark::BenchmarkProviderTrait;
use crate::constants::STARTING_CAPITAL;
use crate::ledger::PortfolioRecord;
use crate::utils::num_utils::decimal_or_zero;

/// Builds the benchmarked daily performance series from portfolio ledger
/// rows.
pub struct PerformanceService {
    benchmark: Arc<dyn BenchmarkProviderTrait>,
}

impl PerformanceService {
    pub fn new(benchmark: Arc<dyn BenchmarkProviderTrait>) -> Self {
        Self { benchmark }
    }

    /// Turns ledger rows into an ordered series, one sample per aggregate
    /// row, preceded by the synthetic baseline sample.
    ///
    /// Ledger order is normally chronological already; rows that arrive out
    /// of order are sorted by date and logged as an anomaly. An aggregate
    /// row whose date does not parse cannot be placed on the time axis and
    /// is dropped with a warning. The first real trading sample reports a
    /// zero day-over-day return; later samples compare against the previous
    /// aggregate row's equity, not the baseline.
    pub fn build(&self, records: &[PortfolioRecord]) -> Vec<PerformanceSample> {
        let mut aggregates = Vec::new();
        for record in records.iter().filter(|r| r.is_aggregate()) {
            match record.parsed_date() {
                Some(date) => aggregates.push((date, decimal_or_zero(&record.total_equity))),
                None => warn!(
                    "Dropping aggregate row with unparseable date '{}'",
                    record.date
                ),
            }
        }

        if !aggregates.windows(2).all(|w| w[0].0 <= w[1].0) {
            warn!("Aggregate rows out of chronological order; sorting by date");
            aggregates.sort_by_key(|&(date, _)| date);
        }

        let mut series = Vec::with_capacity(aggregates.len() + 1);
        series.push(PerformanceSample {
            date: self.benchmark.baseline_date(),
            portfolio_value: STARTING_CAPITAL,
            benchmark_value: STARTING_CAPITAL,
            daily_return_percent: Decimal::ZERO,
        });

        let mut prev_value: Option<Decimal> = None;
        for (date, portfolio_value) in aggregates {
            let daily_return_percent = match prev_value {
                Some(prev) if !prev.is_zero() => (portfolio_value - prev) / prev * dec!(100),
                // First trading sample, or zero previous equity
                _ => Decimal::ZERO,
            };

            series.push(PerformanceSample {
                date,
                portfolio_value,
                benchmark_value: self.benchmark.value_for(date),
                daily_return_percent,
            });
            prev_value = Some(portfolio_value);
        }

        series
    }
}

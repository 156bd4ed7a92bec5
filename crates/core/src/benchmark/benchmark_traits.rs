use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Maps calendar dates to benchmark index values rebased to the portfolio's
/// $100 starting capital.
///
/// Injected wherever benchmark values are needed so tests can supply
/// synthetic tables; implementations are pure lookups with no I/O.
pub trait BenchmarkProviderTrait: Send + Sync {
    /// The experiment's start date; the rebased value on this date is
    /// exactly the starting capital.
    fn baseline_date(&self) -> NaiveDate;

    /// The rebased benchmark value for `date`.
    ///
    /// A date absent from the table resolves to the baseline level, i.e. it
    /// is treated as coincident with day zero. This is a deliberate fallback
    /// policy, not an error.
    fn value_for(&self, date: NaiveDate) -> Decimal;
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ticker sentinel marking the per-date aggregate row in the portfolio ledger
pub const AGGREGATE_TICKER: &str = "TOTAL";

/// Starting capital; both the portfolio and the rebased benchmark begin here
pub const STARTING_CAPITAL: Decimal = dec!(100);

/// Ledger dates are ISO calendar strings
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

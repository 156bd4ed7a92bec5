//! Raw row records for the two published ledgers.
//!
//! Records keep every cell as the text the CSV carried. The source format
//! enforces no schema, so numeric and date interpretation happens at the
//! consumers through the explicit coercion helpers, never here.

use chrono::NaiveDate;

use crate::constants::AGGREGATE_TICKER;
use crate::utils::time_utils::parse_iso_date;

/// Column names of the portfolio ledger, exactly as published.
pub mod portfolio_columns {
    pub const DATE: &str = "Date";
    pub const TICKER: &str = "Ticker";
    pub const SHARES: &str = "Shares";
    pub const COST_BASIS: &str = "Cost Basis";
    pub const STOP_LOSS: &str = "Stop Loss";
    pub const CURRENT_PRICE: &str = "Current Price";
    pub const TOTAL_VALUE: &str = "Total Value";
    pub const PNL: &str = "PnL";
    pub const ACTION: &str = "Action";
    pub const CASH_BALANCE: &str = "Cash Balance";
    pub const TOTAL_EQUITY: &str = "Total Equity";
}

/// Column names of the trade ledger, exactly as published.
pub mod trade_columns {
    pub const DATE: &str = "Date";
    pub const TICKER: &str = "Ticker";
    pub const SHARES_BOUGHT: &str = "Shares Bought";
    pub const BUY_PRICE: &str = "Buy Price";
    pub const COST_BASIS: &str = "Cost Basis";
    pub const PNL: &str = "PnL";
    pub const REASON: &str = "Reason";
    pub const SHARES_SOLD: &str = "Shares Sold";
    pub const SELL_PRICE: &str = "Sell Price";
}

/// One row of the portfolio ledger: a position for a (date, ticker) pair, or
/// the per-date aggregate when the ticker is the `TOTAL` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioRecord {
    pub date: String,
    pub ticker: String,
    pub shares: String,
    pub cost_basis: String,
    pub stop_loss: String,
    pub current_price: String,
    pub total_value: String,
    pub pnl: String,
    pub action: String,
    pub cash_balance: String,
    pub total_equity: String,
}

impl PortfolioRecord {
    /// Whether this row is the per-date aggregate rather than a position.
    pub fn is_aggregate(&self) -> bool {
        self.ticker == AGGREGATE_TICKER
    }

    /// The row's calendar date, if the cell parses as ISO `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

/// One row of the trade ledger: an executed buy or sell.
///
/// Exactly one of the buy/sell field pairs is populated per row; a row is a
/// buy iff `Shares Bought` coerces to a positive quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRecord {
    pub date: String,
    pub ticker: String,
    pub shares_bought: String,
    pub buy_price: String,
    pub cost_basis: String,
    pub pnl: String,
    pub reason: String,
    pub shares_sold: String,
    pub sell_price: String,
}

impl TradeRecord {
    /// The row's calendar date, if the cell parses as ISO `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

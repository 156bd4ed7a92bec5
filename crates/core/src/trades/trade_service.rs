//! Trade history view builder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::TradeRecord;
use crate::utils::num_utils::decimal_or_zero;

/// Which side of the book a trade executed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One executed trade prepared for display.
///
/// `shares` and `price` come from whichever side of the row is populated;
/// `date` carries the ledger cell verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeView {
    pub date: String,
    pub ticker: String,
    pub side: TradeSide,
    pub shares: Decimal,
    pub price: Decimal,
    pub cost_basis: Decimal,
    pub pnl: Decimal,
    pub reason: String,
}

/// Turns raw trade records into a newest-first display list.
#[derive(Debug, Default)]
pub struct TradeHistoryService;

impl TradeHistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Classifies each record (buy iff `Shares Bought` coerces positive) and
    /// sorts newest-first by date; rows whose date does not parse sort last.
    /// Ties keep ledger order.
    pub fn build(&self, records: &[TradeRecord]) -> Vec<TradeView> {
        let mut keyed: Vec<_> = records
            .iter()
            .map(|record| (record.parsed_date(), self.view_from(record)))
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        keyed.into_iter().map(|(_, view)| view).collect()
    }

    fn view_from(&self, record: &TradeRecord) -> TradeView {
        let shares_bought = decimal_or_zero(&record.shares_bought);
        let side = if shares_bought > Decimal::ZERO {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        };

        let (shares, price) = match side {
            TradeSide::Buy => (shares_bought, decimal_or_zero(&record.buy_price)),
            TradeSide::Sell => (
                decimal_or_zero(&record.shares_sold),
                decimal_or_zero(&record.sell_price),
            ),
        };

        TradeView {
            date: record.date.clone(),
            ticker: record.ticker.clone(),
            side,
            shares,
            price,
            cost_basis: decimal_or_zero(&record.cost_basis),
            pnl: decimal_or_zero(&record.pnl),
            reason: record.reason.clone(),
        }
    }
}

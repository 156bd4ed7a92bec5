//! Unit tests for the trade history view.

use rust_decimal_macros::dec;

use super::*;
use crate::ledger::TradeRecord;

fn buy(date: &str, ticker: &str, shares: &str, price: &str) -> TradeRecord {
    TradeRecord {
        date: date.to_string(),
        ticker: ticker.to_string(),
        shares_bought: shares.to_string(),
        buy_price: price.to_string(),
        ..Default::default()
    }
}

fn sell(date: &str, ticker: &str, shares: &str, price: &str, pnl: &str) -> TradeRecord {
    TradeRecord {
        date: date.to_string(),
        ticker: ticker.to_string(),
        shares_sold: shares.to_string(),
        sell_price: price.to_string(),
        pnl: pnl.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_buy_classification_and_fields() {
    let views = TradeHistoryService::new().build(&[buy("2025-06-30", "ABEO", "10", "5.77")]);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].side, TradeSide::Buy);
    assert_eq!(views[0].shares, dec!(10));
    assert_eq!(views[0].price, dec!(5.77));
}

#[test]
fn test_sell_classification_and_fields() {
    let views =
        TradeHistoryService::new().build(&[sell("2025-07-10", "CADL", "8", "6.10", "4.80")]);

    assert_eq!(views[0].side, TradeSide::Sell);
    assert_eq!(views[0].shares, dec!(8));
    assert_eq!(views[0].price, dec!(6.10));
    assert_eq!(views[0].pnl, dec!(4.80));
}

#[test]
fn test_zero_shares_bought_reads_as_sell() {
    let record = TradeRecord {
        date: "2025-07-10".to_string(),
        ticker: "ABEO".to_string(),
        shares_bought: "0".to_string(),
        ..Default::default()
    };
    let views = TradeHistoryService::new().build(&[record]);

    assert_eq!(views[0].side, TradeSide::Sell);
}

#[test]
fn test_newest_first_ordering() {
    let records = vec![
        buy("2025-06-30", "ABEO", "10", "5.77"),
        sell("2025-07-10", "ABEO", "10", "6.20", "4.30"),
        buy("2025-07-02", "CADL", "15", "3.10"),
    ];
    let views = TradeHistoryService::new().build(&records);

    let dates: Vec<&str> = views.iter().map(|v| v.date.as_str()).collect();
    assert_eq!(dates, ["2025-07-10", "2025-07-02", "2025-06-30"]);
}

#[test]
fn test_unparseable_dates_sort_last() {
    let records = vec![
        buy("soon", "ABEO", "1", "1"),
        buy("2025-07-02", "CADL", "15", "3.10"),
    ];
    let views = TradeHistoryService::new().build(&records);

    assert_eq!(views[0].ticker, "CADL");
    assert_eq!(views[1].ticker, "ABEO");
}

#[test]
fn test_reason_is_carried_verbatim() {
    let mut record = buy("2025-06-30", "ABEO", "10", "5.77");
    record.reason = "Initial position; catalyst expected in Q3".to_string();
    let views = TradeHistoryService::new().build(&[record]);

    assert_eq!(views[0].reason, "Initial position; catalyst expected in Q3");
}

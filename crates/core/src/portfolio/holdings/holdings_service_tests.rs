//! Unit tests for the holdings snapshot builder.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::PortfolioRecord;

fn row(date: &str, ticker: &str) -> PortfolioRecord {
    PortfolioRecord {
        date: date.to_string(),
        ticker: ticker.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_empty_ledger_yields_empty_snapshot() {
    assert!(HoldingsService::new().build(&[]).is_empty());
}

#[test]
fn test_only_aggregate_rows_yields_empty_snapshot() {
    let rows = vec![row("2025-07-01", "TOTAL"), row("2025-07-02", "TOTAL")];
    assert!(HoldingsService::new().build(&rows).is_empty());
}

#[test]
fn test_snapshot_selects_latest_date_only() {
    let rows = vec![
        row("2025-06-30", "ABEO"),
        row("2025-07-01", "ABEO"),
        row("2025-07-01", "CADL"),
        row("2025-07-01", "TOTAL"),
    ];
    let snapshot = HoldingsService::new().build(&rows);

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].ticker, "ABEO");
    assert_eq!(snapshot[1].ticker, "CADL");
}

#[test]
fn test_aggregate_row_never_included() {
    let rows = vec![row("2025-07-01", "ABEO"), row("2025-07-01", "TOTAL")];
    let snapshot = HoldingsService::new().build(&rows);

    assert!(snapshot.iter().all(|h| h.ticker != "TOTAL"));
}

#[test]
fn test_cost_basis_and_pnl_percent() {
    let mut record = row("2025-07-01", "ABEO");
    record.shares = "10".to_string();
    record.cost_basis = "50".to_string();
    record.pnl = "5".to_string();
    record.current_price = "5.5".to_string();
    record.total_value = "55".to_string();
    record.stop_loss = "4.2".to_string();

    let snapshot = HoldingsService::new().build(&[record]);

    assert_eq!(snapshot.len(), 1);
    let holding = &snapshot[0];
    assert_eq!(holding.cost_basis_per_share, dec!(5));
    assert_eq!(holding.pnl_percent, dec!(10));
    assert_eq!(holding.current_price, dec!(5.5));
    assert_eq!(holding.total_value, dec!(55));
    assert_eq!(holding.stop_loss, dec!(4.2));
}

#[test]
fn test_zero_shares_guards_cost_basis_division() {
    let mut record = row("2025-07-01", "ABEO");
    record.shares = "0".to_string();
    record.cost_basis = "50".to_string();

    let snapshot = HoldingsService::new().build(&[record]);

    assert_eq!(snapshot[0].cost_basis_per_share, Decimal::ZERO);
}

#[test]
fn test_zero_cost_basis_guards_pnl_percent() {
    let mut record = row("2025-07-01", "ABEO");
    record.shares = "10".to_string();
    record.pnl = "5".to_string();

    let snapshot = HoldingsService::new().build(&[record]);

    assert_eq!(snapshot[0].pnl_percent, Decimal::ZERO);
}

#[test]
fn test_non_numeric_cells_coerce_to_zero() {
    let mut record = row("2025-07-01", "ABEO");
    record.shares = "ten".to_string();
    record.current_price = "".to_string();

    let snapshot = HoldingsService::new().build(&[record]);

    assert_eq!(snapshot[0].shares, Decimal::ZERO);
    assert_eq!(snapshot[0].current_price, Decimal::ZERO);
}

#[test]
fn test_rows_with_unparseable_dates_are_skipped() {
    let rows = vec![row("garbage", "ABEO"), row("2025-07-01", "CADL")];
    let snapshot = HoldingsService::new().build(&rows);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].ticker, "CADL");
}

//! Delimited-text parsing for the published ledgers.
//!
//! The parser turns raw CSV text into rows keyed by the (trimmed) header
//! names. It validates nothing beyond structure: a header/row field-count
//! mismatch pads or truncates instead of failing, fully blank lines are
//! skipped, and an empty input yields an empty table so downstream builders
//! can degrade to their documented defaults.

use csv::ReaderBuilder;
use log::debug;

use super::ledger_model::{portfolio_columns, trade_columns, PortfolioRecord, TradeRecord};

/// A parsed ledger table: trimmed headers plus rows normalized to the header
/// width.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell in `row` by column name. Absent columns read as empty,
    /// matching the permissive source format.
    pub fn field<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parses raw delimited text with a header line into a keyed table.
pub fn parse_table(text: &str) -> ParsedTable {
    let content = strip_bom(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false) // headers handled manually
        .flexible(true) // allow varying number of fields
        .from_reader(content.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                // Fully blank lines carry no row
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                records.push(row);
            }
            Err(e) => {
                debug!("Skipping unreadable ledger line {}: {}", idx + 1, e);
            }
        }
    }

    let mut iter = records.into_iter();
    let headers: Vec<String> = match iter.next() {
        Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
        None => return ParsedTable::default(),
    };

    // Normalize row lengths to the header width
    let header_count = headers.len();
    let rows: Vec<Vec<String>> = iter
        .enumerate()
        .map(|(idx, mut row)| {
            if row.len() < header_count {
                row.resize(header_count, String::new());
            } else if row.len() > header_count {
                debug!(
                    "Ledger row {} has {} fields, expected {}; extra fields ignored",
                    idx + 1,
                    row.len(),
                    header_count
                );
                row.truncate(header_count);
            }
            row
        })
        .collect();

    ParsedTable { headers, rows }
}

/// Parses portfolio ledger text into raw records, preserving row order.
pub fn parse_portfolio_ledger(text: &str) -> Vec<PortfolioRecord> {
    let table = parse_table(text);
    table
        .rows()
        .iter()
        .map(|row| PortfolioRecord {
            date: table.field(row, portfolio_columns::DATE).to_string(),
            ticker: table.field(row, portfolio_columns::TICKER).to_string(),
            shares: table.field(row, portfolio_columns::SHARES).to_string(),
            cost_basis: table.field(row, portfolio_columns::COST_BASIS).to_string(),
            stop_loss: table.field(row, portfolio_columns::STOP_LOSS).to_string(),
            current_price: table
                .field(row, portfolio_columns::CURRENT_PRICE)
                .to_string(),
            total_value: table.field(row, portfolio_columns::TOTAL_VALUE).to_string(),
            pnl: table.field(row, portfolio_columns::PNL).to_string(),
            action: table.field(row, portfolio_columns::ACTION).to_string(),
            cash_balance: table
                .field(row, portfolio_columns::CASH_BALANCE)
                .to_string(),
            total_equity: table
                .field(row, portfolio_columns::TOTAL_EQUITY)
                .to_string(),
        })
        .collect()
}

/// Parses trade ledger text into raw records, preserving row order.
pub fn parse_trade_ledger(text: &str) -> Vec<TradeRecord> {
    let table = parse_table(text);
    table
        .rows()
        .iter()
        .map(|row| TradeRecord {
            date: table.field(row, trade_columns::DATE).to_string(),
            ticker: table.field(row, trade_columns::TICKER).to_string(),
            shares_bought: table
                .field(row, trade_columns::SHARES_BOUGHT)
                .to_string(),
            buy_price: table.field(row, trade_columns::BUY_PRICE).to_string(),
            cost_basis: table.field(row, trade_columns::COST_BASIS).to_string(),
            pnl: table.field(row, trade_columns::PNL).to_string(),
            reason: table.field(row, trade_columns::REASON).to_string(),
            shares_sold: table.field(row, trade_columns::SHARES_SOLD).to_string(),
            sell_price: table.field(row, trade_columns::SELL_PRICE).to_string(),
        })
        .collect()
}

/// Strips a UTF-8 BOM if present.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let text = "Date,Ticker,Shares\n2025-07-01,ABEO,10\n2025-07-01,TOTAL,";
        let table = parse_table(text);

        assert_eq!(table.headers(), ["Date", "Ticker", "Shares"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.field(&table.rows()[0], "Ticker"), "ABEO");
    }

    #[test]
    fn test_headers_are_trimmed() {
        let text = " Date , Ticker \n2025-07-01,ABEO";
        let table = parse_table(text);

        assert_eq!(table.headers(), ["Date", "Ticker"]);
        assert_eq!(table.field(&table.rows()[0], "Date"), "2025-07-01");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "Date,Ticker\n\n2025-07-01,ABEO\n   ,\n2025-07-02,CADL\n";
        let table = parse_table(text);

        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let text = "Date,Ticker,Shares\n2025-07-01,ABEO";
        let table = parse_table(text);

        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.field(&table.rows()[0], "Shares"), "");
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let text = "Date,Ticker\n2025-07-01,ABEO,extra,fields";
        let table = parse_table(text);

        assert_eq!(table.rows()[0].len(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = parse_table("");
        assert!(table.headers().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_absent_column_reads_empty() {
        let text = "Date,Ticker\n2025-07-01,ABEO";
        let table = parse_table(text);

        assert_eq!(table.field(&table.rows()[0], "Total Equity"), "");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let text = "\u{feff}Date,Ticker\n2025-07-01,ABEO";
        let table = parse_table(text);

        assert_eq!(table.headers(), ["Date", "Ticker"]);
    }

    #[test]
    fn test_quoted_fields() {
        let text = "Date,Reason\n2025-07-01,\"Thesis intact, adding on weakness\"";
        let table = parse_table(text);

        assert_eq!(
            table.field(&table.rows()[0], "Reason"),
            "Thesis intact, adding on weakness"
        );
    }

    #[test]
    fn test_parse_portfolio_ledger_keys_by_header() {
        let text = "Date,Ticker,Shares,Cost Basis,Stop Loss,Current Price,Total Value,PnL,Action,Cash Balance,Total Equity\n\
                    2025-07-01,ABEO,10,50,4.2,5.5,55,5,HOLD,,\n\
                    2025-07-01,TOTAL,,,,,55,5,,45.32,100.32";
        let records = parse_portfolio_ledger(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "ABEO");
        assert_eq!(records[0].cost_basis, "50");
        assert!(records[1].is_aggregate());
        assert_eq!(records[1].total_equity, "100.32");
    }

    #[test]
    fn test_parse_trade_ledger_keys_by_header() {
        let text = "Date,Ticker,Shares Bought,Buy Price,Cost Basis,PnL,Reason,Shares Sold,Sell Price\n\
                    2025-06-30,ABEO,10,5.77,57.7,0,Initial position,,";
        let records = parse_trade_ledger(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].shares_bought, "10");
        assert_eq!(records[0].reason, "Initial position");
        assert_eq!(records[0].shares_sold, "");
    }
}

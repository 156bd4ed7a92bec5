//! Holdings snapshot builder.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::holdings_model::HoldingSnapshot;
use crate::ledger::PortfolioRecord;
use crate::utils::num_utils::decimal_or_zero;

/// Extracts the most recent per-ticker position state from the ledger.
#[derive(Debug, Default)]
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Builds the snapshot from the rows dated at the maximum date among
    /// position (non-aggregate) rows. Aggregate rows never appear in the
    /// snapshot; with no position rows at all the snapshot is empty. Row
    /// order follows the ledger.
    pub fn build(&self, records: &[PortfolioRecord]) -> Vec<HoldingSnapshot> {
        let latest_date = records
            .iter()
            .filter(|r| !r.is_aggregate())
            .filter_map(|r| r.parsed_date())
            .max();

        let Some(latest_date) = latest_date else {
            return Vec::new();
        };

        records
            .iter()
            .filter(|r| !r.is_aggregate() && r.parsed_date() == Some(latest_date))
            .map(|record| self.snapshot_from(record))
            .collect()
    }

    fn snapshot_from(&self, record: &PortfolioRecord) -> HoldingSnapshot {
        let shares = decimal_or_zero(&record.shares);
        let cost_basis = decimal_or_zero(&record.cost_basis);
        let pnl = decimal_or_zero(&record.pnl);

        let cost_basis_per_share = if shares.is_zero() {
            warn!(
                "Position {} has zero shares; cost basis per share set to zero",
                record.ticker
            );
            Decimal::ZERO
        } else {
            cost_basis / shares
        };

        let pnl_percent = if cost_basis > Decimal::ZERO {
            pnl / cost_basis * dec!(100)
        } else {
            Decimal::ZERO
        };

        HoldingSnapshot {
            ticker: record.ticker.clone(),
            shares,
            cost_basis_per_share,
            current_price: decimal_or_zero(&record.current_price),
            total_value: decimal_or_zero(&record.total_value),
            pnl,
            pnl_percent,
            stop_loss: decimal_or_zero(&record.stop_loss),
        }
    }
}

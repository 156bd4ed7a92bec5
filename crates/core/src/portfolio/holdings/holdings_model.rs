use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One open position as of the most recent date present in the ledger.
///
/// `cost_basis_per_share` is derived from the ledger's aggregate cost basis;
/// `pnl_percent` is the position PnL relative to that aggregate basis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSnapshot {
    pub ticker: String,
    pub shares: Decimal,
    pub cost_basis_per_share: Decimal,
    pub current_price: Decimal,
    pub total_value: Decimal,
    pub pnl: Decimal,
    pub pnl_percent: Decimal,
    pub stop_loss: Decimal,
}

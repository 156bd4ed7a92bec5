use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::HoldingSnapshot;
use crate::portfolio::metrics::PortfolioMetrics;
use crate::portfolio::performance::PerformanceSample;
use crate::trades::TradeView;

/// Every projection the dashboard shows, recomputed in full from the ledgers
/// on each load. Nothing here is mutated in place or persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub performance: Vec<PerformanceSample>,
    pub holdings: Vec<HoldingSnapshot>,
    pub metrics: PortfolioMetrics,
    pub trades: Vec<TradeView>,
}

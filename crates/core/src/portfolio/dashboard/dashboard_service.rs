//! Dashboard load pipeline.

use std::sync::Arc;

use log::warn;

use super::dashboard_model::DashboardData;
use crate::benchmark::BenchmarkProviderTrait;
use crate::ledger::{parse_portfolio_ledger, parse_trade_ledger, LedgerSourceTrait};
use crate::portfolio::holdings::HoldingsService;
use crate::portfolio::metrics::MetricsService;
use crate::portfolio::performance::PerformanceService;
use crate::trades::TradeHistoryService;

/// Runs the whole pipeline: retrieve raw ledger text once, parse, and build
/// every projection.
///
/// A retrieval failure degrades that ledger to an empty row set, so a load
/// always produces a `DashboardData` - the defaults documented on each
/// builder stand in for whatever could not be read. Reload is a fresh call;
/// the service holds no state between loads.
pub struct DashboardService {
    source: Arc<dyn LedgerSourceTrait>,
    performance_service: PerformanceService,
    holdings_service: HoldingsService,
    metrics_service: MetricsService,
    trade_history_service: TradeHistoryService,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn LedgerSourceTrait>,
        benchmark: Arc<dyn BenchmarkProviderTrait>,
    ) -> Self {
        Self {
            source,
            performance_service: PerformanceService::new(benchmark),
            holdings_service: HoldingsService::new(),
            metrics_service: MetricsService::new(),
            trade_history_service: TradeHistoryService::new(),
        }
    }

    pub async fn load(&self) -> DashboardData {
        let (portfolio_text, trade_text) = tokio::join!(
            self.source.portfolio_ledger(),
            self.source.trade_ledger()
        );

        let portfolio_text = portfolio_text.unwrap_or_else(|e| {
            warn!("Portfolio ledger unavailable ({e}); continuing with empty ledger");
            String::new()
        });
        let trade_text = trade_text.unwrap_or_else(|e| {
            warn!("Trade ledger unavailable ({e}); continuing with empty ledger");
            String::new()
        });

        let records = parse_portfolio_ledger(&portfolio_text);
        let trade_records = parse_trade_ledger(&trade_text);

        let performance = self.performance_service.build(&records);
        let holdings = self.holdings_service.build(&records);
        let metrics = self.metrics_service.build(&records, &performance);
        let trades = self.trade_history_service.build(&trade_records);

        DashboardData {
            performance,
            holdings,
            metrics,
            trades,
        }
    }
}

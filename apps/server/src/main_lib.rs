use std::sync::Arc;

use microfolio_core::benchmark::StaticBenchmarkTable;
use microfolio_core::dashboard::{DashboardData, DashboardService};
use microfolio_core::ledger::{FileLedgerSource, HttpLedgerSource, LedgerSourceTrait};
use tokio::sync::RwLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Shared server state: the load pipeline plus the last computed projection.
pub struct AppState {
    dashboard_service: DashboardService,
    cache: RwLock<Option<DashboardData>>,
}

impl AppState {
    /// The cached projection, computing it first if no load has run yet.
    pub async fn snapshot(&self) -> DashboardData {
        if let Some(data) = self.cache.read().await.clone() {
            return data;
        }
        self.reload().await
    }

    /// Re-runs the whole pipeline and replaces the cached projection.
    pub async fn reload(&self) -> DashboardData {
        let data = self.dashboard_service.load().await;
        *self.cache.write().await = Some(data.clone());
        data
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("MF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let source: Arc<dyn LedgerSourceTrait> = if config.portfolio_ledger.starts_with("http://")
        || config.portfolio_ledger.starts_with("https://")
    {
        Arc::new(HttpLedgerSource::new(
            &config.portfolio_ledger,
            &config.trade_ledger,
        ))
    } else {
        Arc::new(FileLedgerSource::new(
            &config.portfolio_ledger,
            &config.trade_ledger,
        ))
    };

    let benchmark = Arc::new(StaticBenchmarkTable::sp500());

    Arc::new(AppState {
        dashboard_service: DashboardService::new(source, benchmark),
        cache: RwLock::new(None),
    })
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use microfolio_core::dashboard::DashboardData;
use microfolio_core::holdings::HoldingSnapshot;
use microfolio_core::metrics::PortfolioMetrics;
use microfolio_core::performance::PerformanceSample;
use microfolio_core::trades::TradeView;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardData>> {
    Ok(Json(state.snapshot().await))
}

async fn get_performance(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PerformanceSample>>> {
    Ok(Json(state.snapshot().await.performance))
}

async fn get_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HoldingSnapshot>>> {
    Ok(Json(state.snapshot().await.holdings))
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioMetrics>> {
    Ok(Json(state.snapshot().await.metrics))
}

async fn get_trades(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TradeView>>> {
    Ok(Json(state.snapshot().await.trades))
}

/// Reload is a whole-pipeline re-invocation; the engine itself caches
/// nothing between loads.
async fn refresh(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.reload().await;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/performance", get(get_performance))
        .route("/holdings", get(get_holdings))
        .route("/metrics", get(get_metrics))
        .route("/trades", get(get_trades))
        .route("/refresh", post(refresh))
}

//! Dashboard orchestrator - one load, every projection.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::*;
pub use dashboard_service::*;

//! Scalar portfolio metrics summary.

mod metrics_model;
mod metrics_service;

pub use metrics_model::*;
pub use metrics_service::*;

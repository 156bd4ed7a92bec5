//! Microfolio Core - ledger transformation and metrics engine.
//!
//! This crate turns the experiment's append-only CSV ledgers into derived,
//! read-only projections: a benchmarked performance series, a point-in-time
//! holdings snapshot, a trade history view, and a scalar metrics summary.
//! It performs no I/O beyond the injected ledger source and holds no state
//! between loads.

pub mod benchmark;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod research;
pub mod trades;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

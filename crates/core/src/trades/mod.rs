//! Trade ledger view - buy/sell classification and display ordering.

mod trade_service;

pub use trade_service::*;

#[cfg(test)]
mod trade_service_tests;

//! Benchmark index module - the injected provider trait and the static
//! S&P 500 table rebased to the portfolio's starting capital.

mod benchmark_service;
mod benchmark_traits;

pub use benchmark_service::*;
pub use benchmark_traits::*;

//! Ledger ingestion - raw row records, delimited-text parsing, and the
//! retrieval seam that supplies raw ledger text.

mod ledger_model;
mod ledger_parser;
mod ledger_source;

pub use ledger_model::*;
pub use ledger_parser::*;
pub use ledger_source::*;

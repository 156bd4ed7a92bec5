//! Research exchange schema - the wire types of the external analysis
//! service, documented for boundary completeness. The engine neither
//! produces nor consumes these.

mod research_model;

pub use research_model::*;

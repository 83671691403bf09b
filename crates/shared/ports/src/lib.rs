//! Stalk Ports
//!
//! Port definitions (traits) for the Stalk price-bounds engine.
//! These define the boundaries between the enumeration engine, the reducers
//! and the presentation layer.

mod reducer;
mod source;

pub use reducer::PatternReducer;
pub use source::CandidateSource;

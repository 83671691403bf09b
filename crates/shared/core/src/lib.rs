//! Stalk Core Domain
//!
//! Pure domain types for the Stalk price-bounds engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    CandidateSequence, CandidateSet, ObservationVector, ReduceMode, Reduction, StatisticsBundle,
};
pub use error::{ObservationError, ObservationField, ObservationResult};
pub use values::{Multiplier, Price, SLOTS, SlotSeries, price_at};

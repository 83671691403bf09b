//! Stalk Engine - price-window bounds from partial observations
//!
//! ```text
//!   ObservationVector
//!          │
//!          ▼
//!  ┌───────────────────┐    PatternCatalog (injected, read-only)
//!  │ PatternEnumerator │◄───────────────────────────────────────
//!  └─────────┬─────────┘
//!            │ CandidateSet (grouped by shape)
//!            ▼
//!  ┌───────────────────┐
//!  │  Reducers (×3)    │  bounds, mean, guaranteed min
//!  └─────────┬─────────┘
//!            ▼
//!   StatisticsBundle
//! ```
//!
//! Every call is independent: no state carries over between forecasts, so a
//! stale result can simply be dropped.

pub mod enumerator;
pub mod forecast;
pub mod sampler;

pub use enumerator::{FeasibleLayout, PatternEnumerator, Resolution};
pub use forecast::{Forecast, ForecastEngine, ShapeSummary};
pub use sampler::{IllustrativePath, PathSampler};

// Re-export the pieces callers need alongside the engine
pub use stalk_catalog::PatternCatalog;
pub use stalk_core::{CandidateSet, ObservationVector, ReduceMode, Reduction, StatisticsBundle};
pub use stalk_reduce::{reduce, summarize};

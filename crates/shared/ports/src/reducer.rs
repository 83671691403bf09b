use stalk_core::{CandidateSet, ReduceMode, Reduction};

/// Port for folding a candidate set into a statistic
///
/// Implementations:
/// - Bounds (per-slot min/max)
/// - Mean (per-slot average)
/// - Guaranteed minimum (min over candidates of each candidate's max)
///
/// Every implementation must accept an empty set and report "no data"
/// instead of failing.
pub trait PatternReducer: Send + Sync {
    /// Which statistic this reducer produces
    fn mode(&self) -> ReduceMode;

    /// Fold every candidate of every shape into the statistic
    fn reduce(&self, candidates: &CandidateSet) -> Reduction;

    /// Get the name of the reducer
    fn name(&self) -> &str;
}

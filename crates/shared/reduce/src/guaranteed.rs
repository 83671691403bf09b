use stalk_core::{CandidateSet, ReduceMode, Reduction};
use stalk_ports::PatternReducer;

/// Minimax guarantee: the lowest of every candidate's best price
///
/// Whichever candidate materialises, selling at its best slot yields at least
/// this much.
pub struct GuaranteedMinReducer;

impl GuaranteedMinReducer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GuaranteedMinReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternReducer for GuaranteedMinReducer {
    fn mode(&self) -> ReduceMode {
        ReduceMode::GuaranteedMin
    }

    fn reduce(&self, candidates: &CandidateSet) -> Reduction {
        let value = candidates.iter().map(|c| c.peak()).min();
        Reduction::GuaranteedMin { value }
    }

    fn name(&self) -> &str {
        "Guaranteed Minimum"
    }
}

//! Stalk Reducers
//!
//! Implementations of the `PatternReducer` port. Every reducer folds the
//! flattened candidate set (all shapes together, one unit of weight per
//! candidate) and reports "no data" for an empty set.

mod bounds;
mod guaranteed;
mod mean;

pub use bounds::BoundsReducer;
pub use guaranteed::GuaranteedMinReducer;
pub use mean::MeanReducer;

// Re-export the trait from ports for convenience
pub use stalk_ports::PatternReducer;

use stalk_core::{CandidateSet, ReduceMode, Reduction, StatisticsBundle};

/// Factory function to create a reducer for a mode
pub fn create_reducer(mode: ReduceMode) -> Box<dyn PatternReducer> {
    match mode {
        ReduceMode::Bounds => Box::new(BoundsReducer::new()),
        ReduceMode::Mean => Box::new(MeanReducer::new()),
        ReduceMode::GuaranteedMin => Box::new(GuaranteedMinReducer::new()),
    }
}

/// Run a single reduction
pub fn reduce(candidates: &CandidateSet, mode: ReduceMode) -> Reduction {
    create_reducer(mode).reduce(candidates)
}

/// Run every reduction and collect the results into one bundle
pub fn summarize(candidates: &CandidateSet) -> StatisticsBundle {
    let bundle = StatisticsBundle::from_reductions(ReduceMode::ALL.into_iter().map(|mode| {
        let reducer = create_reducer(mode);
        log::trace!("Running {} reducer", reducer.name());
        reducer.reduce(candidates)
    }));
    log::debug!(
        "Summarized {} candidates (guaranteed min {:?})",
        candidates.len(),
        bundle.guaranteed_min
    );
    bundle
}

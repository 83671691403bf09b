use rust_decimal::Decimal;
use stalk_core::{CandidateSet, ReduceMode, Reduction, SLOTS};
use stalk_ports::PatternReducer;

/// Per-slot arithmetic mean, equal weight per candidate (not per shape)
pub struct MeanReducer;

impl MeanReducer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MeanReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternReducer for MeanReducer {
    fn mode(&self) -> ReduceMode {
        ReduceMode::Mean
    }

    fn reduce(&self, candidates: &CandidateSet) -> Reduction {
        let mut sums = [Decimal::ZERO; SLOTS];
        let mut count: u64 = 0;

        for candidate in candidates.iter() {
            for (sum, &price) in sums.iter_mut().zip(candidate.prices()) {
                *sum += Decimal::from(price);
            }
            count += 1;
        }

        let mean = if count == 0 {
            [None; SLOTS]
        } else {
            let count = Decimal::from(count);
            sums.map(|sum| Some(sum / count))
        };

        Reduction::Mean { mean }
    }

    fn name(&self) -> &str {
        "Mean"
    }
}

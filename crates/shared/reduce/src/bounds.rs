use stalk_core::{CandidateSet, Price, ReduceMode, Reduction, SLOTS, SlotSeries};
use stalk_ports::PatternReducer;

/// Per-slot envelope: the lowest and highest price any candidate takes
pub struct BoundsReducer;

impl BoundsReducer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoundsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternReducer for BoundsReducer {
    fn mode(&self) -> ReduceMode {
        ReduceMode::Bounds
    }

    fn reduce(&self, candidates: &CandidateSet) -> Reduction {
        let mut min: SlotSeries<Option<Price>> = [None; SLOTS];
        let mut max: SlotSeries<Option<Price>> = [None; SLOTS];

        for candidate in candidates.iter() {
            for (slot, &price) in candidate.prices().iter().enumerate() {
                min[slot] = Some(min[slot].map_or(price, |m| m.min(price)));
                max[slot] = Some(max[slot].map_or(price, |m| m.max(price)));
            }
        }

        Reduction::Bounds { min, max }
    }

    fn name(&self) -> &str {
        "Bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_set;

    #[test]
    fn test_envelope_spans_all_shapes() {
        let Reduction::Bounds { min, max } = BoundsReducer::new().reduce(&sample_set()) else {
            panic!("expected bounds");
        };

        // Slot 0: ramp 60, flat 80, flat 100
        assert_eq!(min[0], Some(60));
        assert_eq!(max[0], Some(100));
        // Slot 11: ramp 170
        assert_eq!(min[11], Some(80));
        assert_eq!(max[11], Some(170));
    }

    #[test]
    fn test_empty_set_has_no_bounds() {
        let Reduction::Bounds { min, max } = BoundsReducer::new().reduce(&CandidateSet::new())
        else {
            panic!("expected bounds");
        };

        assert!(min.iter().all(Option::is_none));
        assert!(max.iter().all(Option::is_none));
    }
}

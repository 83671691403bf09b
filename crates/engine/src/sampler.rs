//! Illustrative path sampler
//!
//! Draws one plausible price series for display. Results are random by
//! nature and are never fed to the reducers; bounds come only from the
//! enumerator's floor/ceiling candidates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use stalk_core::{ObservationVector, Price, SlotSeries};

use crate::enumerator::PatternEnumerator;

/// One sampled series, with the shape and base price it was drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustrativePath {
    pub shape: String,
    pub base_price: Price,
    pub prices: SlotSeries<Price>,
    pub base_relaxed: bool,
}

/// Samples illustrative paths
pub struct PathSampler {
    rng: StdRng,
}

impl PathSampler {
    /// Create a sampler seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible paths
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a feasible layout uniformly and draw each open slot uniformly in its range
    ///
    /// Returns `None` when no shape fits the observations.
    pub fn sample(
        &mut self,
        enumerator: &PatternEnumerator,
        observations: &ObservationVector,
    ) -> Option<IllustrativePath> {
        let resolution = enumerator.resolve(observations);
        if resolution.is_empty() {
            return None;
        }

        let pick = &resolution.layouts[self.rng.gen_range(0..resolution.layouts.len())];
        let prices = pick.bounds.map(|(low, high)| {
            if low < high {
                self.rng.gen_range(low..=high)
            } else {
                low
            }
        });

        Some(IllustrativePath {
            shape: pick.shape.to_string(),
            base_price: pick.base_price,
            prices,
            base_relaxed: resolution.base_relaxed,
        })
    }
}

impl Default for PathSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalk_catalog::PatternCatalog;
    use stalk_core::SLOTS;
    use stalk_reduce::summarize;
    use std::sync::Arc;

    fn enumerator() -> PatternEnumerator {
        PatternEnumerator::new(Arc::new(PatternCatalog::default()))
    }

    #[test]
    fn test_same_seed_same_path() {
        let enumerator = enumerator();
        let obs = ObservationVector::unobserved(Some(100));

        let first = PathSampler::with_seed(7).sample(&enumerator, &obs);
        let second = PathSampler::with_seed(7).sample(&enumerator, &obs);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_keeps_observations() {
        let enumerator = enumerator();
        let obs = ObservationVector::from_signed(Some(100), &[Some(88), Some(84)]).unwrap();
        let mut sampler = PathSampler::with_seed(42);

        for _ in 0..20 {
            let path = sampler.sample(&enumerator, &obs).unwrap();
            assert_eq!(path.prices[0], 88);
            assert_eq!(path.prices[1], 84);
            assert_eq!(path.base_price, 100);
            assert!(obs.agrees_with(&path.prices));
        }
    }

    #[test]
    fn test_path_stays_inside_bounds() {
        let enumerator = enumerator();
        let decreasing_from_110: Vec<Option<i64>> =
            (0..SLOTS as i64).map(|k| Some(99 - 4 * k)).collect();
        let inputs = vec![
            ObservationVector::unobserved(Some(90)),
            ObservationVector::unobserved(None),
            ObservationVector::from_signed(Some(100), &[Some(88), Some(84), Some(80)]).unwrap(),
            ObservationVector::from_signed(Some(95), &[None, None, None, None, Some(300)]).unwrap(),
            // Conflicts with its base price, so only the fallback fits
            ObservationVector::from_signed(Some(90), &decreasing_from_110).unwrap(),
        ];

        for obs in inputs {
            let bundle = summarize(&enumerator.enumerate(&obs));
            for seed in 0..25 {
                let path = PathSampler::with_seed(seed).sample(&enumerator, &obs).unwrap();
                for slot in 0..SLOTS {
                    let low = bundle.min_series[slot].unwrap();
                    let high = bundle.max_series[slot].unwrap();
                    assert!(
                        low <= path.prices[slot] && path.prices[slot] <= high,
                        "seed {} slot {}: {} not in {}..={}",
                        seed,
                        slot,
                        path.prices[slot],
                        low,
                        high
                    );
                }
            }
        }
    }

    #[test]
    fn test_fallback_path_is_marked() {
        let daily: Vec<Option<i64>> = (0..SLOTS as i64).map(|k| Some(99 - 4 * k)).collect();
        let obs = ObservationVector::from_signed(Some(90), &daily).unwrap();
        let path = PathSampler::with_seed(3).sample(&enumerator(), &obs).unwrap();

        assert!(path.base_relaxed);
        assert_ne!(path.base_price, 90);
    }

    #[test]
    fn test_large_base_price_never_panics() {
        let enumerator = enumerator();
        let obs = ObservationVector::unobserved(Some(800_000_000));

        for seed in 0..200 {
            let path = PathSampler::with_seed(seed).sample(&enumerator, &obs).unwrap();
            assert_eq!(path.base_price, 800_000_000);
        }
    }

    #[test]
    fn test_no_path_when_nothing_fits() {
        let obs = ObservationVector::new(None, [Some(5_000); SLOTS]);
        let path = PathSampler::with_seed(1).sample(&enumerator(), &obs);
        assert!(path.is_none());
    }
}

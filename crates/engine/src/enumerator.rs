//! Pattern Enumerator - candidate generation under partial observations
//!
//! For every shape of the injected catalog:
//! 1. Expand each admissible phase-length assignment to per-slot multiplier ranges
//! 2. For each candidate base price, turn those ranges into integer price ranges
//! 3. Drop the layout if any observed price falls outside its slot's range
//! 4. Emit a floor series and a ceiling series, observed slots held exactly
//!
//! When nothing survives and a base price was given, the whole pass is rerun
//! with the base price unknown: the daily prices outvote the single base price.

use std::sync::Arc;

use stalk_catalog::{PatternCatalog, ShapeLayout};
use stalk_core::{CandidateSequence, CandidateSet, ObservationVector, Price, SLOTS, SlotSeries};
use stalk_ports::CandidateSource;

/// A layout that fits every observation under one base price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibleLayout<'a> {
    pub shape: &'a str,
    pub base_price: Price,
    /// Inclusive `(low, high)` price per slot; observed slots have `low == high`
    pub bounds: SlotSeries<(Price, Price)>,
}

impl FeasibleLayout<'_> {
    /// Every unobserved slot at its lowest reachable price
    pub fn floor(&self) -> SlotSeries<Price> {
        self.bounds.map(|(low, _)| low)
    }

    /// Every unobserved slot at its highest reachable price
    pub fn ceiling(&self) -> SlotSeries<Price> {
        self.bounds.map(|(_, high)| high)
    }
}

/// Feasible layouts for one observation vector, after the fallback policy
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub layouts: Vec<FeasibleLayout<'a>>,
    /// True when the given base price was ignored to find any layout
    pub base_relaxed: bool,
}

impl Resolution<'_> {
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

struct ShapeLayouts {
    name: String,
    layouts: Vec<ShapeLayout>,
}

/// Enumerates candidate sequences for a catalog
///
/// Layouts depend only on the catalog, so they are expanded once here and
/// reused by every call. The enumerator holds no mutable state and can be
/// shared across threads.
pub struct PatternEnumerator {
    catalog: Arc<PatternCatalog>,
    shapes: Vec<ShapeLayouts>,
}

impl PatternEnumerator {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        let shapes = catalog
            .shapes()
            .iter()
            .map(|shape| ShapeLayouts {
                name: shape.name.clone(),
                layouts: shape.layouts(),
            })
            .collect::<Vec<_>>();

        for shape in &shapes {
            log::debug!("Shape '{}': {} layouts", shape.name, shape.layouts.len());
        }

        Self { catalog, shapes }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Candidate set for the observations, applying the base-price fallback
    pub fn enumerate(&self, observations: &ObservationVector) -> CandidateSet {
        let resolution = self.resolve(observations);
        let mut candidates = self.collect(&resolution.layouts);
        if resolution.base_relaxed {
            candidates.mark_base_relaxed();
        }
        candidates
    }

    /// Candidate set for the observations exactly as given, no fallback
    pub fn enumerate_strict(&self, observations: &ObservationVector) -> CandidateSet {
        self.collect(&self.feasible_layouts(observations))
    }

    /// Feasible layouts for the observations, applying the base-price fallback
    pub fn resolve(&self, observations: &ObservationVector) -> Resolution<'_> {
        let layouts = self.feasible_layouts(observations);
        if !layouts.is_empty() {
            return Resolution {
                layouts,
                base_relaxed: false,
            };
        }

        let Some(base_price) = observations.base_price() else {
            log::warn!("No shape is consistent with the observations");
            return Resolution {
                layouts,
                base_relaxed: false,
            };
        };

        log::info!(
            "No shape is consistent with base price {}, retrying with base price unknown",
            base_price
        );
        let layouts = self.feasible_layouts(&observations.with_base_price(None));
        if layouts.is_empty() {
            log::warn!(
                "No shape is consistent with the observations, even ignoring the base price"
            );
        }

        Resolution {
            layouts,
            base_relaxed: true,
        }
    }

    /// Every (layout, base price) pair that fits the observations exactly as given
    pub fn feasible_layouts(&self, observations: &ObservationVector) -> Vec<FeasibleLayout<'_>> {
        let bases = match observations.base_price() {
            Some(base) => base..=base,
            None => self.catalog.base_prices().prices(),
        };

        let mut feasible = Vec::new();
        for shape in &self.shapes {
            let before = feasible.len();
            for layout in &shape.layouts {
                for base in bases.clone() {
                    if let Some(fit) = fit_layout(&shape.name, layout, base, observations) {
                        feasible.push(fit);
                    }
                }
            }
            log::debug!(
                "Shape '{}': {} feasible layouts",
                shape.name,
                feasible.len() - before
            );
        }

        feasible
    }

    fn collect(&self, layouts: &[FeasibleLayout<'_>]) -> CandidateSet {
        let mut candidates = CandidateSet::with_shapes(self.shapes.iter().map(|s| s.name.as_str()));
        for layout in layouts {
            candidates.insert(CandidateSequence::new(layout.shape, layout.floor()));
            candidates.insert(CandidateSequence::new(layout.shape, layout.ceiling()));
        }
        candidates
    }
}

impl CandidateSource for PatternEnumerator {
    fn enumerate(&self, observations: &ObservationVector) -> CandidateSet {
        PatternEnumerator::enumerate(self, observations)
    }

    fn shape_names(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.name.clone()).collect()
    }
}

/// Price ranges of a layout under `base`
///
/// `None` if an observation falls outside its slot's range, or if a slot's
/// price would not fit in a `Price`.
fn fit_layout<'a>(
    shape: &'a str,
    layout: &ShapeLayout,
    base: Price,
    observations: &ObservationVector,
) -> Option<FeasibleLayout<'a>> {
    let mut bounds = [(0, 0); SLOTS];

    for (slot, range) in layout.slots.iter().enumerate() {
        let Some((low, high)) = range.price_bounds(base) else {
            log::debug!("Shape '{}' overflows at base price {}, skipping", shape, base);
            return None;
        };
        bounds[slot] = match observations.slot(slot) {
            Some(price) if low <= price && price <= high => (price, price),
            Some(_) => return None,
            None => (low, high),
        };
    }

    Some(FeasibleLayout {
        shape,
        base_price: base,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stalk_catalog::{BasePriceRange, DECREASING, LARGE_SPIKE, PhaseSpec, STEADY, ShapeSpec};

    fn default_enumerator() -> PatternEnumerator {
        PatternEnumerator::new(Arc::new(PatternCatalog::default()))
    }

    fn flat_catalog(low: rust_decimal::Decimal, high: rust_decimal::Decimal) -> PatternEnumerator {
        let catalog = PatternCatalog::new(
            vec![ShapeSpec::new("flat", vec![PhaseSpec::fixed("drift", 12, low, high)])],
            BasePriceRange { min: 100, max: 100 },
        )
        .unwrap();
        PatternEnumerator::new(Arc::new(catalog))
    }

    #[test]
    fn test_floor_and_ceiling_per_layout() {
        let enumerator = flat_catalog(dec!(0.5), dec!(1.5));
        let set = enumerator.enumerate(&ObservationVector::unobserved(Some(100)));

        let group = set.group("flat").unwrap();
        assert_eq!(group.len(), 2);
        let prices: Vec<_> = group.iter().map(|c| c.prices()[0]).collect();
        assert_eq!(prices, vec![50, 150]);
    }

    #[test]
    fn test_fully_observed_layout_collapses_to_one_candidate() {
        let enumerator = flat_catalog(dec!(0.5), dec!(1.5));
        let obs = ObservationVector::new(Some(100), [Some(120); SLOTS]);
        let set = enumerator.enumerate(&obs);

        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().prices(), &[120; SLOTS]);
    }

    #[test]
    fn test_observation_outside_range_discards_layout() {
        let enumerator = flat_catalog(dec!(0.5), dec!(1.5));
        let mut slots = [None; SLOTS];
        slots[4] = Some(151);
        let set = enumerator.enumerate_strict(&ObservationVector::new(Some(100), slots));

        assert!(set.is_empty());
        assert_eq!(set.shape_names().collect::<Vec<_>>(), vec!["flat"]);
    }

    #[test]
    fn test_zero_base_with_nonzero_observation_is_inconsistent() {
        let enumerator = default_enumerator();
        let mut slots = [None; SLOTS];
        slots[0] = Some(100);
        let obs = ObservationVector::new(Some(0), slots);

        assert!(enumerator.enumerate_strict(&obs).is_empty());

        // The fallback trusts the daily price instead
        let set = enumerator.enumerate(&obs);
        assert!(!set.is_empty());
        assert!(set.base_relaxed());
    }

    #[test]
    fn test_zero_base_with_zero_observations_is_consistent() {
        let enumerator = default_enumerator();
        let obs = ObservationVector::new(Some(0), [Some(0); SLOTS]);
        let set = enumerator.enumerate(&obs);

        assert!(!set.base_relaxed());
        assert_eq!(set.group_len(STEADY), 1);
    }

    #[test]
    fn test_unknown_base_tries_whole_base_range() {
        let enumerator = default_enumerator();
        let layouts = enumerator.feasible_layouts(&ObservationVector::unobserved(None));

        let decreasing: Vec<_> = layouts.iter().filter(|l| l.shape == DECREASING).collect();
        // One layout, 21 base prices
        assert_eq!(decreasing.len(), 21);
        assert_eq!(decreasing.first().map(|l| l.base_price), Some(90));
        assert_eq!(decreasing.last().map(|l| l.base_price), Some(110));
    }

    #[test]
    fn test_no_fallback_without_base_price() {
        let enumerator = default_enumerator();
        let obs = ObservationVector::new(None, [Some(1_000); SLOTS]);
        let set = enumerator.enumerate(&obs);

        assert!(set.is_empty());
        assert!(!set.base_relaxed());
    }

    #[test]
    fn test_unrepresentable_prices_drop_the_layout() {
        let enumerator = default_enumerator();
        let obs = ObservationVector::unobserved(Some(800_000_000));
        let layouts = enumerator.feasible_layouts(&obs);

        assert!(!layouts.is_empty());
        for layout in &layouts {
            assert!(layout.bounds.iter().all(|&(low, high)| low <= high), "{}", layout.shape);
        }
        // The 2.0..6.0 peak cannot be priced at this base
        assert!(layouts.iter().all(|l| l.shape != LARGE_SPIKE));

        // Small-spike surge tops out at 2.0
        let bundle = stalk_reduce::summarize(&enumerator.enumerate(&obs));
        assert_eq!(bundle.ceiling(), Some(1_600_000_000));
    }

    #[test]
    fn test_candidate_source_lists_catalog_shapes() {
        let enumerator = default_enumerator();
        let names = CandidateSource::shape_names(&enumerator);

        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "fluctuating");
    }
}

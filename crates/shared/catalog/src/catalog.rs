//! The pattern catalog and its loading/validation
//!
//! The catalog is configuration: the engine receives it by injection and never
//! mutates it. The built-in default covers the five shapes a trading window is
//! known to follow; a JSON file can replace it wholesale at start-up.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use stalk_core::{Multiplier, Price, SLOTS};

use crate::error::{CatalogError, CatalogResult};
use crate::phase::{PhaseSpec, Slope};
use crate::shape::ShapeSpec;

pub const FLUCTUATING: &str = "fluctuating";
pub const LARGE_SPIKE: &str = "large-spike";
pub const DECREASING: &str = "decreasing";
pub const SMALL_SPIKE: &str = "small-spike";
pub const STEADY: &str = "steady";

/// Widest base-price range a catalog may declare
pub const MAX_BASE_PRICES: u32 = 1_000;

/// Base prices to try when the caller does not know the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePriceRange {
    pub min: Price,
    pub max: Price,
}

impl Default for BasePriceRange {
    fn default() -> Self {
        Self { min: 90, max: 110 }
    }
}

impl BasePriceRange {
    pub fn prices(&self) -> RangeInclusive<Price> {
        self.min..=self.max
    }
}

/// Ordered, named set of shapes plus the admissible base-price range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCatalog {
    shapes: Vec<ShapeSpec>,
    #[serde(default)]
    base_prices: BasePriceRange,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self {
            shapes: vec![
                ShapeSpec::new(
                    FLUCTUATING,
                    vec![
                        PhaseSpec::continuous("rise", 0, 6, dec!(0.9), dec!(1.4)),
                        dip(),
                        PhaseSpec::continuous("rise", 1, 7, dec!(0.9), dec!(1.4)),
                        dip(),
                        PhaseSpec::continuous("rise", 0, 6, dec!(0.9), dec!(1.4)),
                    ],
                ),
                ShapeSpec::new(
                    LARGE_SPIKE,
                    vec![
                        PhaseSpec::stepped(
                            "decline",
                            1,
                            7,
                            dec!(0.85),
                            dec!(0.9),
                            dec!(0.03),
                            dec!(0.05),
                        ),
                        PhaseSpec::fixed("rise", 1, dec!(0.9), dec!(1.4)),
                        PhaseSpec::fixed("surge", 1, dec!(1.4), dec!(2.0)),
                        PhaseSpec::fixed("peak", 1, dec!(2.0), dec!(6.0)),
                        PhaseSpec::fixed("surge", 1, dec!(1.4), dec!(2.0)),
                        PhaseSpec::fixed("fade", 1, dec!(0.9), dec!(1.4)),
                        PhaseSpec::continuous("slump", 0, 6, dec!(0.4), dec!(0.9)),
                    ],
                ),
                ShapeSpec::new(
                    DECREASING,
                    vec![PhaseSpec::stepped(
                        "decline",
                        12,
                        12,
                        dec!(0.85),
                        dec!(0.9),
                        dec!(0.03),
                        dec!(0.05),
                    )],
                ),
                ShapeSpec::new(
                    SMALL_SPIKE,
                    vec![
                        slide(),
                        PhaseSpec::fixed("rise", 2, dec!(0.9), dec!(1.4)),
                        PhaseSpec::fixed("surge", 3, dec!(1.4), dec!(2.0)),
                        slide(),
                    ],
                ),
                ShapeSpec::new(
                    STEADY,
                    vec![PhaseSpec::fixed("drift", 12, dec!(0.9), dec!(1.4))],
                ),
            ],
            base_prices: BasePriceRange::default(),
        }
    }
}

/// Fluctuating dip: two or three falling slots
fn dip() -> PhaseSpec {
    PhaseSpec::stepped("dip", 2, 3, dec!(0.6), dec!(0.8), dec!(0.04), dec!(0.10))
}

/// Small-spike decline on either side of the spike
fn slide() -> PhaseSpec {
    PhaseSpec::stepped("decline", 0, 7, dec!(0.4), dec!(0.9), dec!(0.03), dec!(0.05))
}

impl PatternCatalog {
    /// Create a validated catalog
    pub fn new(shapes: Vec<ShapeSpec>, base_prices: BasePriceRange) -> CatalogResult<Self> {
        let catalog = Self {
            shapes,
            base_prices,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate catalog from a JSON string
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        log::debug!(
            "Loaded catalog with {} shapes, base prices {}..={}",
            catalog.shapes.len(),
            catalog.base_prices.min,
            catalog.base_prices.max
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Reject catalogs the enumerator cannot use
    pub fn validate(&self) -> CatalogResult<()> {
        if self.shapes.is_empty() {
            return Err(CatalogError::Empty);
        }
        if self.base_prices.min > self.base_prices.max
            || self.base_prices.max - self.base_prices.min >= MAX_BASE_PRICES
        {
            return Err(CatalogError::InvalidBaseRange {
                min: self.base_prices.min,
                max: self.base_prices.max,
            });
        }

        let mut seen = HashSet::new();
        for shape in &self.shapes {
            if !seen.insert(shape.name.as_str()) {
                return Err(CatalogError::DuplicateShape(shape.name.clone()));
            }
            if shape.phases.is_empty() {
                return Err(CatalogError::NoPhases(shape.name.clone()));
            }

            for (index, phase) in shape.phases.iter().enumerate() {
                if phase.min_len > phase.max_len || phase.max_len > SLOTS {
                    return Err(CatalogError::InvalidLength {
                        shape: shape.name.clone(),
                        phase: index,
                        min: phase.min_len,
                        max: phase.max_len,
                    });
                }
                if phase.low < Decimal::ZERO || phase.low > phase.high {
                    return Err(CatalogError::InvalidMultiplier {
                        shape: shape.name.clone(),
                        phase: index,
                        low: phase.low,
                        high: phase.high,
                    });
                }
                if let Slope::Stepped { min_drop, max_drop } = phase.slope {
                    if min_drop < Decimal::ZERO || min_drop > max_drop {
                        return Err(CatalogError::InvalidDrop {
                            shape: shape.name.clone(),
                            phase: index,
                            min: min_drop,
                            max: max_drop,
                        });
                    }
                }
            }

            if shape.length_assignments().is_empty() {
                return Err(CatalogError::Unsatisfiable(shape.name.clone()));
            }
        }

        Ok(())
    }

    pub fn shapes(&self) -> &[ShapeSpec] {
        &self.shapes
    }

    /// Shape names in catalog order
    pub fn shape_names(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|s| s.name.as_str())
    }

    pub fn shape(&self, name: &str) -> Option<&ShapeSpec> {
        self.shapes.iter().find(|s| s.name == name)
    }

    pub fn base_prices(&self) -> BasePriceRange {
        self.base_prices
    }

    /// Lowest and highest multiplier any slot of any shape can take
    pub fn multiplier_span(&self) -> (Multiplier, Multiplier) {
        let mut low = Decimal::MAX;
        let mut high = Decimal::MIN;

        for phase in self.shapes.iter().flat_map(|s| &s.phases) {
            for offset in 0..phase.max_len {
                let range = phase.slot_range(offset);
                low = low.min(range.low);
                high = high.max(range.high);
            }
        }

        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = PatternCatalog::default();

        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.shape_names().collect::<Vec<_>>(),
            vec![FLUCTUATING, LARGE_SPIKE, DECREASING, SMALL_SPIKE, STEADY]
        );
    }

    #[test]
    fn test_default_assignment_counts() {
        let catalog = PatternCatalog::default();
        let count = |name: &str| catalog.shape(name).unwrap().length_assignments().len();

        // Decline runs 1..=7 then the five spike slots, slump takes the rest
        assert_eq!(count(LARGE_SPIKE), 7);
        // Leading decline 0..=7, trailing decline takes the rest
        assert_eq!(count(SMALL_SPIKE), 8);
        assert_eq!(count(DECREASING), 1);
        assert_eq!(count(STEADY), 1);
        assert!(count(FLUCTUATING) > 10);
    }

    #[test]
    fn test_multiplier_span() {
        let (low, high) = PatternCatalog::default().multiplier_span();

        // Small spike decline bottoms out at 0.4 - 6 * 0.05
        assert_eq!(low, dec!(0.1));
        assert_eq!(high, dec!(6.0));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = PatternCatalog::default();
        let json = catalog.to_json().unwrap();
        let parsed = PatternCatalog::from_json(&json).unwrap();

        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_json_accepts_numeric_multipliers() {
        let json = r#"{
            "shapes": [
                {"name": "flat", "phases": [
                    {"min_len": 12, "max_len": 12, "low": 0.9, "high": 1.1}
                ]}
            ],
            "base_prices": {"min": 95, "max": 105}
        }"#;

        let catalog = PatternCatalog::from_json(json).unwrap();
        assert_eq!(catalog.shapes().len(), 1);
        assert_eq!(catalog.shapes()[0].phases[0].slope, Slope::Continuous);
        assert_eq!(catalog.base_prices(), BasePriceRange { min: 95, max: 105 });
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let shape = ShapeSpec::new("flat", vec![PhaseSpec::fixed("drift", 12, dec!(1), dec!(1))]);
        let err = PatternCatalog::new(vec![shape.clone(), shape], BasePriceRange::default())
            .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateShape("flat".to_string()));
    }

    #[test]
    fn test_rejects_unsatisfiable_shape() {
        let shape = ShapeSpec::new(
            "short",
            vec![PhaseSpec::continuous("drift", 2, 6, dec!(0.9), dec!(1.1))],
        );
        let err = PatternCatalog::new(vec![shape], BasePriceRange::default()).unwrap_err();

        assert_eq!(err, CatalogError::Unsatisfiable("short".to_string()));
    }

    #[test]
    fn test_rejects_inverted_multiplier() {
        let shape = ShapeSpec::new(
            "bad",
            vec![PhaseSpec::fixed("drift", 12, dec!(1.2), dec!(0.8))],
        );
        let err = PatternCatalog::new(vec![shape], BasePriceRange::default()).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidMultiplier { phase: 0, .. }));
    }

    #[test]
    fn test_rejects_empty_and_bad_base_range() {
        assert_eq!(
            PatternCatalog::new(Vec::new(), BasePriceRange::default()).unwrap_err(),
            CatalogError::Empty
        );

        let shape = ShapeSpec::new("flat", vec![PhaseSpec::fixed("drift", 12, dec!(1), dec!(1))]);
        let err = PatternCatalog::new(vec![shape], BasePriceRange { min: 110, max: 90 })
            .unwrap_err();
        assert_eq!(err, CatalogError::InvalidBaseRange { min: 110, max: 90 });
    }

    #[test]
    fn test_rejects_unbounded_base_range() {
        let shape = ShapeSpec::new("flat", vec![PhaseSpec::fixed("drift", 12, dec!(1), dec!(1))]);
        let range = BasePriceRange {
            min: 0,
            max: u32::MAX,
        };
        let err = PatternCatalog::new(vec![shape.clone()], range).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidBaseRange {
                min: 0,
                max: u32::MAX
            }
        );

        let widest = BasePriceRange {
            min: 1,
            max: MAX_BASE_PRICES,
        };
        assert!(PatternCatalog::new(vec![shape], widest).is_ok());
    }

    #[test]
    fn test_oversized_phase_length_is_an_error() {
        let json = r#"{
            "shapes": [
                {"name": "huge", "phases": [
                    {"min_len": 0, "max_len": 18446744073709551615, "low": 0.9, "high": 1.1},
                    {"min_len": 0, "max_len": 18446744073709551615, "low": 0.9, "high": 1.1},
                    {"min_len": 0, "max_len": 18446744073709551615, "low": 0.9, "high": 1.1}
                ]}
            ]
        }"#;

        let err = PatternCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidLength { phase: 0, .. }));
    }
}

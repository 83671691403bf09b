use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Reduction;
use crate::values::{Price, SLOTS, SlotSeries};

/// Everything the reducers derived from one candidate set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsBundle {
    pub min_series: SlotSeries<Option<Price>>,
    pub max_series: SlotSeries<Option<Price>>,
    pub mean_series: SlotSeries<Option<Decimal>>,
    pub guaranteed_min: Option<Price>,
}

impl Default for StatisticsBundle {
    fn default() -> Self {
        Self {
            min_series: [None; SLOTS],
            max_series: [None; SLOTS],
            mean_series: [None; SLOTS],
            guaranteed_min: None,
        }
    }
}

impl StatisticsBundle {
    /// Bundle with every field set to "no data"
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fold reductions into a bundle; later reductions of the same mode win
    pub fn from_reductions(reductions: impl IntoIterator<Item = Reduction>) -> Self {
        let mut bundle = Self::empty();
        for reduction in reductions {
            bundle.apply(reduction);
        }
        bundle
    }

    pub fn apply(&mut self, reduction: Reduction) {
        match reduction {
            Reduction::Bounds { min, max } => {
                self.min_series = min;
                self.max_series = max;
            }
            Reduction::Mean { mean } => self.mean_series = mean,
            Reduction::GuaranteedMin { value } => self.guaranteed_min = value,
        }
    }

    /// False when no candidate survived enumeration
    pub fn has_data(&self) -> bool {
        self.guaranteed_min.is_some() || self.max_series.iter().any(Option::is_some)
    }

    /// Highest price any candidate reaches
    pub fn ceiling(&self) -> Option<Price> {
        self.max_series.iter().flatten().copied().max()
    }

    /// Lowest price any candidate reaches
    pub fn floor(&self) -> Option<Price> {
        self.min_series.iter().flatten().copied().min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_bundle_has_no_data() {
        let bundle = StatisticsBundle::empty();
        assert!(!bundle.has_data());
        assert_eq!(bundle.ceiling(), None);
        assert_eq!(bundle.floor(), None);
    }

    #[test]
    fn test_from_reductions_fills_every_field() {
        let bundle = StatisticsBundle::from_reductions([
            Reduction::Bounds {
                min: [Some(50); SLOTS],
                max: [Some(150); SLOTS],
            },
            Reduction::Mean {
                mean: [Some(dec!(100)); SLOTS],
            },
            Reduction::GuaranteedMin { value: Some(120) },
        ]);

        assert!(bundle.has_data());
        assert_eq!(bundle.floor(), Some(50));
        assert_eq!(bundle.ceiling(), Some(150));
        assert_eq!(bundle.mean_series[4], Some(dec!(100)));
        assert_eq!(bundle.guaranteed_min, Some(120));
    }
}

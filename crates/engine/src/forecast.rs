use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stalk_catalog::PatternCatalog;
use stalk_core::{ObservationVector, StatisticsBundle};

use crate::enumerator::PatternEnumerator;

/// How many candidates one shape contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub shape: String,
    pub candidates: usize,
}

/// One complete recompute: the inputs, the per-shape counts and the statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub observations: ObservationVector,
    pub shapes: Vec<ShapeSummary>,
    pub candidate_count: usize,
    /// The base price was ignored because no shape fitted it
    pub base_relaxed: bool,
    pub statistics: StatisticsBundle,
}

impl Forecast {
    /// False when no shape fits the observations ("insufficient information")
    pub fn has_data(&self) -> bool {
        self.statistics.has_data()
    }
}

/// Enumerate then reduce, in one call
pub struct ForecastEngine {
    enumerator: PatternEnumerator,
}

impl ForecastEngine {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self {
            enumerator: PatternEnumerator::new(catalog),
        }
    }

    pub fn enumerator(&self) -> &PatternEnumerator {
        &self.enumerator
    }

    pub fn forecast(&self, observations: &ObservationVector) -> Forecast {
        let candidates = self.enumerator.enumerate(observations);
        let statistics = stalk_reduce::summarize(&candidates);

        let shapes = self
            .enumerator
            .catalog()
            .shape_names()
            .map(|name| ShapeSummary {
                shape: name.to_string(),
                candidates: candidates.group_len(name),
            })
            .collect();

        log::debug!(
            "Forecast: {} candidates, base relaxed: {}",
            candidates.len(),
            candidates.base_relaxed()
        );

        Forecast {
            observations: observations.clone(),
            shapes,
            candidate_count: candidates.len(),
            base_relaxed: candidates.base_relaxed(),
            statistics,
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(Arc::new(PatternCatalog::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_reports_every_shape() {
        let forecast =
            ForecastEngine::default().forecast(&ObservationVector::unobserved(Some(100)));

        assert!(forecast.has_data());
        assert_eq!(forecast.shapes.len(), 5);
        assert_eq!(
            forecast.candidate_count,
            forecast.shapes.iter().map(|s| s.candidates).sum::<usize>()
        );
        assert!(!forecast.base_relaxed);
    }

    #[test]
    fn test_forecast_without_data() {
        let obs = ObservationVector::new(None, [Some(9_999); stalk_core::SLOTS]);
        let forecast = ForecastEngine::default().forecast(&obs);

        assert!(!forecast.has_data());
        assert_eq!(forecast.candidate_count, 0);
        assert_eq!(forecast.statistics, StatisticsBundle::empty());
    }
}

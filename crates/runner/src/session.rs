use stalk_core::ObservationVector;
use stalk_engine::{ForecastEngine, PathSampler};

use crate::config::RunnerConfig;
use crate::error::Result;
use crate::report::Report;

/// Engine, optional sampler and settings shared by every recompute
pub struct Session {
    engine: ForecastEngine,
    sampler: Option<PathSampler>,
    config: RunnerConfig,
}

impl Session {
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let engine = ForecastEngine::new(config.load_catalog()?);
        let sampler = config.sample.then(|| match config.seed {
            Some(seed) => PathSampler::with_seed(seed),
            None => PathSampler::new(),
        });

        Ok(Self {
            engine,
            sampler,
            config,
        })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Forecast the observations and wrap the result for printing
    pub fn report(&mut self, observations: &ObservationVector) -> Report {
        let forecast = self.engine.forecast(observations);
        let path = self
            .sampler
            .as_mut()
            .and_then(|sampler| sampler.sample(self.engine.enumerator(), observations));

        log::info!(
            "Forecast for {} known slots: {} candidates",
            observations.known_count(),
            forecast.candidate_count
        );

        Report::new(forecast, path, &self.config)
    }
}

//! Forecast rendering for the terminal

use std::fmt::Write as _;

use serde::Serialize;
use stalk_chart::{ChartData, ForecastAdapter, SeriesKind};
use stalk_engine::{Forecast, IllustrativePath};

use crate::config::{OutputFormat, RunnerConfig};
use crate::error::{Result, RunnerError};

/// Everything printed for one forecast
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub forecast: Forecast,
    pub chart: ChartData,
    pub path: Option<IllustrativePath>,
}

impl Report {
    pub fn new(forecast: Forecast, path: Option<IllustrativePath>, config: &RunnerConfig) -> Self {
        let chart = ForecastAdapter::new(config.locale)
            .build(&forecast.observations, &forecast.statistics);
        Self {
            forecast,
            chart,
            path,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| RunnerError::Output(e.to_string()))
            }
            OutputFormat::Table => Ok(self.render_table()),
        }
    }

    fn render_table(&self) -> String {
        let mut out = String::new();

        if let Some(notice) = &self.chart.notice {
            let _ = writeln!(out, "{}", notice);
            return out;
        }

        let column = |kind| {
            self.chart
                .series(kind)
                .map(|s| s.data)
                .unwrap_or([None; stalk_core::SLOTS])
        };
        let daily = column(SeriesKind::DailyPrice);
        let min = column(SeriesKind::Minimum);
        let average = column(SeriesKind::Average);
        let max = column(SeriesKind::Maximum);
        let title = |kind| {
            self.chart
                .series(kind)
                .map(|s| s.label.clone())
                .unwrap_or_default()
        };

        let _ = writeln!(
            out,
            "{:<14} {:>12} {:>12} {:>12} {:>12}",
            "",
            title(SeriesKind::DailyPrice),
            title(SeriesKind::Minimum),
            title(SeriesKind::Average),
            title(SeriesKind::Maximum)
        );
        for (slot, label) in self.chart.labels.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<14} {:>12} {:>12} {:>12} {:>12}",
                label,
                cell(daily[slot]),
                cell(min[slot]),
                cell(average[slot]),
                cell(max[slot])
            );
        }

        let _ = writeln!(
            out,
            "\n{}: {}",
            title(SeriesKind::GuaranteedMin),
            cell(self.forecast.statistics.guaranteed_min)
        );

        let shapes: Vec<String> = self
            .forecast
            .shapes
            .iter()
            .map(|s| format!("{} {}", s.shape, s.candidates))
            .collect();
        let _ = writeln!(
            out,
            "candidates: {} ({})",
            self.forecast.candidate_count,
            shapes.join(", ")
        );

        if self.forecast.base_relaxed {
            let _ = writeln!(out, "base price ignored: no shape fits it");
        }

        if let Some(path) = &self.path {
            let prices: Vec<String> = path.prices.iter().map(u32::to_string).collect();
            let _ = writeln!(
                out,
                "sample path ({} @ {}): {}",
                path.shape,
                path.base_price,
                prices.join(",")
            );
        }

        out
    }
}

fn cell(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalk_core::{ObservationVector, SLOTS};
    use stalk_engine::ForecastEngine;

    #[test]
    fn test_table_lists_every_slot() {
        let obs = ObservationVector::new(Some(90), [Some(100); SLOTS]);
        let forecast = ForecastEngine::default().forecast(&obs);
        let table = Report::new(forecast, None, &RunnerConfig::default())
            .render(OutputFormat::Table)
            .unwrap();

        assert!(table.contains("Mon AM"));
        assert!(table.contains("Sat PM"));
        assert!(table.contains("Guaranteed Min: 100"));
        assert!(!table.contains("base price ignored"));
    }

    #[test]
    fn test_table_notice_without_data() {
        let obs = ObservationVector::new(None, [Some(5_000); SLOTS]);
        let forecast = ForecastEngine::default().forecast(&obs);
        let table = Report::new(forecast, None, &RunnerConfig::default())
            .render(OutputFormat::Table)
            .unwrap();

        assert_eq!(table.trim(), "Insufficient information");
    }

    #[test]
    fn test_json_contains_chart_and_statistics() {
        let forecast =
            ForecastEngine::default().forecast(&ObservationVector::unobserved(Some(100)));
        let json = Report::new(forecast, None, &RunnerConfig::default())
            .render(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["chart"]["series"].as_array().map(Vec::len), Some(6));
        assert!(value["forecast"]["statistics"]["guaranteed_min"].is_number());
        assert!(value["path"].is_null());
    }
}

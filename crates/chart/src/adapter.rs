use rust_decimal::prelude::ToPrimitive;
use stalk_core::{ObservationVector, Price, SLOTS, SlotSeries, StatisticsBundle};

use crate::locale::{LabelKey, Locale};
use crate::series::{ChartData, ChartSeries, SeriesKind, SeriesStyle};

/// Builds chart series from observations and a statistics bundle
///
/// Series order: buy price, guaranteed min, daily prices, average, maximum,
/// minimum. The max and min bands fill toward the average line.
pub struct ForecastAdapter {
    locale: Locale,
}

impl ForecastAdapter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn build(
        &self,
        observations: &ObservationVector,
        statistics: &StatisticsBundle,
    ) -> ChartData {
        let label = |key| self.locale.label(key).to_string();

        // Averages are shown truncated toward zero
        let average: SlotSeries<Option<Price>> = statistics
            .mean_series
            .map(|mean| mean.and_then(|m| m.trunc().to_u32()));

        let series = vec![
            ChartSeries {
                kind: SeriesKind::BuyPrice,
                label: label(LabelKey::BuyPrice),
                data: [observations.base_price(); SLOTS],
                style: SeriesStyle::dashed("#7B6C53", 5, 15),
            },
            ChartSeries {
                kind: SeriesKind::GuaranteedMin,
                label: label(LabelKey::GuaranteedMin),
                data: [statistics.guaranteed_min; SLOTS],
                style: SeriesStyle::dashed("#007D75", 3, 6),
            },
            ChartSeries {
                kind: SeriesKind::DailyPrice,
                label: label(LabelKey::DailyPrice),
                data: *observations.slots(),
                style: SeriesStyle::solid("#EF8341").with_points(),
            },
            ChartSeries {
                kind: SeriesKind::Average,
                label: label(LabelKey::Average),
                data: average,
                style: SeriesStyle::solid("#F0E16F"),
            },
            ChartSeries {
                kind: SeriesKind::Maximum,
                label: label(LabelKey::Maximum),
                data: statistics.max_series,
                style: SeriesStyle::solid("#A5D5A5").filled_to(SeriesKind::Average),
            },
            ChartSeries {
                kind: SeriesKind::Minimum,
                label: label(LabelKey::Minimum),
                data: statistics.min_series,
                style: SeriesStyle::solid("#88C9A1").filled_to(SeriesKind::Average),
            },
        ];

        let insufficient_information = !statistics.has_data();

        ChartData {
            labels: self.locale.slot_labels(),
            series,
            insufficient_information,
            notice: insufficient_information.then(|| label(LabelKey::InsufficientInformation)),
        }
    }
}

impl Default for ForecastAdapter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

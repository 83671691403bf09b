use serde::{Deserialize, Serialize};
use stalk_core::{Price, SlotSeries};

/// Which line of the forecast chart a series is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    BuyPrice,
    GuaranteedMin,
    DailyPrice,
    Average,
    Maximum,
    Minimum,
}

/// What the area under a series is filled toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    None,
    Series(SeriesKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Line colour, `#RRGGBB`
    pub color: String,
    /// Dash pattern `[on, off]`; solid when absent
    pub dash: Option<[u8; 2]>,
    pub fill: Fill,
    pub show_points: bool,
}

impl SeriesStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_string(),
            dash: None,
            fill: Fill::None,
            show_points: false,
        }
    }

    pub fn dashed(color: &str, on: u8, off: u8) -> Self {
        Self {
            dash: Some([on, off]),
            ..Self::solid(color)
        }
    }

    pub fn with_points(mut self) -> Self {
        self.show_points = true;
        self
    }

    pub fn filled_to(mut self, kind: SeriesKind) -> Self {
        self.fill = Fill::Series(kind);
        self
    }
}

/// One labelled line of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub label: String,
    pub data: SlotSeries<Option<Price>>,
    pub style: SeriesStyle,
}

/// Everything a renderer needs to draw one forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// No shape fits the observations; show `notice` instead of a range
    pub insufficient_information: bool,
    pub notice: Option<String>,
}

impl ChartData {
    pub fn series(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

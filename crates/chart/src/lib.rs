//! Stalk Chart - forecast adapter
//!
//! Maps a `StatisticsBundle` and the raw observations onto presentation
//! series (labels, colours, fill regions). Rendering itself is left to the
//! caller; `ChartData` serializes to JSON for any charting front end.

mod adapter;
mod locale;
mod series;

pub use adapter::ForecastAdapter;
pub use locale::{LabelKey, Locale};
pub use series::{ChartData, ChartSeries, Fill, SeriesKind, SeriesStyle};

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, SlotSeries};

/// Which statistic a reducer folds a candidate set into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceMode {
    /// Per-slot minimum and maximum
    Bounds,
    /// Per-slot arithmetic mean, one unit of weight per candidate
    Mean,
    /// Minimum over candidates of each candidate's best price
    GuaranteedMin,
}

impl ReduceMode {
    pub const ALL: [ReduceMode; 3] = [
        ReduceMode::Bounds,
        ReduceMode::Mean,
        ReduceMode::GuaranteedMin,
    ];
}

impl fmt::Display for ReduceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceMode::Bounds => write!(f, "bounds"),
            ReduceMode::Mean => write!(f, "mean"),
            ReduceMode::GuaranteedMin => write!(f, "guaranteed-min"),
        }
    }
}

/// Output of one reduction. `None` entries mean "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Reduction {
    Bounds {
        min: SlotSeries<Option<Price>>,
        max: SlotSeries<Option<Price>>,
    },
    Mean {
        mean: SlotSeries<Option<Decimal>>,
    },
    GuaranteedMin {
        value: Option<Price>,
    },
}

impl Reduction {
    pub fn mode(&self) -> ReduceMode {
        match self {
            Reduction::Bounds { .. } => ReduceMode::Bounds,
            Reduction::Mean { .. } => ReduceMode::Mean,
            Reduction::GuaranteedMin { .. } => ReduceMode::GuaranteedMin,
        }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stalk_core::{Multiplier, Price, price_at};

/// How the multiplier behaves across the slots of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slope {
    /// Every slot draws from the same range
    Continuous,
    /// Each slot may sit lower than the last by `min_drop..=max_drop`
    Stepped {
        min_drop: Multiplier,
        max_drop: Multiplier,
    },
}

/// Inclusive multiplier interval for one slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierRange {
    pub low: Multiplier,
    pub high: Multiplier,
}

impl MultiplierRange {
    pub fn new(low: Multiplier, high: Multiplier) -> Self {
        Self { low, high }
    }

    /// Integer price interval reachable from `base`
    ///
    /// Returns `(round(base * low), round(base * high))`, or `None` when
    /// either end does not fit in a `Price`.
    pub fn price_bounds(&self, base: Price) -> Option<(Price, Price)> {
        Some((price_at(base, self.low)?, price_at(base, self.high)?))
    }
}

/// A contiguous run of slots inside a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    /// Label used in logs and diagnostics
    #[serde(default)]
    pub label: String,
    pub min_len: usize,
    pub max_len: usize,
    pub low: Multiplier,
    pub high: Multiplier,
    #[serde(default = "default_slope")]
    pub slope: Slope,
}

fn default_slope() -> Slope {
    Slope::Continuous
}

impl PhaseSpec {
    /// Phase with a variable length and a flat multiplier range
    pub fn continuous(
        label: &str,
        min_len: usize,
        max_len: usize,
        low: Multiplier,
        high: Multiplier,
    ) -> Self {
        Self {
            label: label.to_string(),
            min_len,
            max_len,
            low,
            high,
            slope: Slope::Continuous,
        }
    }

    /// Phase whose range slides down by a bounded drop per slot
    pub fn stepped(
        label: &str,
        min_len: usize,
        max_len: usize,
        low: Multiplier,
        high: Multiplier,
        min_drop: Multiplier,
        max_drop: Multiplier,
    ) -> Self {
        Self {
            label: label.to_string(),
            min_len,
            max_len,
            low,
            high,
            slope: Slope::Stepped { min_drop, max_drop },
        }
    }

    /// Phase that always covers exactly `len` slots
    pub fn fixed(label: &str, len: usize, low: Multiplier, high: Multiplier) -> Self {
        Self::continuous(label, len, len, low, high)
    }

    /// Multiplier range for the `offset`-th slot of this phase (0-based)
    ///
    /// Stepped phases widen downward: the low end falls by `max_drop` per slot
    /// and the high end by `min_drop`. Neither end goes below zero.
    pub fn slot_range(&self, offset: usize) -> MultiplierRange {
        match self.slope {
            Slope::Continuous => MultiplierRange::new(self.low, self.high),
            Slope::Stepped { min_drop, max_drop } => {
                let steps = Decimal::from(offset as u64);
                let low = (self.low - steps * max_drop).max(Decimal::ZERO);
                let high = (self.high - steps * min_drop).max(low);
                MultiplierRange::new(low, high)
            }
        }
    }
}

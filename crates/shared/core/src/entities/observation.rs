use serde::{Deserialize, Serialize};

use crate::error::{ObservationError, ObservationField, ObservationResult};
use crate::values::{Price, SLOTS, SlotSeries};

/// What the caller has seen so far: an optional base price and one optional
/// price per slot.
///
/// Immutable once built. Every constructor that accepts raw numbers validates
/// them, so a vector that exists is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationVector {
    base_price: Option<Price>,
    slots: SlotSeries<Option<Price>>,
}

impl ObservationVector {
    /// Create from already-validated prices
    pub fn new(base_price: Option<Price>, slots: SlotSeries<Option<Price>>) -> Self {
        Self { base_price, slots }
    }

    /// Create with every slot unknown
    pub fn unobserved(base_price: Option<Price>) -> Self {
        Self::new(base_price, [None; SLOTS])
    }

    /// Create from signed integers, rejecting negatives and values that do not fit a price.
    ///
    /// Fewer than `SLOTS` observations are padded with unknowns.
    pub fn from_signed(base_price: Option<i64>, slots: &[Option<i64>]) -> ObservationResult<Self> {
        let base_price = base_price
            .map(|value| signed_to_price(ObservationField::BasePrice, value))
            .transpose()?;

        let mut prices = [None; SLOTS];
        check_slot_count(slots.len())?;
        for (index, value) in slots.iter().enumerate() {
            prices[index] = value
                .map(|v| signed_to_price(ObservationField::Slot(index), v))
                .transpose()?;
        }

        Ok(Self::new(base_price, prices))
    }

    /// Create from floating point input, rejecting fractional, negative and non-finite values
    pub fn from_f64(base_price: Option<f64>, slots: &[Option<f64>]) -> ObservationResult<Self> {
        let base_price = base_price
            .map(|value| float_to_price(ObservationField::BasePrice, value))
            .transpose()?;

        let mut prices = [None; SLOTS];
        check_slot_count(slots.len())?;
        for (index, value) in slots.iter().enumerate() {
            prices[index] = value
                .map(|v| float_to_price(ObservationField::Slot(index), v))
                .transpose()?;
        }

        Ok(Self::new(base_price, prices))
    }

    /// Parse textual input: a base price token and a comma separated slot list.
    ///
    /// `""`, `"-"` and `"?"` mean unknown.
    pub fn parse(base_price: &str, slots: &str) -> ObservationResult<Self> {
        let base_price = parse_token(ObservationField::BasePrice, base_price)?;

        let tokens: Vec<&str> = if slots.trim().is_empty() {
            Vec::new()
        } else {
            slots.split(',').collect()
        };
        check_slot_count(tokens.len())?;

        let mut prices = [None; SLOTS];
        for (index, token) in tokens.iter().enumerate() {
            prices[index] = parse_token(ObservationField::Slot(index), token)?;
        }

        Ok(Self::new(base_price, prices))
    }

    pub fn base_price(&self) -> Option<Price> {
        self.base_price
    }

    pub fn slots(&self) -> &SlotSeries<Option<Price>> {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<Price> {
        self.slots.get(index).copied().flatten()
    }

    /// Iterate over `(slot index, observed price)` for known slots only
    pub fn known_slots(&self) -> impl Iterator<Item = (usize, Price)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.map(|price| (index, price)))
    }

    pub fn known_count(&self) -> usize {
        self.known_slots().count()
    }

    /// Same slot observations with a different base price
    pub fn with_base_price(&self, base_price: Option<Price>) -> Self {
        Self::new(base_price, self.slots)
    }

    /// Does a full price series agree with every known slot?
    pub fn agrees_with(&self, prices: &SlotSeries<Price>) -> bool {
        self.known_slots().all(|(index, price)| prices[index] == price)
    }
}

fn check_slot_count(actual: usize) -> ObservationResult<()> {
    if actual > SLOTS {
        return Err(ObservationError::SlotCount {
            expected: SLOTS,
            actual,
        });
    }
    Ok(())
}

fn signed_to_price(field: ObservationField, value: i64) -> ObservationResult<Price> {
    if value < 0 {
        return Err(ObservationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Price::try_from(value).map_err(|_| ObservationError::OutOfRange {
        field,
        value: value.to_string(),
    })
}

fn float_to_price(field: ObservationField, value: f64) -> ObservationResult<Price> {
    if !value.is_finite() || value > Price::MAX as f64 {
        return Err(ObservationError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }
    if value.fract() != 0.0 {
        return Err(ObservationError::NonIntegral {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ObservationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(value as Price)
}

fn parse_token(field: ObservationField, token: &str) -> ObservationResult<Option<Price>> {
    let token = token.trim();
    if matches!(token, "" | "-" | "?") {
        return Ok(None);
    }

    if let Ok(value) = token.parse::<i64>() {
        return signed_to_price(field, value).map(Some);
    }

    match token.parse::<f64>() {
        Ok(value) => float_to_price(field, value).map(Some),
        Err(_) => Err(ObservationError::Unparseable {
            field,
            input: token.to_string(),
        }),
    }
}

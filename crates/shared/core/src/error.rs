use std::fmt;

use thiserror::Error;

/// Which input of an observation vector a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationField {
    BasePrice,
    Slot(usize),
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationField::BasePrice => write!(f, "base price"),
            ObservationField::Slot(index) => write!(f, "slot {}", index),
        }
    }
}

/// Rejections raised while building an observation vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObservationError {
    #[error("Negative price for {field}: {value}")]
    Negative { field: ObservationField, value: String },

    #[error("Non-integral price for {field}: {value}")]
    NonIntegral { field: ObservationField, value: String },

    #[error("Price out of range for {field}: {value}")]
    OutOfRange { field: ObservationField, value: String },

    #[error("Expected at most {expected} slot observations, got {actual}")]
    SlotCount { expected: usize, actual: usize },

    #[error("Cannot parse {field}: {input:?}")]
    Unparseable { field: ObservationField, input: String },
}

pub type ObservationResult<T> = std::result::Result<T, ObservationError>;

use stalk_core::Multiplier;
use thiserror::Error;

/// Problems found while loading or validating a pattern catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog has no shapes")]
    Empty,

    #[error("Duplicate shape name: {0}")]
    DuplicateShape(String),

    #[error("Shape {0} has no phases")]
    NoPhases(String),

    #[error("Shape {shape} phase {phase}: length range {min}..={max} is invalid")]
    InvalidLength {
        shape: String,
        phase: usize,
        min: usize,
        max: usize,
    },

    #[error("Shape {shape} phase {phase}: multiplier range {low}..={high} is invalid")]
    InvalidMultiplier {
        shape: String,
        phase: usize,
        low: Multiplier,
        high: Multiplier,
    },

    #[error("Shape {shape} phase {phase}: drop range {min}..={max} is invalid")]
    InvalidDrop {
        shape: String,
        phase: usize,
        min: Multiplier,
        max: Multiplier,
    },

    #[error("Shape {0} has no phase-length assignment covering the whole window")]
    Unsatisfiable(String),

    #[error("Base price range {min}..={max} is invalid")]
    InvalidBaseRange { min: u32, max: u32 },

    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

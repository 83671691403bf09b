use stalk_catalog::CatalogError;
use stalk_core::ObservationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid observation: {0}")]
    Observation(#[from] ObservationError),

    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, RunnerError>;

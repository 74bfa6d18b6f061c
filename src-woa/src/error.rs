//! Error type for the whale optimizer

/// Errors raised while configuring a run or persisting its records
#[derive(Debug, thiserror::Error)]
pub enum WoaError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("dimension must be at least 1")]
    EmptyDimension,

    #[error("max iterations must be at least 1")]
    NoIterations,

    #[error("lower bound {lower} is greater than upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBounds { lower: f64, upper: f64 },

    #[error("failed to write optimization record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode optimization record: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, WoaError>;

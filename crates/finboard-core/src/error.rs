//! Error types for finboard.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level finboard error.
#[derive(Error, Debug)]
pub enum FinboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Series error: {0}")]
    Series(#[from] SeriesError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Time-series construction and filtering errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Malformed bar at index {index}: {reason}")]
    MalformedData { index: usize, reason: String },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl SeriesError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            index,
            reason: reason.into(),
        }
    }
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised around an external forecasting model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Cannot forecast from an empty history")]
    EmptyHistory,

    #[error("Forecast horizon must be at least one day")]
    InvalidHorizon,

    #[error("Model returned {got} values for {expected} horizon dates")]
    Misaligned { expected: usize, got: usize },

    #[error("Model returned a non-finite value at horizon step {index}")]
    NonFinite { index: usize },

    #[error("Model error: {0}")]
    Model(String),
}

/// Result type alias for finboard operations.
pub type FinboardResult<T> = Result<T, FinboardError>;

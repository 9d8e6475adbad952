//! Core types and traits for finboard.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, TimeSeries)
//! - Indicator output containers (IndicatorSeries, IndicatorMap)
//! - Core traits for indicators and forecasting models
//! - The error taxonomy shared by every other crate

pub mod error;
pub mod traits;
pub mod types;

pub use error::{
    DataError, FinboardError, FinboardResult, ForecastError, IndicatorError, SeriesError,
};
pub use traits::*;
pub use types::*;

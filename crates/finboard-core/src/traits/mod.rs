//! Core traits for finboard.

mod forecaster;
mod indicator;

pub use forecaster::{run_forecast, Forecaster};
pub use indicator::{require_positive, Indicator, MultiOutputIndicator};

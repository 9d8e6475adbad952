//! Core data types for finboard.

mod forecast;
mod indicator_map;
mod ohlcv;
mod series;

pub use forecast::{forecast_dates, Forecast};
pub use indicator_map::{IndicatorMap, IndicatorSeries};
pub use ohlcv::Bar;
pub use series::TimeSeries;

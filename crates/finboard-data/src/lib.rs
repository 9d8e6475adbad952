//! Loading OHLCV series from CSV and exporting indicator results.

mod csv_source;
mod export;

pub use csv_source::{from_reader, CsvDataSource};
pub use export::{to_json, write_csv};

use finboard_core::error::DataError;
use finboard_core::types::TimeSeries;
use std::path::Path;

/// Load a validated series from a CSV file.
pub fn load_csv(path: impl AsRef<Path>, symbol: Option<&str>) -> Result<TimeSeries, DataError> {
    let source = CsvDataSource::new(path)?;
    source.load_series(symbol)
}

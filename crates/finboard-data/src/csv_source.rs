//! CSV data source.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use finboard_core::error::DataError;
use finboard_core::types::{Bar, TimeSeries};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV record format.
///
/// Numeric cells that are empty or not numbers deserialize to `None` and
/// surface later as malformed bars.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(
        alias = "Date",
        alias = "date",
        alias = "timestamp",
        alias = "Timestamp",
        alias = ""
    )]
    date: String,
    #[serde(
        alias = "Open",
        alias = "open",
        alias = "Open Price (USD)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    open: Option<f64>,
    #[serde(
        alias = "High",
        alias = "high",
        alias = "High Price (USD)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    high: Option<f64>,
    #[serde(
        alias = "Low",
        alias = "low",
        alias = "Low Price (USD)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    low: Option<f64>,
    #[serde(
        alias = "Close",
        alias = "close",
        alias = "Close Price (USD)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    close: Option<f64>,
    #[serde(
        rename = "Adj Close",
        alias = "adj_close",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    adj_close: Option<f64>,
    #[serde(
        alias = "Volume",
        alias = "volume",
        alias = "5. volume",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    volume: Option<f64>,
}

impl CsvRecord {
    /// `has_volume` tells an absent Volume column (volume 0) apart from a bad
    /// Volume cell (rejected on load).
    fn into_bar(self, row: usize, has_volume: bool) -> Result<Bar, DataError> {
        let date = parse_date(&self.date).ok_or_else(|| {
            DataError::ParseError(format!("row {row}: could not parse date {:?}", self.date))
        })?;
        let missing = f64::NAN;

        Ok(Bar::new(
            date,
            self.open.unwrap_or(missing),
            self.high.unwrap_or(missing),
            self.low.unwrap_or(missing),
            self.close.or(self.adj_close).unwrap_or(missing),
            self.volume.unwrap_or(if has_volume { missing } else { 0.0 }),
        ))
    }
}

/// CSV data source for historical daily bars.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all bars from the CSV file, sorted by date.
    pub fn load_bars(&self) -> Result<Vec<Bar>, DataError> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let bars = read_bars(reader)?;
        debug!(path = %self.path.display(), bars = bars.len(), "loaded csv");
        Ok(bars)
    }

    /// Load the file as a validated series.
    pub fn load_series(&self, symbol: Option<&str>) -> Result<TimeSeries, DataError> {
        let series = TimeSeries::load(self.load_bars()?)?;
        info!(
            path = %self.path.display(),
            bars = series.len(),
            "loaded series"
        );
        Ok(match symbol {
            Some(symbol) => series.with_symbol(symbol),
            None => series,
        })
    }
}

/// Read bars from any CSV reader, sorted by date.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Bar>, DataError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_bars(reader)
}

const VOLUME_HEADERS: [&str; 3] = ["Volume", "volume", "5. volume"];

fn read_bars<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Bar>, DataError> {
    let has_volume = reader
        .headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?
        .iter()
        .any(|h| VOLUME_HEADERS.contains(&h));
    let mut bars = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        // 1-based, header is line 1
        bars.push(record.into_bar(i + 2, has_volume)?);
    }

    // Sort by date
    bars.sort_by_key(|b| b.date);

    Ok(bars)
}

/// Parse the date formats seen in exported price files.
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Some(d);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.date_naive());
    }

    // Unix timestamp, milliseconds if > 10 digits
    let ts = date_str.parse::<i64>().ok()?;
    let dt = if ts > 10_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    };
    dt.map(|dt| dt.date_naive())
}

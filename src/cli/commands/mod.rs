//! CLI command implementations.

pub mod assets;
pub mod compare;
pub mod forecast;
pub mod indicators;
pub mod summary;
pub mod validate;

use chrono::NaiveDate;
use finboard_config::AppConfig;
use finboard_core::error::{FinboardError, FinboardResult, SeriesError};
use finboard_core::types::TimeSeries;
use finboard_data::load_csv;
use tracing::info;

use crate::cli::SourceArgs;

/// Load the series named by `source`, restricted to its date range.
pub fn load_source(source: &SourceArgs, config: &AppConfig) -> FinboardResult<TimeSeries> {
    let series = match (&source.data, &source.asset) {
        (Some(path), _) => {
            let symbol = path.file_stem().and_then(|s| s.to_str());
            load_csv(path, symbol)?
        }
        (None, Some(name)) => load_asset(name, config)?,
        (None, None) => {
            return Err(FinboardError::Config(
                "name an asset or pass --data <csv>".to_string(),
            ))
        }
    };

    Ok(apply_range(series, source.start, source.end)?)
}

/// Load a catalog asset by name.
pub fn load_asset(name: &str, config: &AppConfig) -> FinboardResult<TimeSeries> {
    let asset = config.asset(name).ok_or_else(|| {
        FinboardError::Config(format!(
            "unknown asset {name:?}; run `finboard assets` for the catalog"
        ))
    })?;

    info!(asset = %asset.name, path = %asset.path, "loading asset");
    Ok(load_csv(&asset.path, Some(&asset.name))?)
}

/// Keep bars between `start` and `end`, either bound open when absent.
pub fn apply_range(
    series: TimeSeries,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<TimeSeries, SeriesError> {
    if start.is_none() && end.is_none() {
        return Ok(series);
    }
    series.filter_range(
        start.unwrap_or(NaiveDate::MIN),
        end.unwrap_or(NaiveDate::MAX),
    )
}

/// First row index to print when only the last `tail` rows are wanted.
pub fn tail_start(len: usize, tail: Option<usize>) -> usize {
    tail.map_or(0, |n| len.saturating_sub(n))
}

/// Table cell for an optional number; warm-up prints as `-`.
pub fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

/// A ratio rendered as a percentage.
pub fn percent(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{:.2}%", r * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_core::types::Bar;

    fn series() -> TimeSeries {
        let bars = (1..=5)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
                Bar::new(date, 10.0, 11.0, 9.0, 10.0, 1.0)
            })
            .collect();
        TimeSeries::load(bars).unwrap()
    }

    #[test]
    fn test_apply_range_open_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 3);

        assert_eq!(apply_range(series(), None, None).unwrap().len(), 5);
        assert_eq!(apply_range(series(), start, None).unwrap().len(), 3);
        assert_eq!(apply_range(series(), None, start).unwrap().len(), 3);
    }

    #[test]
    fn test_tail_start() {
        assert_eq!(tail_start(10, None), 0);
        assert_eq!(tail_start(10, Some(3)), 7);
        assert_eq!(tail_start(2, Some(3)), 0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(1.23456)), "1.2346");
        assert_eq!(percent(Some(-0.0532)), "-5.32%");
        assert_eq!(percent(None), "n/a");
    }

    #[test]
    fn test_unknown_asset() {
        let config = AppConfig::default();
        assert!(matches!(
            load_asset("Dogecoin", &config),
            Err(FinboardError::Config(_))
        ));
    }
}

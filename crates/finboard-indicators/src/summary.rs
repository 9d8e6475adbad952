//! Headline statistics for one asset over its loaded range.

use chrono::NaiveDate;
use finboard_core::error::IndicatorError;
use finboard_core::types::{Bar, TimeSeries};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::performance::{max_drawdown, mean_return, sharpe_ratio, volatility};

/// Trading days in a year of daily equity bars.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Direction of the last close relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Flat => write!(f, "flat"),
        }
    }
}

/// A close and the date it was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl From<&Bar> for PricePoint {
    fn from(bar: &Bar) -> Self {
        Self {
            date: bar.date,
            close: bar.close,
        }
    }
}

/// Overview statistics for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub symbol: Option<String>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub bars: usize,
    /// Mean daily return (ratio)
    pub mean_return: Option<f64>,
    /// Sample standard deviation of daily returns (ratio)
    pub volatility: Option<f64>,
    /// `mean_return * periods_per_year`
    pub annualized_return: Option<f64>,
    /// `volatility * sqrt(periods_per_year)`
    pub annualized_volatility: Option<f64>,
    pub trend: Trend,
    pub highest_close: PricePoint,
    pub lowest_close: PricePoint,
    /// Most negative drawdown (ratio, `<= 0`)
    pub max_drawdown: f64,
    pub sharpe_ratio: Option<f64>,
}

impl Overview {
    /// Summarize `series`; an empty series has nothing to summarize.
    ///
    /// `periods_per_year` scales the daily statistics to annual figures and
    /// must be positive.
    pub fn from_series(series: &TimeSeries, periods_per_year: f64) -> Result<Self, IndicatorError> {
        if !periods_per_year.is_finite() || periods_per_year <= 0.0 {
            return Err(IndicatorError::InvalidConfig(format!(
                "periods per year must be positive, got {periods_per_year}"
            )));
        }
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Err(IndicatorError::InsufficientData {
                required: 1,
                available: 0,
            });
        };

        let closes = series.closes();
        let mean = mean_return(&closes);
        let std = volatility(&closes);

        // Strict comparisons keep the first occurrence of ties
        let mut highest = first;
        let mut lowest = first;
        for bar in series.iter() {
            if bar.close > highest.close {
                highest = bar;
            }
            if bar.close < lowest.close {
                lowest = bar;
            }
        }

        let trend = if last.close > first.close {
            Trend::Up
        } else if last.close < first.close {
            Trend::Down
        } else {
            Trend::Flat
        };

        Ok(Self {
            symbol: series.symbol().map(str::to_string),
            first_date: first.date,
            last_date: last.date,
            bars: series.len(),
            mean_return: mean,
            volatility: std,
            annualized_return: mean.map(|m| m * periods_per_year),
            annualized_volatility: std.map(|s| s * periods_per_year.sqrt()),
            trend,
            highest_close: highest.into(),
            lowest_close: lowest.into(),
            max_drawdown: max_drawdown(&closes).unwrap_or(0.0),
            sharpe_ratio: sharpe_ratio(&closes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn series(closes: &[f64]) -> TimeSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(day(i as u32 + 1), c, c + 1.0, c - 1.0, c, 10.0))
            .collect();
        TimeSeries::load(bars).unwrap()
    }

    fn daily_overview(closes: &[f64]) -> Overview {
        Overview::from_series(&series(closes), TRADING_DAYS_PER_YEAR).unwrap()
    }

    #[test]
    fn test_overview() {
        let overview = daily_overview(&[100.0, 120.0, 90.0, 120.0, 110.0]);

        assert_eq!(overview.bars, 5);
        assert_eq!(overview.first_date, day(1));
        assert_eq!(overview.last_date, day(5));
        assert_eq!(overview.trend, Trend::Up);
        // first of the tied highs
        assert_eq!(overview.highest_close, PricePoint { date: day(2), close: 120.0 });
        assert_eq!(overview.lowest_close, PricePoint { date: day(3), close: 90.0 });
        assert!((overview.max_drawdown + 0.25).abs() < 1e-12);
        assert!(overview.mean_return.is_some());
        assert!(overview.volatility.unwrap() > 0.0);
    }

    #[test]
    fn test_annualized_statistics() {
        let s = series(&[100.0, 102.0, 101.0, 104.0, 103.0]);
        let daily = Overview::from_series(&s, 1.0).unwrap();
        let yearly = Overview::from_series(&s, TRADING_DAYS_PER_YEAR).unwrap();

        let mean = yearly.mean_return.unwrap();
        let std = yearly.volatility.unwrap();
        assert!((yearly.annualized_return.unwrap() - mean * 252.0).abs() < 1e-12);
        assert!((yearly.annualized_volatility.unwrap() - std * 252f64.sqrt()).abs() < 1e-12);
        assert_eq!(daily.annualized_return, daily.mean_return);
        assert_eq!(daily.annualized_volatility, daily.volatility);

        // weekly bars
        let weekly = Overview::from_series(&s, 52.0).unwrap();
        assert!((weekly.annualized_return.unwrap() - mean * 52.0).abs() < 1e-12);
    }

    #[test]
    fn test_periods_per_year_must_be_positive() {
        let s = series(&[100.0, 101.0]);
        for bad in [0.0, -252.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Overview::from_series(&s, bad),
                Err(IndicatorError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_overview_trend() {
        let down = daily_overview(&[100.0, 90.0]);
        assert_eq!(down.trend, Trend::Down);
        assert_eq!(down.volatility, None);

        let flat = daily_overview(&[100.0, 90.0, 100.0]);
        assert_eq!(flat.trend, Trend::Flat);
    }

    #[test]
    fn test_overview_single_bar() {
        let overview = daily_overview(&[50.0]);
        assert_eq!(overview.mean_return, None);
        assert_eq!(overview.sharpe_ratio, None);
        assert_eq!(overview.annualized_return, None);
        assert_eq!(overview.annualized_volatility, None);
        assert_eq!(overview.max_drawdown, 0.0);
    }

    #[test]
    fn test_overview_empty() {
        let empty = TimeSeries::load(Vec::new()).unwrap();
        assert!(matches!(
            Overview::from_series(&empty, TRADING_DAYS_PER_YEAR),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }
}

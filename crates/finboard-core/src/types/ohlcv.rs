//! OHLCV (Open, High, Low, Close, Volume) bar type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-period record.
///
/// A `Bar` is a plain value; its invariants are checked when it enters a
/// [`TimeSeries`](super::TimeSeries), not at construction, so loaders can build
/// bars from untrusted input and let the series report the offending index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check the per-bar invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), String> {
        let prices = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (field, value) in prices {
            if !value.is_finite() {
                return Err(format!("{field} is missing or non-numeric"));
            }
            if value <= 0.0 {
                return Err(format!("{field} must be positive, got {value}"));
            }
        }

        if !self.volume.is_finite() {
            return Err("volume is missing or non-numeric".to_string());
        }
        if self.volume < 0.0 {
            return Err(format!("volume must be non-negative, got {}", self.volume));
        }

        if self.high < self.low {
            return Err(format!("high {} is below low {}", self.high, self.low));
        }
        for (field, value) in [("open", self.open), ("close", self.close)] {
            if value < self.low || value > self.high {
                return Err(format!(
                    "{field} {value} is outside the [{}, {}] range",
                    self.low, self.high
                ));
            }
        }

        Ok(())
    }
}

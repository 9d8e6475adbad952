//! Forecast output aligned to a future date axis.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Predicted closes, one per horizon date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Name of the model that produced the values
    pub model: String,
    /// Future dates, strictly after the last history date
    pub dates: Vec<NaiveDate>,
    /// Predicted close for each date
    pub values: Vec<f64>,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over `(date, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// The `days` calendar dates following `last`.
///
/// Dates beyond chrono's representable range are dropped, so the result may be
/// shorter than requested only at the end of the calendar.
pub fn forecast_dates(last: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (1..=days as u64)
        .map_while(|offset| last.checked_add_days(Days::new(offset)))
        .collect()
}

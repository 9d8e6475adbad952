//! Date-ordered OHLCV history for one asset.

use chrono::NaiveDate;
use serde::Serialize;

use super::Bar;
use crate::error::SeriesError;

/// Time-series container for bars, strictly increasing by date.
///
/// The only ways to obtain a `TimeSeries` are [`TimeSeries::load`] and
/// [`TimeSeries::filter_range`], so every instance satisfies the ordering and
/// per-bar invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    symbol: Option<String>,
    bars: Vec<Bar>,
}

impl TimeSeries {
    /// Validate and take ownership of an ordered sequence of bars.
    pub fn load(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (index, bar) in bars.iter().enumerate() {
            bar.validate()
                .map_err(|reason| SeriesError::malformed(index, reason))?;
        }

        if let Some(index) = bars.windows(2).position(|w| w[1].date <= w[0].date) {
            let (prev, next) = (bars[index].date, bars[index + 1].date);
            let reason = if prev == next {
                format!("duplicate date {next}")
            } else {
                format!("date {next} does not follow {prev}")
            };
            return Err(SeriesError::malformed(index + 1, reason));
        }

        Ok(Self { symbol: None, bars })
    }

    /// Tag the series with the asset it belongs to.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Contiguous sub-series with `start <= date <= end`.
    ///
    /// A range that matches nothing yields an empty series, not an error.
    pub fn filter_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Self, SeriesError> {
        if start > end {
            return Err(SeriesError::InvalidRange { start, end });
        }

        let from = self.bars.partition_point(|b| b.date < start);
        let to = self.bars.partition_point(|b| b.date <= end);

        Ok(Self {
            symbol: self.symbol.clone(),
            bars: self.bars[from..to].to_vec(),
        })
    }

    /// Asset symbol, if tagged.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Index of the bar dated `date`.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.bars.binary_search_by_key(&date, |b| b.date).ok()
    }

    /// Extract dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

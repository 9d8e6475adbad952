//! Derived indicator columns keyed by the source series' dates.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::IndicatorError;

/// A named derived sequence, one entry per source date.
///
/// `None` marks a position where the indicator is not yet computable
/// (warm-up); it is never conflated with a computed zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    name: String,
    values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, `None` for warm-up or out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Number of leading positions without a value.
    pub fn warm_up(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }

    /// Iterate over defined values only.
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Most recent defined value.
    pub fn last_defined(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// Indicator series aligned to a common date axis, plus scalar results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorMap {
    dates: Vec<NaiveDate>,
    series: Vec<IndicatorSeries>,
    sharpe_ratio: Option<f64>,
}

impl IndicatorMap {
    /// Create an empty map over the given date axis.
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            series: Vec::new(),
            sharpe_ratio: None,
        }
    }

    /// Add a series; it must match the date axis and carry a fresh name.
    pub fn insert(&mut self, series: IndicatorSeries) -> Result<(), IndicatorError> {
        if series.len() != self.dates.len() {
            return Err(IndicatorError::CalculationError(format!(
                "{} has {} values for {} dates",
                series.name,
                series.len(),
                self.dates.len()
            )));
        }
        if self.get(&series.name).is_some() {
            return Err(IndicatorError::CalculationError(format!(
                "duplicate indicator {}",
                series.name
            )));
        }
        self.series.push(series);
        Ok(())
    }

    pub fn set_sharpe_ratio(&mut self, ratio: Option<f64>) {
        self.sharpe_ratio = ratio;
    }

    /// Whole-series Sharpe-like ratio.
    pub fn sharpe_ratio(&self) -> Option<f64> {
        self.sharpe_ratio
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Look up a series by name.
    pub fn get(&self, name: &str) -> Option<&IndicatorSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Series names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorSeries> {
        self.series.iter()
    }

    /// Number of dates on the axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of indicator columns.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: u32) -> Vec<NaiveDate> {
        (1..=n)
            .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
            .collect()
    }

    #[test]
    fn test_indicator_series_accessors() {
        let series = IndicatorSeries::new("SMA_3", vec![None, None, Some(11.0), Some(12.0)]);

        assert_eq!(series.warm_up(), 2);
        assert_eq!(series.get(0), None);
        assert_eq!(series.get(2), Some(11.0));
        assert_eq!(series.get(10), None);
        assert_eq!(series.defined().collect::<Vec<_>>(), vec![11.0, 12.0]);
        assert_eq!(series.last_defined(), Some(12.0));
    }

    #[test]
    fn test_insert_enforces_alignment() {
        let mut map = IndicatorMap::new(dates(3));
        map.insert(IndicatorSeries::new("A", vec![None, Some(1.0), Some(2.0)]))
            .unwrap();

        let short = IndicatorSeries::new("B", vec![Some(1.0)]);
        assert!(matches!(
            map.insert(short),
            Err(IndicatorError::CalculationError(_))
        ));

        let duplicate = IndicatorSeries::new("A", vec![None, None, None]);
        assert!(map.insert(duplicate).is_err());

        assert_eq!(map.series_count(), 1);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_serializes_none_as_null() {
        let mut map = IndicatorMap::new(dates(2));
        map.insert(IndicatorSeries::new("X", vec![None, Some(0.0)]))
            .unwrap();

        let json = serde_json::to_value(&map).unwrap();
        assert!(json["series"][0]["values"][0].is_null());
        assert_eq!(json["series"][0]["values"][1], 0.0);
        assert!(json["sharpe_ratio"].is_null());
    }
}

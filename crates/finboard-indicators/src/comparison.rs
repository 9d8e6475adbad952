//! Side-by-side views of several assets on a shared date axis.

use chrono::NaiveDate;
use finboard_core::traits::Indicator;
use finboard_core::types::{IndicatorSeries, TimeSeries};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::performance::DailyReturn;

/// Columns aligned on the union of the assets' dates.
///
/// A date missing from one asset is `None` in that asset's column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<IndicatorSeries>,
}

impl ComparisonTable {
    pub fn column(&self, name: &str) -> Option<&IndicatorSeries> {
        self.columns.iter().find(|c| c.name() == name)
    }
}

/// Builder over a set of named series.
#[derive(Debug, Clone, Default)]
pub struct Comparison<'a> {
    assets: Vec<(String, &'a TimeSeries)>,
}

impl<'a> Comparison<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset under `name`.
    pub fn with_asset(mut self, name: impl Into<String>, series: &'a TimeSeries) -> Self {
        self.assets.push((name.into(), series));
        self
    }

    /// Daily returns per asset, each computed against the asset's own
    /// previous bar.
    pub fn returns(&self) -> ComparisonTable {
        self.align(|_, series| DailyReturn.calculate(&series.closes()))
    }

    /// Natural log of each close, for comparing assets on very different
    /// price levels.
    pub fn log_closes(&self) -> ComparisonTable {
        self.align(|_, series| series.closes().iter().map(|c| Some(c.ln())).collect())
    }

    /// Min-max normalized closes scaled to `[0, scale]`.
    pub fn normalized_closes(&self, scale: f64) -> ComparisonTable {
        self.align(|_, series| normalize_min_max(&series.closes(), scale))
    }

    /// Min-max normalized volumes scaled to `[0, scale]`.
    pub fn normalized_volumes(&self, scale: f64) -> ComparisonTable {
        self.align(|_, series| normalize_min_max(&series.volumes(), scale))
    }

    fn align<F>(&self, column: F) -> ComparisonTable
    where
        F: Fn(&str, &TimeSeries) -> Vec<Option<f64>>,
    {
        let dates: Vec<NaiveDate> = self
            .assets
            .iter()
            .flat_map(|(_, series)| series.iter().map(|b| b.date))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let columns = self
            .assets
            .iter()
            .map(|(name, series)| {
                let own = column(name, series);
                let values = dates
                    .iter()
                    .map(|&date| series.position(date).and_then(|i| own[i]))
                    .collect();
                IndicatorSeries::new(name.clone(), values)
            })
            .collect();

        ComparisonTable { dates, columns }
    }
}

/// Rescale `values` linearly so the minimum maps to 0 and the maximum to
/// `scale`. A constant input has no range and maps to `None`.
pub fn normalize_min_max(values: &[f64], scale: f64) -> Vec<Option<f64>> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;

    values
        .iter()
        .map(|&v| (range > 0.0).then(|| (v - min) / range * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_core::types::Bar;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn series(points: &[(u32, f64, f64)]) -> TimeSeries {
        let bars = points
            .iter()
            .map(|&(d, c, v)| Bar::new(day(d), c, c, c, c, v))
            .collect();
        TimeSeries::load(bars).unwrap()
    }

    #[test]
    fn test_normalize_min_max() {
        let result = normalize_min_max(&[10.0, 20.0, 15.0], 1000.0);
        assert_eq!(result, vec![Some(0.0), Some(1000.0), Some(500.0)]);

        assert_eq!(normalize_min_max(&[5.0, 5.0], 100.0), vec![None, None]);
        assert!(normalize_min_max(&[], 100.0).is_empty());
    }

    #[test]
    fn test_returns_aligned_on_union() {
        let gold = series(&[(1, 100.0, 1.0), (2, 110.0, 1.0), (4, 121.0, 1.0)]);
        let btc = series(&[(2, 50.0, 1.0), (3, 25.0, 1.0)]);

        let table = Comparison::new()
            .with_asset("Gold", &gold)
            .with_asset("Bitcoin", &btc)
            .returns();

        assert_eq!(table.dates, vec![day(1), day(2), day(3), day(4)]);

        let gold_col = table.column("Gold").unwrap();
        assert_eq!(gold_col.get(0), None);
        assert!((gold_col.get(1).unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(gold_col.get(2), None);
        // measured against Gold's own previous bar (day 2)
        assert!((gold_col.get(3).unwrap() - 0.1).abs() < 1e-12);

        let btc_col = table.column("Bitcoin").unwrap();
        assert_eq!(btc_col.values(), &[None, None, Some(-0.5), None]);
    }

    #[test]
    fn test_normalized_views() {
        let sp = series(&[(1, 10.0, 100.0), (2, 30.0, 300.0), (3, 20.0, 200.0)]);
        let comparison = Comparison::new().with_asset("S&P 500", &sp);

        let closes = comparison.normalized_closes(1000.0);
        assert_eq!(
            closes.columns[0].values(),
            &[Some(0.0), Some(1000.0), Some(500.0)]
        );

        let volumes = comparison.normalized_volumes(100.0);
        assert_eq!(
            volumes.columns[0].values(),
            &[Some(0.0), Some(100.0), Some(50.0)]
        );
    }

    #[test]
    fn test_log_closes() {
        let e = std::f64::consts::E;
        let btc = series(&[(1, 1.0, 1.0), (3, e, 1.0)]);
        let gold = series(&[(2, 100.0, 1.0)]);

        let table = Comparison::new()
            .with_asset("Bitcoin", &btc)
            .with_asset("Gold", &gold)
            .log_closes();

        let btc_col = table.column("Bitcoin").unwrap();
        assert_eq!(btc_col.get(0), Some(0.0));
        assert_eq!(btc_col.get(1), None);
        assert!((btc_col.get(2).unwrap() - 1.0).abs() < 1e-12);

        let gold_col = table.column("Gold").unwrap();
        assert_eq!(gold_col.values()[0], None);
        assert!((gold_col.get(1).unwrap() - 100f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_comparison() {
        let table = Comparison::new().returns();
        assert!(table.dates.is_empty());
        assert!(table.columns.is_empty());
    }
}

//! Baseline forecaster.

use chrono::NaiveDate;
use finboard_core::error::ForecastError;
use finboard_core::traits::Forecaster;
use finboard_core::types::TimeSeries;

use crate::performance::mean_return;

/// Compounds the last close by the historical mean daily return, one step per
/// horizon date.
#[derive(Debug, Clone, Default)]
pub struct DriftForecaster;

impl Forecaster for DriftForecaster {
    fn forecast(
        &self,
        history: &TimeSeries,
        horizon: &[NaiveDate],
    ) -> Result<Vec<f64>, ForecastError> {
        let last = history.last().ok_or(ForecastError::EmptyHistory)?;
        let drift = mean_return(&history.closes()).ok_or_else(|| {
            ForecastError::Model("drift needs at least two bars of history".to_string())
        })?;

        let growth = 1.0 + drift;
        Ok((1..=horizon.len())
            .map(|step| last.close * growth.powi(step as i32))
            .collect())
    }

    fn name(&self) -> &str {
        "drift"
    }
}

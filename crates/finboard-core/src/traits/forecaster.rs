//! Interface to external price-forecasting models.

use crate::error::ForecastError;
use crate::types::{forecast_dates, Forecast, TimeSeries};
use chrono::NaiveDate;

/// A model that predicts closes for future dates.
///
/// How the model is trained or stored is up to the implementor; finboard only
/// hands it a history and a horizon and checks the shape of what comes back.
pub trait Forecaster: Send + Sync {
    /// Predict one close per date in `horizon`.
    ///
    /// # Arguments
    /// * `history` - Non-empty series the model conditions on
    /// * `horizon` - Future dates, ascending, all after the last history date
    fn forecast(&self, history: &TimeSeries, horizon: &[NaiveDate])
        -> Result<Vec<f64>, ForecastError>;

    /// Get the name of the model.
    fn name(&self) -> &str;
}

/// Run `model` over the `days` calendar days following `history`.
pub fn run_forecast(
    model: &dyn Forecaster,
    history: &TimeSeries,
    days: usize,
) -> Result<Forecast, ForecastError> {
    let last = history.last().ok_or(ForecastError::EmptyHistory)?;
    if days == 0 {
        return Err(ForecastError::InvalidHorizon);
    }

    let dates = forecast_dates(last.date, days);
    let values = model.forecast(history, &dates)?;

    if values.len() != dates.len() {
        return Err(ForecastError::Misaligned {
            expected: dates.len(),
            got: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ForecastError::NonFinite { index });
    }

    Ok(Forecast {
        model: model.name().to_string(),
        dates,
        values,
    })
}

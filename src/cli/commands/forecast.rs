//! Forecast command implementation.

use anyhow::{Context, Result};
use finboard_config::AppConfig;
use finboard_core::error::FinboardResult;
use finboard_core::traits::run_forecast;
use finboard_core::types::{Forecast, TimeSeries};
use finboard_indicators::DriftForecaster;
use tracing::info;

use super::load_source;
use crate::cli::{ForecastArgs, OutputFormat};

pub fn run(args: ForecastArgs, config: &AppConfig) -> Result<()> {
    let series = load_source(&args.source, config)?;
    let days = args.days.unwrap_or(config.forecast.days);

    let forecast = project(&series, days).context("Failed to produce forecast")?;
    info!(model = %forecast.model, days = forecast.len(), "forecast ready");

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&forecast)?),
        _ => {
            println!("Date\tForecast ({})", forecast.model);
            for (date, value) in forecast.points() {
                println!("{date}\t{value:.4}");
            }
        }
    }

    Ok(())
}

/// Drift projection of `series` over `days` calendar days.
fn project(series: &TimeSeries, days: usize) -> FinboardResult<Forecast> {
    Ok(run_forecast(&DriftForecaster, series, days)?)
}

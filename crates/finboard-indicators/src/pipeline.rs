//! The indicator pipeline: one series and one explicit config in, one
//! [`IndicatorMap`] out.

use finboard_core::error::IndicatorError;
use finboard_core::traits::{Indicator, MultiOutputIndicator};
use finboard_core::types::{IndicatorMap, IndicatorSeries, TimeSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::momentum::{Macd, Rsi};
use crate::moving_average::{Ema, Sma};
use crate::performance::{sharpe_ratio, DailyReturn, Drawdown};
use crate::volatility::BollingerBands;

/// MACD windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// Bollinger window and band width in standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub window: usize,
    pub k: f64,
}

/// Every parameter the pipeline uses.
///
/// There is intentionally no `Default`: callers own their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub sma_window: usize,
    /// Long-horizon SMAs (e.g. 200, 500, 1000), one `SMA_n` column each
    #[serde(default)]
    pub extra_sma_windows: Vec<usize>,
    pub ema_window: usize,
    pub rsi_window: usize,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
}

impl PipelineConfig {
    /// Check the parameters without computing anything.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        Indicators::build(self).map(|_| ())
    }

    /// Largest configured window; shorter series are rejected.
    pub fn required_bars(&self) -> usize {
        [
            self.sma_window,
            self.ema_window,
            self.rsi_window,
            self.macd.fast,
            self.macd.slow,
            self.macd.signal,
            self.bollinger.window,
        ]
        .into_iter()
        .chain(self.extra_sma_windows.iter().copied())
        .fold(1, usize::max)
    }
}

/// The configured indicator set, built once per call.
struct Indicators {
    sma: Sma,
    extra_smas: Vec<Sma>,
    ema: Ema,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
}

impl Indicators {
    fn build(config: &PipelineConfig) -> Result<Self, IndicatorError> {
        let mut windows = vec![config.sma_window];
        for &window in &config.extra_sma_windows {
            if windows.contains(&window) {
                return Err(IndicatorError::InvalidConfig(format!(
                    "SMA window {window} is configured more than once"
                )));
            }
            windows.push(window);
        }

        Ok(Self {
            sma: Sma::new(config.sma_window)?,
            extra_smas: config
                .extra_sma_windows
                .iter()
                .map(|&window| Sma::new(window))
                .collect::<Result<_, _>>()?,
            ema: Ema::new(config.ema_window)?,
            rsi: Rsi::new(config.rsi_window)?,
            macd: Macd::with_periods(config.macd.fast, config.macd.slow, config.macd.signal)?,
            bollinger: BollingerBands::with_params(config.bollinger.window, config.bollinger.k)?,
        })
    }

    /// Longest window any configured indicator needs.
    fn required_bars(&self) -> usize {
        [
            self.sma.period(),
            self.ema.period(),
            self.rsi.period(),
            self.macd.period(),
            self.bollinger.period(),
        ]
        .into_iter()
        .chain(self.extra_smas.iter().map(Indicator::period))
        .fold(1, usize::max)
    }
}

/// Compute every indicator for `series`.
///
/// Columns, in order: SMA, the extra SMAs, EMA, RSI, MACD line, signal and histogram,
/// Bollinger upper, middle and lower, drawdown, daily return. The Sharpe-like
/// ratio is stored as a scalar on the map.
///
/// Fails with [`IndicatorError::InvalidConfig`] for bad parameters and with
/// [`IndicatorError::InsufficientData`] when the series is shorter than the
/// largest window. On failure nothing is returned.
pub fn compute(
    series: &TimeSeries,
    config: &PipelineConfig,
) -> Result<IndicatorMap, IndicatorError> {
    let indicators = Indicators::build(config)?;

    let required = indicators.required_bars();
    if series.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            available: series.len(),
        });
    }

    let closes = series.closes();
    let mut map = IndicatorMap::new(series.dates());

    insert(&mut map, &indicators.sma, &closes)?;
    for sma in &indicators.extra_smas {
        insert(&mut map, sma, &closes)?;
    }
    insert(&mut map, &indicators.ema, &closes)?;
    insert(&mut map, &indicators.rsi, &closes)?;

    let macd = indicators.macd.calculate(&closes);
    map.insert(IndicatorSeries::new(indicators.macd.name(), macd.macd))?;
    map.insert(IndicatorSeries::new(indicators.macd.signal_name(), macd.signal))?;
    map.insert(IndicatorSeries::new(indicators.macd.histogram_name(), macd.histogram))?;

    let bands = indicators.bollinger.calculate(&closes);
    map.insert(IndicatorSeries::new(indicators.bollinger.upper_name(), bands.upper))?;
    map.insert(IndicatorSeries::new(indicators.bollinger.middle_name(), bands.middle))?;
    map.insert(IndicatorSeries::new(indicators.bollinger.lower_name(), bands.lower))?;

    insert(&mut map, &Drawdown, &closes)?;
    insert(&mut map, &DailyReturn, &closes)?;

    map.set_sharpe_ratio(sharpe_ratio(&closes));

    debug!(
        symbol = series.symbol().unwrap_or("-"),
        bars = series.len(),
        columns = map.series_count(),
        "computed indicators"
    );

    Ok(map)
}

fn insert<I>(map: &mut IndicatorMap, indicator: &I, closes: &[f64]) -> Result<(), IndicatorError>
where
    I: Indicator<Output = f64>,
{
    let column = IndicatorSeries::new(indicator.name(), indicator.calculate(closes));
    debug_assert_eq!(column.warm_up(), indicator.warm_up().min(closes.len()));
    map.insert(column)
}

//! Technical indicators and analytics over a [`TimeSeries`].
//!
//! The entry point is [`compute`], which runs the full indicator set for one
//! series under an explicit [`PipelineConfig`]:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (Bollinger Bands)
//! - Performance measures (drawdown, daily return, Sharpe-like ratio)
//!
//! Alongside it sit per-asset [`Overview`] statistics, multi-asset
//! [`Comparison`] tables and the [`DriftForecaster`] baseline.
//!
//! [`TimeSeries`]: finboard_core::types::TimeSeries

pub mod comparison;
pub mod forecast;
pub mod momentum;
pub mod moving_average;
pub mod performance;
pub mod pipeline;
pub mod summary;
pub mod volatility;

pub use comparison::{normalize_min_max, Comparison, ComparisonTable};
pub use forecast::DriftForecaster;
pub use momentum::{Macd, MacdLines, Rsi};
pub use moving_average::{Ema, Sma};
pub use performance::{
    max_drawdown, mean_return, returns, sharpe_ratio, volatility as return_volatility,
    DailyReturn, Drawdown, DAILY_RETURN, DRAWDOWN,
};
pub use pipeline::{compute, BollingerParams, MacdParams, PipelineConfig};
pub use summary::{Overview, PricePoint, Trend, TRADING_DAYS_PER_YEAR};
pub use volatility::{BollingerBands, BollingerLines};

//! Configuration structures.

use finboard_indicators::{BollingerParams, MacdParams, PipelineConfig, TRADING_DAYS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::SettingsError;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub summary: SummarySettings,
    #[serde(default)]
    pub comparison: ComparisonSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

impl AppConfig {
    /// Check every section; the first problem found is reported.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.logging.validate()?;
        self.data.validate()?;
        self.indicators
            .to_pipeline_config()
            .validate()
            .map_err(|e| SettingsError::Invalid(format!("indicators: {e}")))?;
        self.summary.validate()?;
        self.comparison.validate()?;
        self.forecast.validate()
    }

    /// Look up a configured asset by name, ignoring case.
    pub fn asset(&self, name: &str) -> Option<&AssetSource> {
        self.data
            .assets
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "finboard".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    fn validate(&self) -> Result<(), SettingsError> {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SettingsError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {other:?}"
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// A named CSV file in the asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSource {
    pub name: String,
    pub path: String,
}

impl AssetSource {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Asset catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub assets: Vec<AssetSource>,
}

impl DataSettings {
    fn validate(&self) -> Result<(), SettingsError> {
        let mut seen = HashSet::new();
        for asset in &self.assets {
            if asset.name.trim().is_empty() {
                return Err(SettingsError::Invalid("asset name must not be empty".into()));
            }
            if !seen.insert(asset.name.to_ascii_lowercase()) {
                return Err(SettingsError::Invalid(format!(
                    "duplicate asset name {:?}",
                    asset.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            assets: vec![
                AssetSource::new("S&P 500", "data/sp500.csv"),
                AssetSource::new("Bitcoin", "data/btc.csv"),
                AssetSource::new("Gold", "data/gold.csv"),
            ],
        }
    }
}

/// Indicator windows, flat so each one can be overridden from the
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma_window: usize,
    /// Long-horizon SMA windows, e.g. `[200, 500, 1000]`
    pub extra_sma_windows: Vec<usize>,
    pub ema_window: usize,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_k: f64,
}

impl IndicatorSettings {
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            sma_window: self.sma_window,
            extra_sma_windows: self.extra_sma_windows.clone(),
            ema_window: self.ema_window,
            rsi_window: self.rsi_window,
            macd: MacdParams {
                fast: self.macd_fast,
                slow: self.macd_slow,
                signal: self.macd_signal,
            },
            bollinger: BollingerParams {
                window: self.bollinger_window,
                k: self.bollinger_k,
            },
        }
    }
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_window: 20,
            extra_sma_windows: Vec::new(),
            ema_window: 20,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_k: 2.0,
        }
    }
}

/// Annualization for the overview statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    /// Trading periods per year, 252 for daily equity bars
    pub periods_per_year: f64,
}

impl SummarySettings {
    fn validate(&self) -> Result<(), SettingsError> {
        if !self.periods_per_year.is_finite() || self.periods_per_year <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "summary.periods_per_year must be positive, got {}",
                self.periods_per_year
            )));
        }
        Ok(())
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

/// Scales for the normalized comparison views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSettings {
    pub close_scale: f64,
    pub volume_scale: f64,
}

impl ComparisonSettings {
    fn validate(&self) -> Result<(), SettingsError> {
        for (name, scale) in [
            ("close_scale", self.close_scale),
            ("volume_scale", self.volume_scale),
        ] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "comparison.{name} must be positive, got {scale}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            close_scale: 1000.0,
            volume_scale: 100.0,
        }
    }
}

/// Forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    pub days: usize,
}

impl ForecastSettings {
    fn validate(&self) -> Result<(), SettingsError> {
        if self.days == 0 {
            return Err(SettingsError::Invalid("forecast.days must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self { days: 50 }
    }
}

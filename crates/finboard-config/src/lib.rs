//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, AssetSource, ComparisonSettings, DataSettings, ForecastSettings,
    IndicatorSettings, LoggingConfig,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from file and environment.
///
/// The file is optional; built-in defaults fill whatever it leaves out.
/// `FINBOARD__SECTION__KEY` variables override both.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env_source())
        .build()?;

    finish(config)
}

/// Render the effective configuration as TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, SettingsError> {
    Ok(toml::to_string_pretty(config)?)
}

fn env_source() -> Environment {
    Environment::with_prefix("FINBOARD")
        .separator("__")
        .try_parsing(true)
}

fn finish(config: Config) -> Result<AppConfig, SettingsError> {
    let config: AppConfig = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<AppConfig, SettingsError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        finish(config)
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.indicators.sma_window, 20);
        assert_eq!(config.indicators.to_pipeline_config().macd.slow, 26);
        assert_eq!(config.comparison.close_scale, 1000.0);
        assert_eq!(config.forecast.days, 50);
        assert_eq!(config.summary.periods_per_year, 252.0);
        assert!(config.indicators.extra_sma_windows.is_empty());
        assert_eq!(config.data.assets.len(), 3);
        assert!(config.asset("bitcoin").is_some());
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml(
            r#"
            [indicators]
            sma_window = 50
            bollinger_k = 2.5

            [[data.assets]]
            name = "Gold"
            path = "gold.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.indicators.sma_window, 50);
        assert_eq!(config.indicators.rsi_window, 14);
        assert_eq!(config.indicators.bollinger_k, 2.5);
        assert_eq!(config.data.assets, vec![AssetSource::new("Gold", "gold.csv")]);
    }

    #[test]
    fn test_environment_override() {
        let mut vars = config::Map::new();
        vars.insert("FINBOARD__INDICATORS__RSI_WINDOW".to_string(), "21".to_string());
        vars.insert("FINBOARD__LOGGING__FORMAT".to_string(), "json".to_string());

        let config = Config::builder()
            .add_source(env_source().source(Some(vars)))
            .build()
            .unwrap();
        let config = finish(config).unwrap();

        assert_eq!(config.indicators.rsi_window, 21);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_long_horizon_smas() {
        let config = from_toml(
            r#"
            [indicators]
            extra_sma_windows = [200, 500, 1000]
            "#,
        )
        .unwrap();

        let pipeline = config.indicators.to_pipeline_config();
        assert_eq!(pipeline.extra_sma_windows, vec![200, 500, 1000]);
        assert_eq!(pipeline.required_bars(), 1000);

        let duplicate = "[indicators]\nsma_window = 200\nextra_sma_windows = [200]";
        assert!(matches!(from_toml(duplicate), Err(SettingsError::Invalid(_))));
        assert!(from_toml("[indicators]\nextra_sma_windows = [0]").is_err());
    }

    #[test]
    fn test_invalid_indicator_windows() {
        let err = from_toml(
            r#"
            [indicators]
            macd_fast = 30
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_invalid_sections() {
        let duplicate = r#"
            [[data.assets]]
            name = "Gold"
            path = "a.csv"
            [[data.assets]]
            name = "gold"
            path = "b.csv"
        "#;
        assert!(matches!(from_toml(duplicate), Err(SettingsError::Invalid(_))));

        assert!(from_toml("[forecast]\ndays = 0").is_err());
        assert!(from_toml("[comparison]\nclose_scale = -1.0").is_err());
        assert!(from_toml("[summary]\nperiods_per_year = 0.0").is_err());
        assert!(from_toml("[logging]\nlevel = \"info\"\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.indicators, IndicatorSettings::default());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = AppConfig::default();
        let rendered = to_toml(&config).unwrap();

        assert!(rendered.contains("sma_window = 20"));
        assert_eq!(from_toml(&rendered).unwrap(), config);
    }
}

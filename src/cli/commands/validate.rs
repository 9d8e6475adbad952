//! Validate configuration command.

use anyhow::Result;
use finboard_config::{to_toml, AppConfig};
use std::path::Path;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("(file not found, built-in defaults in effect)");
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Assets: {}", config.data.assets.len());
    println!(
        "Required history: {} bars",
        config.indicators.to_pipeline_config().required_bars()
    );
    println!();
    println!("{}", to_toml(config)?);

    Ok(())
}

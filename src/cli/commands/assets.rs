//! Assets command implementation.

use anyhow::Result;
use finboard_config::AppConfig;
use std::path::Path;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Configured assets:");
    println!();

    for asset in &config.data.assets {
        let status = if Path::new(&asset.path).exists() {
            "ok"
        } else {
            "missing"
        };
        println!("  {:<12} {} ({})", asset.name, asset.path, status);
    }

    Ok(())
}

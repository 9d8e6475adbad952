//! finboard CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use finboard_config::load_config;
use finboard_monitor::{setup_logging, LogOutput};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Setup logging
    let level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let mut output = LogOutput::new(level, cli.json_logs || config.logging.is_json());
    if let Some(file) = &config.logging.file {
        output = output.with_file(file);
    }
    let _guard = setup_logging(&output).context("Failed to initialise logging")?;

    // Execute command
    match cli.command {
        Commands::Indicators(args) => cli::commands::indicators::run(args, &config),
        Commands::Summary(args) => cli::commands::summary::run(args, &config),
        Commands::Compare(args) => cli::commands::compare::run(args, &config),
        Commands::Forecast(args) => cli::commands::forecast::run(args, &config),
        Commands::Assets => cli::commands::assets::run(&config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config),
    }
}

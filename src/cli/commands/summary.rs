//! Summary command implementation.

use anyhow::Result;
use finboard_config::AppConfig;
use finboard_indicators::Overview;

use super::{cell, load_source, percent};
use crate::cli::{OutputFormat, SummaryArgs};

pub fn run(args: SummaryArgs, config: &AppConfig) -> Result<()> {
    let series = load_source(&args.source, config)?;
    let overview = Overview::from_series(&series, config.summary.periods_per_year)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
        _ => {
            println!("{}", overview.symbol.as_deref().unwrap_or("Series"));
            println!(
                "Period: {} to {} ({} bars)",
                overview.first_date, overview.last_date, overview.bars
            );
            println!("Trend: {}", overview.trend);
            println!("Mean daily return: {}", percent(overview.mean_return));
            println!("Daily volatility: {}", percent(overview.volatility));
            println!("Annualized return: {}", percent(overview.annualized_return));
            println!("Annualized volatility: {}", percent(overview.annualized_volatility));
            println!(
                "Highest close: {:.2} on {}",
                overview.highest_close.close, overview.highest_close.date
            );
            println!(
                "Lowest close: {:.2} on {}",
                overview.lowest_close.close, overview.lowest_close.date
            );
            println!("Max drawdown: {}", percent(Some(overview.max_drawdown)));
            println!("Sharpe ratio: {}", cell(overview.sharpe_ratio));
        }
    }

    Ok(())
}

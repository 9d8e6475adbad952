//! Indicators command implementation.

use anyhow::{Context, Result};
use finboard_config::{AppConfig, IndicatorSettings};
use finboard_core::types::{IndicatorMap, TimeSeries};
use finboard_data::{to_json, write_csv};
use finboard_indicators::compute;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use super::{cell, load_source, tail_start};
use crate::cli::{IndicatorsArgs, OutputFormat};

pub fn run(args: IndicatorsArgs, config: &AppConfig) -> Result<()> {
    let series = load_source(&args.source, config)?;
    let settings = with_overrides(&config.indicators, &args);
    let pipeline = settings.to_pipeline_config();

    let map = compute(&series, &pipeline).with_context(|| {
        format!(
            "Failed to compute indicators for {}",
            series.symbol().unwrap_or("series")
        )
    })?;
    info!(bars = series.len(), columns = map.series_count(), "indicators ready");

    match args.output {
        OutputFormat::Json => println!("{}", to_json(&series, &map)?),
        OutputFormat::Csv => write_csv(std::io::stdout().lock(), &series, &map)?,
        OutputFormat::Text => print_table(&series, &map, args.tail),
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        save(save_path, &series, &map)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}

fn with_overrides(base: &IndicatorSettings, args: &IndicatorsArgs) -> IndicatorSettings {
    let mut settings = base.clone();
    if let Some(v) = args.sma {
        settings.sma_window = v;
    }
    if !args.extra_sma.is_empty() {
        settings.extra_sma_windows = args.extra_sma.clone();
    }
    if let Some(v) = args.ema {
        settings.ema_window = v;
    }
    if let Some(v) = args.rsi {
        settings.rsi_window = v;
    }
    if let Some(v) = args.macd_fast {
        settings.macd_fast = v;
    }
    if let Some(v) = args.macd_slow {
        settings.macd_slow = v;
    }
    if let Some(v) = args.macd_signal {
        settings.macd_signal = v;
    }
    if let Some(v) = args.bb_window {
        settings.bollinger_window = v;
    }
    if let Some(v) = args.bb_k {
        settings.bollinger_k = v;
    }
    settings
}

fn print_table(series: &TimeSeries, map: &IndicatorMap, tail: Option<usize>) {
    let mut header = vec!["Date".to_string(), "Close".to_string()];
    header.extend(map.names().map(str::to_string));
    println!("{}", header.join("\t"));

    for (i, bar) in series.iter().enumerate().skip(tail_start(series.len(), tail)) {
        let mut row = vec![bar.date.to_string(), format!("{:.4}", bar.close)];
        row.extend(map.iter().map(|s| cell(s.get(i))));
        println!("{}", row.join("\t"));
    }

    println!();
    println!("Sharpe ratio (daily, not annualized): {}", cell(map.sharpe_ratio()));
}

fn save(path: &Path, series: &TimeSeries, map: &IndicatorMap) -> Result<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        std::fs::write(path, to_json(series, map)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_csv(BufWriter::new(file), series, map)?;
    }
    Ok(())
}

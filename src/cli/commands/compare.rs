//! Compare command implementation.

use anyhow::{bail, Result};
use finboard_config::AppConfig;
use finboard_core::types::TimeSeries;
use finboard_indicators::{Comparison, ComparisonTable};
use tracing::warn;

use super::{apply_range, cell, load_asset, tail_start};
use crate::cli::{CompareArgs, CompareView, OutputFormat};

pub fn run(args: CompareArgs, config: &AppConfig) -> Result<()> {
    let names: Vec<String> = if args.assets.is_empty() {
        config.data.assets.iter().map(|a| a.name.clone()).collect()
    } else {
        args.assets.clone()
    };
    if names.is_empty() {
        bail!("No assets to compare; configure data.assets or pass --assets");
    }

    let mut loaded: Vec<(String, TimeSeries)> = Vec::with_capacity(names.len());
    for name in &names {
        let series = apply_range(load_asset(name, config)?, args.start, args.end)?;
        if series.is_empty() {
            warn!(asset = %name, "no bars in the requested range");
        }
        loaded.push((name.clone(), series));
    }

    let comparison = loaded
        .iter()
        .fold(Comparison::new(), |c, (name, series)| c.with_asset(name.as_str(), series));

    let table = match args.view {
        CompareView::Returns => comparison.returns(),
        CompareView::Close => comparison.normalized_closes(config.comparison.close_scale),
        CompareView::Log => comparison.log_closes(),
        CompareView::Volume => comparison.normalized_volumes(config.comparison.volume_scale),
    };

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Csv => print_delimited(&table, ",", args.tail, |v| {
            v.map(|v| v.to_string()).unwrap_or_default()
        }),
        OutputFormat::Text => print_delimited(&table, "\t", args.tail, cell),
    }

    Ok(())
}

fn print_delimited<F>(table: &ComparisonTable, sep: &str, tail: Option<usize>, format: F)
where
    F: Fn(Option<f64>) -> String,
{
    let mut header = vec!["Date".to_string()];
    header.extend(table.columns.iter().map(|c| c.name().to_string()));
    println!("{}", header.join(sep));

    for (i, date) in table
        .dates
        .iter()
        .enumerate()
        .skip(tail_start(table.dates.len(), tail))
    {
        let mut row = vec![date.to_string()];
        row.extend(table.columns.iter().map(|c| format(c.get(i))));
        println!("{}", row.join(sep));
    }
}

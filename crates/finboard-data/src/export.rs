//! Writing a series together with its indicator columns.

use finboard_core::error::DataError;
use finboard_core::types::{Bar, IndicatorMap, TimeSeries};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(flatten)]
    bar: &'a Bar,
    indicators: BTreeMap<&'a str, Option<f64>>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    symbol: Option<&'a str>,
    sharpe_ratio: Option<f64>,
    rows: Vec<ExportRow<'a>>,
}

fn check_aligned(series: &TimeSeries, map: &IndicatorMap) -> Result<(), DataError> {
    if map.len() != series.len() || map.dates() != series.dates().as_slice() {
        return Err(DataError::Export(format!(
            "indicator map covers {} dates, series has {} bars",
            map.len(),
            series.len()
        )));
    }
    Ok(())
}

/// Write bars followed by one column per indicator.
///
/// Warm-up positions are written as empty cells.
pub fn write_csv<W: Write>(
    writer: W,
    series: &TimeSeries,
    map: &IndicatorMap,
) -> Result<(), DataError> {
    check_aligned(series, map)?;
    let mut writer = csv::Writer::from_writer(writer);
    let export = |e: csv::Error| DataError::Export(e.to_string());

    let mut header = vec!["Date", "Open", "High", "Low", "Close", "Volume"];
    header.extend(map.names());
    writer.write_record(&header).map_err(export)?;

    for (i, bar) in series.iter().enumerate() {
        let mut record = vec![
            bar.date.format("%Y-%m-%d").to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
        ];
        record.extend(
            map.iter()
                .map(|s| s.get(i).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record).map_err(export)?;
    }

    writer.flush()?;
    Ok(())
}

/// Pretty JSON with the symbol, the Sharpe-like ratio and one row per bar.
///
/// Warm-up positions serialize as `null`.
pub fn to_json(series: &TimeSeries, map: &IndicatorMap) -> Result<String, DataError> {
    check_aligned(series, map)?;

    let rows = series
        .iter()
        .enumerate()
        .map(|(i, bar)| ExportRow {
            bar,
            indicators: map.iter().map(|s| (s.name(), s.get(i))).collect(),
        })
        .collect();

    let document = ExportDocument {
        symbol: series.symbol(),
        sharpe_ratio: map.sharpe_ratio(),
        rows,
    };

    serde_json::to_string_pretty(&document).map_err(|e| DataError::Export(e.to_string()))
}

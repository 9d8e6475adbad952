//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finboard")]
#[command(author, version, about = "Technical indicators and comparisons over OHLCV price files")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides logging.level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the indicator set for one asset
    Indicators(IndicatorsArgs),
    /// Overview statistics for one asset
    Summary(SummaryArgs),
    /// Compare several assets on a shared date axis
    Compare(CompareArgs),
    /// Project closes forward with the drift baseline
    Forecast(ForecastArgs),
    /// List the configured assets
    Assets,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Which series to load and which dates to keep.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Asset name from the catalog (see `finboard assets`)
    pub asset: Option<String>,

    /// Data file (CSV), used instead of a catalog asset
    #[arg(long, conflicts_with = "asset")]
    pub data: Option<PathBuf>,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(clap::Args)]
pub struct IndicatorsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// SMA window
    #[arg(long)]
    pub sma: Option<usize>,

    /// Long-horizon SMA windows (comma-separated, e.g. 200,500,1000)
    #[arg(long, value_delimiter = ',')]
    pub extra_sma: Vec<usize>,

    /// EMA window
    #[arg(long)]
    pub ema: Option<usize>,

    /// RSI window
    #[arg(long)]
    pub rsi: Option<usize>,

    /// MACD fast window
    #[arg(long)]
    pub macd_fast: Option<usize>,

    /// MACD slow window
    #[arg(long)]
    pub macd_slow: Option<usize>,

    /// MACD signal window
    #[arg(long)]
    pub macd_signal: Option<usize>,

    /// Bollinger window
    #[arg(long)]
    pub bb_window: Option<usize>,

    /// Bollinger band width in standard deviations
    #[arg(long)]
    pub bb_k: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Only print the last N rows
    #[arg(long)]
    pub tail: Option<usize>,

    /// Save results to file (CSV or JSON by extension)
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompareView {
    /// Daily returns
    Returns,
    /// Min-max normalized closes
    Close,
    /// Natural log of closes
    Log,
    /// Min-max normalized volumes
    Volume,
}

#[derive(clap::Args)]
pub struct CompareArgs {
    /// Assets to compare (comma-separated), every catalog asset by default
    #[arg(short, long, value_delimiter = ',')]
    pub assets: Vec<String>,

    /// What to compare
    #[arg(long, value_enum, default_value = "returns")]
    pub view: CompareView,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Only print the last N rows
    #[arg(long)]
    pub tail: Option<usize>,
}

#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Calendar days to project (defaults to forecast.days)
    #[arg(long)]
    pub days: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

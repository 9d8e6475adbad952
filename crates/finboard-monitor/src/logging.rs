//! Logging setup.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

/// Where and how log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOutput {
    pub level: String,
    pub json: bool,
    /// Optional file that receives a copy of every event, without colors.
    pub file: Option<PathBuf>,
}

impl LogOutput {
    pub fn new(level: impl Into<String>, json: bool) -> Self {
        Self {
            level: level.into(),
            json,
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// `RUST_LOG` wins over the configured level.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn console_layer(json: bool) -> BoxedLayer {
    // stdout carries command output
    let layer = fmt::layer().with_writer(std::io::stderr);
    if json {
        layer.json().boxed()
    } else {
        layer.pretty().boxed()
    }
}

fn file_layer(path: &Path, json: bool) -> (BoxedLayer, WorkerGuard) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "finboard.log".into());

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    };
    (layer, guard)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file sink on drop and must be held for the
/// life of the program.
pub fn setup_logging(output: &LogOutput) -> Result<Option<WorkerGuard>, TryInitError> {
    let mut layers = vec![console_layer(output.json)];
    let mut guard = None;

    if let Some(path) = &output.file {
        let (layer, file_guard) = file_layer(path, output.json);
        layers.push(layer);
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(output.filter())
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_output_builder() {
        let output = LogOutput::new("debug", true).with_file("logs/finboard.log");

        assert_eq!(output.level, "debug");
        assert!(output.json);
        assert_eq!(output.file.as_deref(), Some(Path::new("logs/finboard.log")));
    }

    #[test]
    fn test_file_layer_writes_to_directory() {
        let dir = std::env::temp_dir().join("finboard-monitor-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("events.log");

        let (layer, guard) = file_layer(&path, false);
        let subscriber = tracing_subscriber::registry().with(vec![layer]);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("file sink ready");
        });
        drop(guard);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("file sink ready"));
    }
}

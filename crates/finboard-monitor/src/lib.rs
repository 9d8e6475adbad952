//! Logging setup for the finboard binary.

mod logging;

pub use logging::{setup_logging, LogOutput};

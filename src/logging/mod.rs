//! Colorized, level-filtered logging
//!
//! Supports:
//! - ANSI-colorized console output with per-severity colors
//! - Optional plain-text file mirror (never colorized)
//! - Caller `(file:line)` suffix at DEBUG verbosity
//!
//! Configuration is an explicit value object ([`LogConfig`]); each sink
//! snapshots it at build time, so mutating a config after a sink is built
//! never changes that sink's behavior.

mod config;
mod format;
mod level;
mod sink;

pub use config::{LogConfig, DATE_FMT};
pub use format::{ColorFormatter, Record};
pub use level::{AnsiColor, LogLevel, BOLD_SEQ, RESET_SEQ};
pub use sink::{
    acu_logger, default_logger, LogSink, LoggerBuilder, ACU_LOGGER_NAME, DEFAULT_LOGGER_NAME,
};

use thiserror::Error;

/// Logging setup error types
#[derive(Error, Debug)]
pub enum LogError {
    /// Log directory could not be created
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: String,
        /// Underlying cause
        source: std::io::Error,
    },

    /// Log file could not be opened
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        /// File that could not be opened
        path: String,
        /// Underlying cause
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Named log sinks
//!
//! A sink owns a console handler and, when the configuration asks for it, a
//! file handler mirroring every record as plain text. Sinks are registered by
//! name: the first build under a name snapshots the configuration, later
//! builds under the same name return the registered instance unchanged.

use super::config::LogConfig;
use super::format::{ColorFormatter, Record};
use super::level::LogLevel;
use super::LogError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Registry name used by [`default_logger`]
pub const DEFAULT_LOGGER_NAME: &str = "default";

/// Registry name used by [`acu_logger`]
pub const ACU_LOGGER_NAME: &str = "acu";

/// A destination formatted records are written to
trait Handler: Send + Sync {
    fn emit(&self, record: &Record);
}

/// Console handler, colorized
struct ConsoleHandler {
    formatter: ColorFormatter,
}

impl Handler for ConsoleHandler {
    fn emit(&self, record: &Record) {
        let mut out = io::stderr().lock();
        let _ = writeln!(out, "{}", self.formatter.format(record));
    }
}

/// File handler, plain text, append mode
struct FileHandler {
    formatter: ColorFormatter,
    writer: Mutex<BufWriter<File>>,
}

impl FileHandler {
    fn open(path: &str) -> Result<Self, LogError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::OpenFile {
                path: path.to_string(),
                source,
            })?;

        Ok(Self {
            formatter: ColorFormatter::file(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl Handler for FileHandler {
    fn emit(&self, record: &Record) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", self.formatter.format(record));
        // Flush per record so the mirror is inspectable mid-session
        let _ = writer.flush();
    }
}

/// A named, leveled log sink
pub struct LogSink {
    name: String,
    level: LogLevel,
    handlers: Vec<Box<dyn Handler>>,
}

impl LogSink {
    fn from_config(name: &str, config: &LogConfig) -> Result<Self, LogError> {
        let mut handlers: Vec<Box<dyn Handler>> = Vec::new();

        if config.file_output() {
            handlers.push(Box::new(FileHandler::open(&config.file_path())?));
        }
        handlers.push(Box::new(ConsoleHandler {
            formatter: ColorFormatter::console(config.level()),
        }));

        Ok(Self {
            name: name.to_string(),
            level: config.level(),
            handlers,
        })
    }

    /// Registry name this sink was built under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Severity threshold snapshotted at build time
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Log at DEBUG severity
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message, Location::caller());
    }

    /// Log at INFO severity
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message, Location::caller());
    }

    /// Log at WARNING severity
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message, Location::caller());
    }

    /// Log at ERROR severity
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message, Location::caller());
    }

    /// Log at CRITICAL severity
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(LogLevel::Critical, message, Location::caller());
    }

    fn log(&self, level: LogLevel, message: impl fmt::Display, location: &Location<'_>) {
        if level < self.level {
            return;
        }
        let record = Record::new(level, message.to_string(), location);
        for handler in &self.handlers {
            handler.emit(&record);
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

fn registry() -> &'static Mutex<HashMap<String, Arc<LogSink>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<LogSink>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Builds (or retrieves) a named sink from a configuration snapshot
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    name: String,
    config: LogConfig,
}

impl LoggerBuilder {
    /// Start a builder for the given registry name with stock defaults
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: LogConfig::default(),
        }
    }

    /// Use this configuration for the snapshot
    #[must_use]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the sink, or return the instance already registered under the
    /// name (in which case this builder's configuration is ignored)
    pub fn build(self) -> Result<Arc<LogSink>, LogError> {
        let mut registry = registry().lock();
        if let Some(sink) = registry.get(&self.name) {
            return Ok(Arc::clone(sink));
        }

        let sink = Arc::new(LogSink::from_config(&self.name, &self.config)?);
        registry.insert(self.name, Arc::clone(&sink));
        Ok(sink)
    }
}

/// Console-only logger with the stock defaults
pub fn default_logger() -> Result<Arc<LogSink>, LogError> {
    LoggerBuilder::new(DEFAULT_LOGGER_NAME).build()
}

/// Bench logger: file mirror under `./ACU_log/`, most verbose level
pub fn acu_logger() -> Result<Arc<LogSink>, LogError> {
    LoggerBuilder::new(ACU_LOGGER_NAME)
        .config(LogConfig::acu())
        .build()
}

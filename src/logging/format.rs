//! Record rendering
//!
//! The console template colorizes the severity name and bolds the message;
//! when the sink runs at DEBUG verbosity it also appends the caller as
//! `(file:line)`. The file template is plain text and never carries escapes.

use super::config::DATE_FMT;
use super::level::{LogLevel, BOLD_SEQ, RESET_SEQ};
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// A single log record as captured at the call site
#[derive(Debug, Clone)]
pub struct Record {
    /// When the record was created
    pub timestamp: DateTime<Local>,
    /// Record severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
    /// Caller source file, base name only
    pub file: String,
    /// Caller source line
    pub line: u32,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(level: LogLevel, message: String, location: &Location<'_>) -> Self {
        let file = Path::new(location.file())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.file().to_string());

        Self {
            timestamp: Local::now(),
            level,
            message,
            file,
            line: location.line(),
        }
    }
}

/// Renders a record as text, optionally wrapping the severity in ANSI color
#[derive(Debug, Clone, Copy)]
pub struct ColorFormatter {
    use_color: bool,
    with_location: bool,
}

impl ColorFormatter {
    /// Console formatter; the caller suffix appears only at DEBUG verbosity
    pub fn console(min_level: LogLevel) -> Self {
        Self {
            use_color: true,
            with_location: min_level == LogLevel::Debug,
        }
    }

    /// File formatter: plain text, no escapes, no caller suffix
    pub fn file() -> Self {
        Self {
            use_color: false,
            with_location: false,
        }
    }

    /// Render one record
    pub fn format(&self, record: &Record) -> String {
        let ts = record.timestamp.format(DATE_FMT);

        if !self.use_color {
            return format!("[{ts}]{level:<4} {msg} ", level = record.level, msg = record.message);
        }

        // The escape bytes count toward the pad width, same as the
        // reference console output.
        let level = format!("{}{}", record.level.color().seq(), record.level);
        let mut out = format!(
            "[{ts}]{level:<10} {BOLD_SEQ}{msg}{RESET_SEQ} ",
            msg = record.message
        );
        if self.with_location {
            out.push_str(&format!(
                "({BOLD_SEQ}{file}{RESET_SEQ}:{line})",
                file = record.file,
                line = record.line
            ));
        }
        out
    }
}

//! Log severities and their terminal colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// ANSI bold/bright attribute
pub const BOLD_SEQ: &str = "\x1b[1m";

/// ANSI attribute reset
pub const RESET_SEQ: &str = "\x1b[0m";

/// Log severity, ordered from most to least verbose
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum LogLevel {
    /// Diagnostic detail, including caller locations on the console
    #[default]
    Debug,
    /// Routine progress messages
    Info,
    /// Something unexpected but recoverable
    Warning,
    /// An operation failed
    Error,
    /// The session cannot continue
    Critical,
}

impl LogLevel {
    /// Upper-case severity name as it appears in rendered records
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Console color for this severity
    pub fn color(&self) -> AnsiColor {
        match self {
            LogLevel::Critical | LogLevel::Error => AnsiColor::Red,
            LogLevel::Warning => AnsiColor::Yellow,
            LogLevel::Info => AnsiColor::Green,
            LogLevel::Debug => AnsiColor::Purple,
        }
    }

    /// Get all levels, most verbose first
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Critical,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classic 8-color terminal palette
///
/// The discriminant is the palette offset; foreground codes start at 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl AnsiColor {
    /// Foreground color code (`30 + offset`)
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// Full escape sequence selecting this foreground color
    pub fn seq(self) -> String {
        format!("\x1b[{}m", self.fg_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(AnsiColor::Black.fg_code(), 30);
        assert_eq!(AnsiColor::Red.fg_code(), 31);
        assert_eq!(AnsiColor::Yellow.fg_code(), 33);
        assert_eq!(AnsiColor::Purple.fg_code(), 35);
        assert_eq!(AnsiColor::Red.seq(), "\x1b[31m");
    }

    #[test]
    fn test_level_color_mapping() {
        assert_eq!(LogLevel::Critical.color(), AnsiColor::Red);
        assert_eq!(LogLevel::Error.color(), AnsiColor::Red);
        assert_eq!(LogLevel::Warning.color(), AnsiColor::Yellow);
        assert_eq!(LogLevel::Info.color(), AnsiColor::Green);
        assert_eq!(LogLevel::Debug.color(), AnsiColor::Purple);
    }
}

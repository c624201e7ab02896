//! Logger configuration
//!
//! A [`LogConfig`] is a plain value: sinks snapshot it when they are built
//! and are unaffected by later mutation. The `acu()` preset carries the
//! bench defaults for ACU sessions.

use super::level::LogLevel;
use super::LogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Timestamp pattern shared by the console and file templates (two-digit year)
pub const DATE_FMT: &str = "%y/%m/%d %H:%M:%S";

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum severity a record must meet to be emitted
    level: LogLevel,
    /// Mirror records to a plain-text file
    file_output: bool,
    /// Directory the mirror file lives in
    file_dir: String,
    /// Mirror file name
    file_basename: String,
}

impl Default for LogConfig {
    /// Console only; `./defaultLog.txt` once file output is enabled
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            file_output: false,
            file_dir: "./".to_string(),
            file_basename: "defaultLog.txt".to_string(),
        }
    }
}

impl LogConfig {
    /// ACU bench preset: file mirror on under `./ACU_log/`, most verbose level
    pub fn acu() -> Self {
        Self {
            level: LogLevel::Debug,
            file_output: true,
            file_dir: "./ACU_log/".to_string(),
            file_basename: "ACU_log001.txt".to_string(),
        }
    }

    /// Minimum severity threshold
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Set the minimum severity threshold
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Is the file mirror enabled?
    pub fn file_output(&self) -> bool {
        self.file_output
    }

    /// Enable or disable the file mirror
    pub fn set_file_output(&mut self, enabled: bool) {
        self.file_output = enabled;
    }

    /// Directory the mirror file lives in
    pub fn file_dir(&self) -> &str {
        &self.file_dir
    }

    /// Set the mirror directory, creating it if absent
    ///
    /// The directory string is concatenated as-is with the base name to form
    /// the full path, so it normally ends with a separator (e.g. `./ACU_log/`).
    pub fn set_file_dir(&mut self, dir: &str) -> Result<(), LogError> {
        if !Path::new(dir).is_dir() {
            fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
                path: dir.to_string(),
                source,
            })?;
        }
        self.file_dir = dir.to_string();
        Ok(())
    }

    /// Mirror file name
    pub fn file_basename(&self) -> &str {
        &self.file_basename
    }

    /// Set the mirror file name
    pub fn set_file_basename(&mut self, basename: &str) {
        self.file_basename = basename.to_string();
    }

    /// Full mirror path: directory and base name concatenated as-is
    pub fn file_path(&self) -> String {
        format!("{}{}", self.file_dir, self.file_basename)
    }
}

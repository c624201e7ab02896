//! # Diaglink
//!
//! Bench-diagnostic utilities:
//! - Colorized, level-filtered logging with an optional plain-text file mirror
//! - Line-oriented serial command channel (fixed 115200 baud)
//!
//! The two subsystems are independent; a typical diagnostic session uses both.
//!
//! ## Example
//!
//! ```rust,no_run
//! use diaglink::logging::{LogConfig, LoggerBuilder};
//! use diaglink::serial::CommandChannel;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let log = LoggerBuilder::new("bench").config(LogConfig::acu()).build()?;
//!     log.info("opening control link");
//!
//!     let mut channel = CommandChannel::open("/dev/ttyUSB0", Duration::from_secs(1))?;
//!     let reply = channel.send_command("STATUS")?;
//!     channel.display(&reply);
//!     channel.close();
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod serial;

// Re-exports for convenience
pub use crate::logging::{LogConfig, LogError, LogLevel, LogSink, LoggerBuilder};
pub use crate::serial::{ChannelError, CommandChannel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

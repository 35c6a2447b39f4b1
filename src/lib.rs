// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::unused_self)]
//! A small logger that writes leveled, timestamped lines to files on disk,
//! and rotates these files daily and whenever a configurable number of records was written.
//!
//! ```rust,ignore
//! use rotating_logger::{info, LevelMask, RotatingLogger};
//!
//! let logger = RotatingLogger::new("log_files", "my_service", LevelMask::ALL);
//! info!(logger, "started with {} workers", 4);
//! ```
//!
//! The log lines are written to files like
//!
//! ```text
//! log_files/my_service-20261018-0.log
//! log_files/my_service-20261018-1.log
//! log_files/my_service-20261019-0.log
//! ```
//!
//! where the first number is the calendar date and the second number is the
//! rotation index within that date. Each line looks like
//!
//! ```text
//! [2026-10-18 14:02:51] [INFO] started with 4 workers
//! ```
//!
//! See
//!
//! * [`RotatingLogger`] for the write methods and the rotation rules,
//! * [`LoggerBuilder`] for all configuration options,
//! * [`RotatingLogger::start`] for using the logger as backend of the `log` facade,
//! * [`ErrorChannel`] for where problems with the log files are reported.

mod clock;
mod error_channel;
mod file_spec;
mod formats;
mod level;
mod log_adapter;
mod logger;
mod logger_error;
mod macros;
mod stack_trace;
mod state;
mod util;

pub use crate::clock::{Clock, SystemClock};
pub use crate::error_channel::ErrorChannel;
pub use crate::file_spec::FileSpec;
#[cfg(feature = "textparse")]
pub use crate::formats::ParsedLine;
pub use crate::formats::TS_DASHES_BLANK_COLONS;
pub use crate::level::{Level, LevelMask};
pub use crate::log_adapter::LoggerHandle;
pub use crate::logger::{LoggerBuilder, RotatingLogger};
pub use crate::logger_error::LoggerError;

/// Default number of records after which a new file is started within the same day.
pub const DEFAULT_MAX_RECORDS_PER_FILE: u64 = 3_200_000;

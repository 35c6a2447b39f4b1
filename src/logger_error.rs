use std::path::PathBuf;
use thiserror::Error;

/// Describes the problems that can occur while writing log files.
///
/// The regular write methods of [`RotatingLogger`](crate::RotatingLogger) never return
/// these errors, they report them to the configured [`ErrorChannel`](crate::ErrorChannel).
/// Use [`RotatingLogger::try_write`](crate::RotatingLogger::try_write) to receive them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoggerError {
    /// The log directory does not exist and cannot be created.
    #[error("log directory {} is not available", path.display())]
    DirectoryUnavailable {
        /// The directory.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The log file cannot be opened for appending.
    #[error("log file {} cannot be opened", path.display())]
    FileOpenFailed {
        /// The log file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Writing a log line to the log file failed.
    #[error("writing to log file {} failed", path.display())]
    WriteFailed {
        /// The log file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The level mask could not be parsed.
    #[error("invalid level mask: {0}")]
    LevelMask(String),

    /// Installing the logger as backend of the `log` facade failed.
    #[error("logger initialization failed")]
    Log(#[from] log::SetLoggerError),
}

/// Writes a DEBUG record to the given logger, formatting the message like `format!`.
///
/// ```rust,ignore
/// rotating_logger::debug!(logger, "connection {} opened", id);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Writes a TRACE record to the given logger, formatting the message like `format!`.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Writes an INFO record to the given logger, formatting the message like `format!`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Writes an ERROR record to the given logger, formatting the message like `format!`.
///
/// With DEBUG enabled, the backtrace of the call follows as a DEBUG record.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

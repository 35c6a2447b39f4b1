use crate::{Level, LoggerError, RotatingLogger};
use std::{path::PathBuf, sync::Arc};

// The `log` facade knows WARN, which the rotating logger writes as INFO.
fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn | log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

impl log::Log for RotatingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.level_mask().contains(level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        self.dispatch_reporting(level_from_log(record.level()), *record.args());
    }

    // Records are written unbuffered.
    fn flush(&self) {}
}

// Owns the logger on behalf of the `log` facade.
struct Facade(Arc<RotatingLogger>);
impl log::Log for Facade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(&*self.0, metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(&*self.0, record);
    }

    fn flush(&self) {}
}

impl RotatingLogger {
    /// Installs the logger as the backend of the `log` facade,
    /// so that the macros `log::error!`, `log::info!` etc. write to the rotating files.
    ///
    /// `log::Level::Warn` is written as INFO.
    /// The global maximum level of the `log` facade is set to the most verbose enabled level.
    ///
    /// Keep the returned handle to close the file or to query the logger.
    ///
    /// # Errors
    ///
    /// `LoggerError::Log` if a logger was installed before.
    pub fn start(self) -> Result<LoggerHandle, LoggerError> {
        let max_level = self.level_mask().max_level_filter();
        let logger = Arc::new(self);
        log::set_boxed_logger(Box::new(Facade(Arc::clone(&logger))))?;
        log::set_max_level(max_level);
        Ok(LoggerHandle { logger })
    }
}

/// Shared handle to a [`RotatingLogger`] that was installed with [`RotatingLogger::start`].
#[derive(Clone, Debug)]
pub struct LoggerHandle {
    logger: Arc<RotatingLogger>,
}
impl LoggerHandle {
    /// Access to the logger itself, e.g. for using its write methods directly.
    #[must_use]
    pub fn logger(&self) -> &RotatingLogger {
        &self.logger
    }

    /// See [`RotatingLogger::current_file_name`].
    #[must_use]
    pub fn current_file_name(&self) -> Option<PathBuf> {
        self.logger.current_file_name()
    }

    /// See [`RotatingLogger::error_count`].
    #[must_use]
    pub fn error_count(&self) -> u64 {
        self.logger.error_count()
    }

    /// See [`RotatingLogger::close`].
    pub fn close(&self) {
        self.logger.close();
    }
}

#[cfg(test)]
mod test {
    use super::level_from_log;
    use crate::{Level, LevelMask, RotatingLogger};
    use log::Log;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_from_log(log::Level::Warn), Level::Info);
        assert_eq!(level_from_log(log::Level::Error), Level::Error);
        assert_eq!(level_from_log(log::Level::Trace), Level::Trace);
    }

    #[test]
    fn test_enabled() {
        let logger = RotatingLogger::new("unused", "svc", LevelMask::INFO);
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_log_record_without_global_install() {
        let dir = temp_dir::TempDir::new().unwrap();
        let logger = RotatingLogger::new(dir.path(), "facade", LevelMask::ALL);
        logger.log(
            &log::Record::builder()
                .args(format_args!("via {}", "facade"))
                .level(log::Level::Warn)
                .build(),
        );
        let path = logger.current_file_name().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.ends_with("] [INFO] via facade\n"), "{content}");
    }
}

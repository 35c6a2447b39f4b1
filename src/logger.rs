use crate::{
    stack_trace,
    state::{Config, State},
    util::{eprint_err, eprint_msg, ErrorCode},
    Clock, ErrorChannel, FileSpec, Level, LevelMask, LoggerError, SystemClock,
    DEFAULT_MAX_RECORDS_PER_FILE,
};
use std::{
    fmt,
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

/// Writes leveled log lines to files that are rotated daily and by number of records.
///
/// ## Rotation
///
/// No file is touched before the first record is written.
/// Then, for each record, the logger decides, in this order:
///
/// - if the calendar date has changed since the last record, the current file is closed
///   and a file with index 0 is opened for the new date;
/// - otherwise the record count of the date is incremented, and if
///   `record_count / max_records_per_file` differs from the current index,
///   the current file is closed and the file with the new index is opened.
///
/// With `max_records_per_file = 2`, the first two records of a day thus go to
/// `<basename>-<date>-0.log`, the next two to `<basename>-<date>-1.log`, and so on.
/// See [`FileSpec`] for the file names.
///
/// The rotation decision, the timestamp of the record and the write itself
/// happen under a single lock, so the logger can be shared between threads.
///
/// ## Errors
///
/// Problems with the log directory or the log files never reach the caller of
/// [`debug`](Self::debug), [`trace`](Self::trace), [`info`](Self::info) or
/// [`error`](Self::error); the affected record is dropped and the problem is reported to
/// the [`ErrorChannel`]. The rotation bookkeeping continues as if the record had been written.
/// [`try_write`](Self::try_write) returns the problem instead.
#[derive(Debug)]
pub struct RotatingLogger {
    level_mask: LevelMask,
    error_channel: ErrorChannel,
    error_count: AtomicU64,
    state: Mutex<State>,
}

impl RotatingLogger {
    /// Creates a logger that writes to `directory`, with file names starting with `basename`,
    /// for the levels in `level_mask`.
    ///
    /// Nothing is checked or created here; the directory is created,
    /// if necessary, when the first record is written.
    #[must_use]
    pub fn new<P: Into<PathBuf>, S: Into<String>>(
        directory: P,
        basename: S,
        level_mask: LevelMask,
    ) -> Self {
        Self::builder()
            .file_spec(FileSpec::new(directory, basename))
            .level_mask(level_mask)
            .build()
    }

    /// Returns a builder for a logger with all configuration options.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Changes the number of records after which a new file is started within a day.
    ///
    /// Should be called before the first record is written, otherwise the current
    /// file index can jump. Zero is treated as one.
    pub fn set_max_records_per_file(&self, max_records: u64) {
        self.lock_state().set_max_records(max_records);
    }

    /// The number of records after which a new file is started within a day.
    #[must_use]
    pub fn max_records_per_file(&self) -> u64 {
        self.lock_state().max_records()
    }

    /// The levels that are written.
    #[must_use]
    pub fn level_mask(&self) -> LevelMask {
        self.level_mask
    }

    /// Path of the file that was opened most recently, `None` before the first write.
    #[must_use]
    pub fn current_file_name(&self) -> Option<PathBuf> {
        self.lock_state().current_filename()
    }

    /// Number of error records since the logger was created.
    ///
    /// Each [`error`](Self::error) call that is not filtered out by the level mask counts,
    /// no matter whether its line could be written.
    /// Does not wait for concurrent writers, the value can thus lag slightly behind.
    #[must_use]
    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Writes a record with level DEBUG.
    pub fn debug(&self, args: fmt::Arguments) {
        self.dispatch_reporting(Level::Debug, args);
    }

    /// Writes a record with level TRACE.
    pub fn trace(&self, args: fmt::Arguments) {
        self.dispatch_reporting(Level::Trace, args);
    }

    /// Writes a record with level INFO.
    pub fn info(&self, args: fmt::Arguments) {
        self.dispatch_reporting(Level::Info, args);
    }

    /// Writes a record with level ERROR, and increments the error count.
    ///
    /// If DEBUG is enabled, too, a second record with level DEBUG follows
    /// that contains the backtrace of the call.
    pub fn error(&self, args: fmt::Arguments) {
        self.dispatch_reporting(Level::Error, args);
    }

    /// Writes a record with the given level, like the level-specific methods,
    /// but returns problems with the output rather than reporting them to the error channel.
    ///
    /// The rotation bookkeeping and the error count are updated regardless of the outcome.
    /// If several lines are affected (an error record and its backtrace),
    /// the first problem is returned.
    ///
    /// # Errors
    ///
    /// `LoggerError::DirectoryUnavailable`, `LoggerError::FileOpenFailed`,
    /// `LoggerError::WriteFailed`.
    pub fn try_write(&self, level: Level, args: fmt::Arguments) -> Result<(), LoggerError> {
        let mut o_first_error = None;
        self.dispatch(level, args, &mut |e| {
            o_first_error.get_or_insert(e);
        });
        o_first_error.map_or(Ok(()), Err)
    }

    /// Closes the current log file, if any.
    ///
    /// This is not a final shutdown: the next record opens the appropriate file again.
    pub fn close(&self) {
        self.lock_state().close();
    }

    pub(crate) fn dispatch_reporting(&self, level: Level, args: fmt::Arguments) {
        self.dispatch(level, args, &mut |e| self.report(&e));
    }

    // Disabled levels return before any formatting, locking or counting.
    fn dispatch(
        &self,
        level: Level,
        args: fmt::Arguments,
        on_error: &mut dyn FnMut(LoggerError),
    ) {
        if !self.level_mask.contains(level) {
            return;
        }
        if level == Level::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }

        let message = args
            .as_str()
            .map_or_else(|| fmt::format(args), ToString::to_string);
        let result = self.lock_state().write(level, &message);
        if let Err(e) = result {
            on_error(e);
        }

        if level == Level::Error && self.level_mask.contains(Level::Debug) {
            let backtrace = stack_trace::render(&stack_trace::capture());
            self.dispatch(Level::Debug, format_args!("{backtrace}"), on_error);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| {
            eprint_msg(
                &self.error_channel,
                ErrorCode::Poison,
                "lock on logger state was poisoned, continuing",
            );
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    fn report(&self, e: &LoggerError) {
        let error_code = match e {
            LoggerError::DirectoryUnavailable { .. } => ErrorCode::DirCreate,
            LoggerError::FileOpenFailed { .. } => ErrorCode::LogFile,
            LoggerError::WriteFailed { .. } => ErrorCode::Write,
            // not produced by writing records
            LoggerError::LevelMask(_) | LoggerError::Log(_) => ErrorCode::Setup,
        };
        eprint_err(&self.error_channel, error_code, "log line dropped", e);
    }
}

/// Builder for a [`RotatingLogger`].
///
/// ```rust,ignore
/// use rotating_logger::{ErrorChannel, LevelMask, RotatingLogger};
///
/// let logger = RotatingLogger::builder()
///     .directory("log_files")
///     .basename("my_service")
///     .level_mask("info|error".parse::<LevelMask>()?)
///     .max_records_per_file(100_000)
///     .error_channel(ErrorChannel::DevNull)
///     .build();
/// ```
pub struct LoggerBuilder {
    file_spec: FileSpec,
    level_mask: LevelMask,
    max_records: u64,
    print_message: bool,
    error_channel: ErrorChannel,
    clock: Arc<dyn Clock>,
}
impl Default for LoggerBuilder {
    /// Files in the current directory, named after the program, all levels enabled.
    fn default() -> Self {
        Self {
            file_spec: FileSpec::default(),
            level_mask: LevelMask::ALL,
            max_records: DEFAULT_MAX_RECORDS_PER_FILE,
            print_message: false,
            error_channel: ErrorChannel::default(),
            clock: Arc::new(SystemClock::local()),
        }
    }
}
impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.debug_struct("LoggerBuilder")
            .field("file_spec", &self.file_spec)
            .field("level_mask", &self.level_mask)
            .field("max_records", &self.max_records)
            .field("print_message", &self.print_message)
            .field("error_channel", &self.error_channel)
            .field("clock", &"<..>")
            .finish()
    }
}
impl LoggerBuilder {
    /// Specifies the folder and the basename of the log files in one go.
    #[must_use]
    pub fn file_spec(mut self, file_spec: FileSpec) -> Self {
        self.file_spec = file_spec;
        self
    }

    /// Specifies the folder for the log files.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.file_spec = self.file_spec.directory(directory);
        self
    }

    /// Specifies the prefix of the log file names.
    #[must_use]
    pub fn basename<S: Into<String>>(mut self, basename: S) -> Self {
        self.file_spec = self.file_spec.basename(basename);
        self
    }

    /// Specifies the levels that are written.
    #[must_use]
    pub fn level_mask(mut self, level_mask: LevelMask) -> Self {
        self.level_mask = level_mask;
        self
    }

    /// Specifies the number of records after which a new file is started within a day.
    ///
    /// The default is [`DEFAULT_MAX_RECORDS_PER_FILE`]. Zero is treated as one.
    #[must_use]
    pub fn max_records_per_file(mut self, max_records: u64) -> Self {
        self.max_records = max_records;
        self
    }

    /// Makes the logger use UTC, rather than local time, for dates and timestamps.
    #[must_use]
    pub fn use_utc(mut self) -> Self {
        self.clock = Arc::new(SystemClock::utc());
        self
    }

    /// Makes the logger use the given clock for dates and timestamps.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Makes the logger print a message to stdout whenever it opens a log file.
    #[must_use]
    pub fn print_message(mut self) -> Self {
        self.print_message = true;
        self
    }

    /// Specifies where problems with the log output are reported; the default is stderr.
    #[must_use]
    pub fn error_channel(mut self, error_channel: ErrorChannel) -> Self {
        self.error_channel = error_channel;
        self
    }

    /// Produces the logger.
    #[must_use]
    pub fn build(self) -> RotatingLogger {
        RotatingLogger {
            level_mask: self.level_mask,
            error_channel: self.error_channel,
            error_count: AtomicU64::new(0),
            state: Mutex::new(State::new(
                Config {
                    file_spec: self.file_spec,
                    print_message: self.print_message,
                    clock: self.clock,
                },
                self.max_records,
            )),
        }
    }
}

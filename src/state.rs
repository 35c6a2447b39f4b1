use crate::{formats::write_line, Clock, FileSpec, Level, LoggerError};
use chrono::{NaiveDate, NaiveDateTime};
use std::{fs::File, path::PathBuf, sync::Arc};

// The immutable configuration of the state.
pub(crate) struct Config {
    pub(crate) file_spec: FileSpec,
    pub(crate) print_message: bool,
    pub(crate) clock: Arc<dyn Clock>,
}
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.debug_struct("Config")
            .field("file_spec", &self.file_spec)
            .field("print_message", &self.print_message)
            .field("clock", &"<..>")
            .finish()
    }
}

// Bookkeeping for the calendar date of the current output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DayState {
    date: NaiveDate,
    // number of records of this date before the current one;
    // not reset by index rotation, only by a date change
    record_count: u64,
    // always record_count / max_records at the time of the last check
    file_index: u64,
}

// The mutable state of a RotatingLogger.
//
// Uninitialized: o_day is None.
// Open: o_day is Some, o_file is Some.
// Closed (or opening failed): o_day is Some, o_file is None; the next write reopens.
#[derive(Debug)]
pub(crate) struct State {
    config: Config,
    max_records: u64,
    o_day: Option<DayState>,
    o_file: Option<File>,
    o_current_path: Option<PathBuf>,
}
impl State {
    pub(crate) fn new(config: Config, max_records: u64) -> Self {
        Self {
            config,
            max_records: max_records.max(1),
            o_day: None,
            o_file: None,
            o_current_path: None,
        }
    }

    pub(crate) fn set_max_records(&mut self, max_records: u64) {
        self.max_records = max_records.max(1);
    }

    pub(crate) fn max_records(&self) -> u64 {
        self.max_records
    }

    pub(crate) fn current_filename(&self) -> Option<PathBuf> {
        self.o_current_path.clone()
    }

    // Decides if the output file must change, and mounts the new file if so.
    //
    // The bookkeeping is done before any file system access, so that a failing
    // directory or file does not shift the naming of subsequent files.
    fn prepare(&mut self, now: &NaiveDateTime) -> Result<(), LoggerError> {
        let today = now.date();
        let max_records = self.max_records;

        let rotate = match self.o_day {
            None => {
                self.o_day = Some(DayState {
                    date: today,
                    record_count: 0,
                    file_index: 0,
                });
                true
            }
            Some(ref mut day) if day.date == today => {
                day.record_count += 1;
                let new_index = day.record_count / max_records;
                if new_index == day.file_index {
                    false
                } else {
                    day.file_index = new_index;
                    true
                }
            }
            Some(ref mut day) => {
                day.date = today;
                day.record_count = 0;
                day.file_index = day.record_count / max_records;
                true
            }
        };

        if rotate {
            // the old file is closed before the new one becomes active
            self.o_file = None;
        }
        if self.o_file.is_none() {
            self.mount_file()?;
        }
        Ok(())
    }

    fn mount_file(&mut self) -> Result<(), LoggerError> {
        let Some(day) = self.o_day else {
            return Ok(());
        };
        let path = self.config.file_spec.as_pathbuf(day.date, day.file_index);
        self.o_current_path = Some(path.clone());

        let directory = self.config.file_spec.get_directory();
        if !directory.as_os_str().is_empty() {
            platform::create_dir(directory)
                .or_else(|e| {
                    if e.kind() == std::io::ErrorKind::AlreadyExists {
                        Ok(())
                    } else {
                        Err(e)
                    }
                })
                .map_err(|source| LoggerError::DirectoryUnavailable {
                    path: directory.to_path_buf(),
                    source,
                })?;
        }

        let file = platform::open_append(&path).map_err(|source| LoggerError::FileOpenFailed {
            path: path.clone(),
            source,
        })?;
        if self.config.print_message {
            println!("Log is written to {}", path.display());
        }
        self.o_file = Some(file);
        Ok(())
    }

    // Writes one record; the timestamp in the line is the one that was used
    // for the rotation decision.
    pub(crate) fn write(&mut self, level: Level, message: &str) -> Result<(), LoggerError> {
        let now = self.config.clock.now();
        self.prepare(&now)?;

        if let Some(ref mut file) = self.o_file {
            write_line(file, &now, level, message).map_err(|source| LoggerError::WriteFailed {
                path: self.o_current_path.clone().unwrap_or_default(),
                source,
            })?;
        }
        Ok(())
    }

    pub(crate) fn close(&mut self) {
        // dropping the file closes it
        self.o_file = None;
    }

    #[cfg(test)]
    fn counters(&self) -> Option<(NaiveDate, u64, u64)> {
        self.o_day.map(|day| (day.date, day.record_count, day.file_index))
    }
}

mod platform {
    use std::{
        fs::{DirBuilder, File, OpenOptions},
        path::Path,
    };

    // Creates only the last level of the path.
    pub(super) fn create_dir(path: &Path) -> std::io::Result<()> {
        let mut builder = DirBuilder::new();
        #[cfg(target_family = "unix")]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(path)
    }

    // Never truncates; new files are only accessible by the owner.
    pub(super) fn open_append(path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(target_family = "unix")]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options.open(path)
    }
}

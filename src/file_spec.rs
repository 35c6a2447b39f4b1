use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const SUFFIX: &str = "log";

/// Builder object for specifying the location of the log files.
///
/// The name of a log file is composed like this:
///
/// ```text
/// <directory>/<basename>-<YYYYMMDD>-<index>.log
/// ```
///
/// where `YYYYMMDD` is the calendar date the records belong to,
/// and `index` counts the files of that date, starting with 0.
///
/// By default, the files are written to the current working directory,
/// and the basename is the stem of the program name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSpec {
    directory: PathBuf,
    basename: String,
}
impl Default for FileSpec {
    fn default() -> Self {
        let basename = std::env::args()
            .next()
            .as_ref()
            .map(Path::new)
            .and_then(Path::file_stem)
            .map_or_else(|| "rs".to_owned(), |s| s.to_string_lossy().to_string());
        Self {
            directory: PathBuf::from("."),
            basename,
        }
    }
}
impl FileSpec {
    /// Creates a `FileSpec` from a directory and a basename.
    #[must_use]
    pub fn new<P: Into<PathBuf>, S: Into<String>>(directory: P, basename: S) -> Self {
        Self {
            directory: directory.into(),
            basename: basename.into(),
        }
    }

    /// Specifies the folder for the log files.
    ///
    /// The folder is created on the first write if it does not exist,
    /// but its parent folder must exist.
    #[must_use]
    pub fn directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    /// Specifies the prefix of the log file names.
    #[must_use]
    pub fn basename<S: Into<String>>(mut self, basename: S) -> Self {
        self.basename = basename.into();
        self
    }

    /// The folder of the log files.
    #[must_use]
    pub fn get_directory(&self) -> &Path {
        &self.directory
    }

    /// The prefix of the log file names.
    #[must_use]
    pub fn get_basename(&self) -> &str {
        &self.basename
    }

    /// The path of the log file for the given date and rotation index.
    #[must_use]
    pub fn as_pathbuf(&self, date: NaiveDate, index: u64) -> PathBuf {
        self.directory.join(format!(
            "{}-{}-{index}.{SUFFIX}",
            self.basename,
            date.format("%Y%m%d")
        ))
    }
}

#[cfg(test)]
mod test {
    use super::FileSpec;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn test_naming() {
        let file_spec = FileSpec::new("/var/log/svc", "svc");
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            file_spec.as_pathbuf(date, 0),
            PathBuf::from("/var/log/svc/svc-20240307-0.log")
        );
        assert_eq!(
            file_spec.as_pathbuf(date, 12),
            PathBuf::from("/var/log/svc/svc-20240307-12.log")
        );
    }

    #[test]
    fn test_builder() {
        let file_spec = FileSpec::default().directory("logs").basename("foo");
        assert_eq!(file_spec, FileSpec::new("logs", "foo"));
        assert_eq!(file_spec.get_basename(), "foo");
        assert_eq!(file_spec.get_directory(), PathBuf::from("logs"));
    }

    #[test]
    fn test_default_basename() {
        assert!(!FileSpec::default().get_basename().is_empty());
    }
}

use std::{fs::OpenOptions, io::Write, path::PathBuf};

/// Describes where the logger reports problems with its own output,
/// like a log directory that cannot be created or a log file that cannot be written.
///
/// Such problems are never returned to the caller of the regular write methods;
/// a logger must not disturb the program it serves.
///
/// Used in [`LoggerBuilder::error_channel`](crate::LoggerBuilder::error_channel).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorChannel {
    /// Write problems to stderr.
    #[default]
    StdErr,
    /// Write problems to stdout.
    StdOut,
    /// Append problems to the given file.
    File(PathBuf),
    /// Don't report problems at all.
    DevNull,
}
impl ErrorChannel {
    // Problems with the error channel itself are ignored.
    pub(crate) fn report(&self, msg: &str) {
        match self {
            Self::StdErr => {
                let _ = writeln!(std::io::stderr(), "{msg}");
            }
            Self::StdOut => {
                let _ = writeln!(std::io::stdout(), "{msg}");
            }
            Self::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "{msg}");
                }
            }
            Self::DevNull => {}
        }
    }
}

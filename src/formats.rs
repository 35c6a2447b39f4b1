use crate::Level;
use chrono::NaiveDateTime;
use std::io::Write;

/// Format of the timestamp in the log lines, e.g. `2026-10-18 14:02:51`.
pub const TS_DASHES_BLANK_COLONS: &str = "%Y-%m-%d %H:%M:%S";

// Produces log lines like
// [2026-10-18 14:02:51] [INFO] Task successfully read from conf.json
pub(crate) fn write_line(
    w: &mut dyn Write,
    now: &NaiveDateTime,
    level: Level,
    message: &str,
) -> std::io::Result<()> {
    writeln!(
        w,
        "[{}] [{}] {}",
        now.format(TS_DASHES_BLANK_COLONS),
        level,
        message
    )
}

#[cfg(feature = "textparse")]
pub use self::parse::ParsedLine;

#[cfg(feature = "textparse")]
mod parse {
    use super::TS_DASHES_BLANK_COLONS;
    use crate::Level;
    use chrono::NaiveDateTime;
    use regex::Regex;
    use std::sync::LazyLock;

    static LINE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"(?s)^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] \[(DEBUG|TRACE|INFO|ERROR)\] (.*)$",
        )
        .unwrap(/* ok */)
    });

    /// A log record, read back from its textual form.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ParsedLine {
        /// When the record was written.
        pub timestamp: NaiveDateTime,
        /// The level of the record.
        pub level: Level,
        /// The message, without the trailing line break.
        pub message: String,
    }
    impl ParsedLine {
        /// Parses a record that was written by a
        /// [`RotatingLogger`](crate::RotatingLogger).
        ///
        /// Returns `None` if the text does not have the expected shape.
        #[must_use]
        pub fn parse(line: &str) -> Option<Self> {
            let line = line.strip_suffix('\n').unwrap_or(line);
            let captures = LINE.captures(line)?;
            let timestamp =
                NaiveDateTime::parse_from_str(&captures[1], TS_DASHES_BLANK_COLONS).ok()?;
            let level = captures[2].parse::<Level>().ok()?;
            Some(Self {
                timestamp,
                level,
                message: captures[3].to_string(),
            })
        }
    }
}

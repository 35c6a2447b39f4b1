use crate::LoggerError;
use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

/// Severity of a log record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Detailed diagnostic output; also used for the backtrace that follows an error record.
    Debug,
    /// Tracing of the program flow.
    Trace,
    /// Regular operational messages.
    Info,
    /// Errors; each error record is counted, see [`RotatingLogger::error_count`](crate::RotatingLogger::error_count).
    Error,
}
impl Level {
    /// The name of the level as it appears in the log line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }

    /// The bit that enables this level in a [`LevelMask`].
    #[must_use]
    pub fn bit(self) -> u8 {
        match self {
            Self::Debug => LevelMask::DEBUG.0,
            Self::Trace => LevelMask::TRACE.0,
            Self::Info => LevelMask::INFO.0,
            Self::Error => LevelMask::ERROR.0,
        }
    }
}
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for Level {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            "INFO" => Ok(Self::Info),
            "ERROR" => Ok(Self::Error),
            _ => Err(LoggerError::LevelMask(s.to_string())),
        }
    }
}

/// Set of the levels that a logger writes; all others are ignored.
///
/// Masks are combined with `|`:
///
/// ```rust,ignore
/// # use rotating_logger::LevelMask;
/// let mask = LevelMask::INFO | LevelMask::ERROR;
/// assert_eq!(mask.bits(), 12);
/// ```
///
/// A mask can also be parsed from text, e.g. from a configuration file:
/// `"all"`, `"none"`, or level names separated by `|` or `,`, like `"info|error"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LevelMask(u8);
impl LevelMask {
    /// No level is written.
    pub const NONE: Self = Self(0);
    /// Enables [`Level::Debug`].
    pub const DEBUG: Self = Self(1);
    /// Enables [`Level::Trace`].
    pub const TRACE: Self = Self(2);
    /// Enables [`Level::Info`].
    pub const INFO: Self = Self(4);
    /// Enables [`Level::Error`].
    pub const ERROR: Self = Self(8);
    /// All levels are written.
    pub const ALL: Self = Self(1 | 2 | 4 | 8);

    /// Builds a mask from its numeric representation; unknown bits are dropped.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// The numeric representation.
    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if records of the given level are written.
    #[must_use]
    pub fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    /// The most verbose `log::LevelFilter` that lets all enabled levels pass.
    #[must_use]
    pub fn max_level_filter(self) -> log::LevelFilter {
        if self.contains(Level::Trace) {
            log::LevelFilter::Trace
        } else if self.contains(Level::Debug) {
            log::LevelFilter::Debug
        } else if self.contains(Level::Info) {
            log::LevelFilter::Info
        } else if self.contains(Level::Error) {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Off
        }
    }
}
impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        Self(level.bit())
    }
}
impl BitOr for LevelMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
impl BitOr<Level> for LevelMask {
    type Output = Self;
    fn bitor(self, rhs: Level) -> Self {
        Self(self.0 | rhs.bit())
    }
}
impl BitOrAssign for LevelMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl FromStr for LevelMask {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::ALL);
        }
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::NONE);
        }
        let mut mask = Self::NONE;
        for name in trimmed.split(['|', ',']) {
            let level = name
                .parse::<Level>()
                .map_err(|_| LoggerError::LevelMask(s.to_string()))?;
            mask = mask | level;
        }
        Ok(mask)
    }
}
impl fmt::Display for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("ALL");
        }
        if *self == Self::NONE {
            return f.write_str("NONE");
        }
        let mut first = true;
        for level in [Level::Debug, Level::Trace, Level::Info, Level::Error] {
            if self.contains(level) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(level.as_str())?;
                first = false;
            }
        }
        Ok(())
    }
}

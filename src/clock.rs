use chrono::{Local, NaiveDateTime, Utc};

/// Source of the current time.
///
/// The logger asks its clock exactly once per record; the returned value decides both
/// the calendar date that selects the log file and the timestamp that is written into the line.
///
/// The default is [`SystemClock`]. Own implementations are useful mainly in tests,
/// e.g. to simulate the change of a calendar date.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system time, either in the local timezone or in UTC.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock {
    use_utc: bool,
}
impl SystemClock {
    /// A clock that reports the local time.
    #[must_use]
    pub fn local() -> Self {
        Self { use_utc: false }
    }

    /// A clock that reports UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self { use_utc: true }
    }
}
impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        if self.use_utc {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Clock, SystemClock};

    #[test]
    fn test_utc_and_local_agree_on_instant() {
        let local = SystemClock::local().now();
        let utc = SystemClock::utc().now();
        let offset = chrono::Local::now().offset().local_minus_utc();
        let diff = (local - utc).num_seconds() - i64::from(offset);
        assert!(diff.abs() <= 2, "unexpected difference {diff}");
    }
}

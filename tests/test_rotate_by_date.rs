
use chrono::TimeDelta;
use rotating_logger::{info, trace, LevelMask, RotatingLogger};
use std::sync::Arc;
use test_utils::{at, files, lines, ManualClock};

#[test]
fn date_change_starts_with_index_zero() {
    let directory = test_utils::dir();
    let clock = Arc::new(ManualClock::new(at(2026, 2, 28, 23, 59, 58)));
    let logger = RotatingLogger::builder()
        .directory(&directory)
        .basename("daily")
        .level_mask(LevelMask::ALL)
        .max_records_per_file(2)
        .clock(Arc::clone(&clock) as Arc<dyn rotating_logger::Clock>)
        .build();

    for i in 0..5 {
        info!(logger, "late {i}");
    }
    assert_eq!(
        logger.current_file_name(),
        Some(directory.join("daily-20260228-2.log"))
    );

    clock.advance(TimeDelta::seconds(3));
    trace!(logger, "early");
    info!(logger, "early again");
    info!(logger, "third of the day");

    assert_eq!(
        files(&directory),
        vec![
            directory.join("daily-20260228-0.log"),
            directory.join("daily-20260228-1.log"),
            directory.join("daily-20260228-2.log"),
            directory.join("daily-20260301-0.log"),
            directory.join("daily-20260301-1.log"),
        ]
    );
    assert_eq!(
        lines(&directory.join("daily-20260228-2.log")),
        vec!["[2026-02-28 23:59:58] [INFO] late 4"]
    );
    assert_eq!(
        lines(&directory.join("daily-20260301-0.log")),
        vec![
            "[2026-03-01 00:00:01] [TRACE] early",
            "[2026-03-01 00:00:01] [INFO] early again",
        ]
    );
    assert_eq!(
        lines(&directory.join("daily-20260301-1.log")),
        vec!["[2026-03-01 00:00:01] [INFO] third of the day"]
    );
}

#[test]
fn date_change_while_closed() {
    let directory = test_utils::dir();
    let clock = Arc::new(ManualClock::new(at(2026, 12, 31, 12, 0, 0)));
    let logger = RotatingLogger::builder()
        .directory(&directory)
        .basename("closed")
        .max_records_per_file(1)
        .clock(Arc::clone(&clock) as Arc<dyn rotating_logger::Clock>)
        .build();

    info!(logger, "a");
    info!(logger, "b");
    logger.close();
    clock.set(at(2027, 1, 1, 8, 0, 0));
    info!(logger, "c");

    assert_eq!(
        files(&directory),
        vec![
            directory.join("closed-20261231-0.log"),
            directory.join("closed-20261231-1.log"),
            directory.join("closed-20270101-0.log"),
        ]
    );
    assert_eq!(
        lines(&directory.join("closed-20270101-0.log")),
        vec!["[2027-01-01 08:00:00] [INFO] c"]
    );
}

#[test]
fn reopen_after_close_appends() {
    let directory = test_utils::dir();
    let clock = Arc::new(ManualClock::new(at(2026, 6, 1, 10, 0, 0)));
    let logger = RotatingLogger::builder()
        .directory(&directory)
        .basename("reopen")
        .clock(Arc::clone(&clock) as Arc<dyn rotating_logger::Clock>)
        .build();

    info!(logger, "before close");
    logger.close();
    logger.close();
    clock.advance(TimeDelta::minutes(5));
    info!(logger, "after close");

    assert_eq!(
        lines(&directory.join("reopen-20260601-0.log")),
        vec![
            "[2026-06-01 10:00:00] [INFO] before close",
            "[2026-06-01 10:05:00] [INFO] after close",
        ]
    );
}

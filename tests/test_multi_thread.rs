
use rotating_logger::{info, RotatingLogger};
use std::{collections::HashSet, sync::Arc, thread::JoinHandle};
use test_utils::{at, files, lines, ManualClock};

const NO_OF_THREADS: usize = 5;
const NO_OF_LOGLINES_PER_THREAD: usize = 2_000;
const MAX_RECORDS_PER_FILE: u64 = 1_000;

#[test]
fn multi_threaded() {
    let directory = test_utils::dir();
    let logger = Arc::new(
        RotatingLogger::builder()
            .directory(&directory)
            .basename("test_mt")
            .max_records_per_file(MAX_RECORDS_PER_FILE)
            .clock(Arc::new(ManualClock::new(at(2026, 10, 18, 12, 0, 0))))
            .build(),
    );

    let worker_handles = start_worker_threads(&logger, NO_OF_THREADS);
    let closer = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for _ in 0..50 {
                logger.close();
                std::thread::yield_now();
            }
        })
    };
    wait_for_workers_to_close(worker_handles);
    closer.join().unwrap();
    logger.close();

    verify_logs(&directory);
}

// Starts given number of worker threads and lets each execute `do_work`
fn start_worker_threads(
    logger: &Arc<RotatingLogger>,
    no_of_workers: usize,
) -> Vec<JoinHandle<()>> {
    (0..no_of_workers)
        .map(|thread_number| {
            let logger = Arc::clone(logger);
            std::thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || do_work(&logger, thread_number))
                .unwrap()
        })
        .collect()
}

fn do_work(logger: &RotatingLogger, thread_number: usize) {
    for idx in 0..NO_OF_LOGLINES_PER_THREAD {
        info!(logger, "XXXXX ({thread_number}) writing out line number {idx}");
    }
}

fn wait_for_workers_to_close(worker_handles: Vec<JoinHandle<()>>) {
    for worker_handle in worker_handles {
        worker_handle
            .join()
            .unwrap_or_else(|e| panic!("Joining worker thread failed: {e:?}"));
    }
}

fn verify_logs(directory: &std::path::Path) {
    let total = NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD;
    let files = files(directory);
    assert_eq!(files.len() as u64, (total as u64).div_ceil(MAX_RECORDS_PER_FILE));

    let mut seen = HashSet::with_capacity(total);
    for (index, file) in files.iter().enumerate() {
        assert_eq!(*file, directory.join(format!("test_mt-20261018-{index}.log")));
        let lines = lines(file);
        assert_eq!(lines.len() as u64, MAX_RECORDS_PER_FILE, "{file:?}");
        for line in lines {
            let message = line
                .strip_prefix("[2026-10-18 12:00:00] [INFO] XXXXX ")
                .unwrap_or_else(|| panic!("irregular line in log file {file:?}: \"{line}\""))
                .to_string();
            assert!(seen.insert(message), "duplicate line {line}");
        }
    }
    assert_eq!(seen.len(), total);
}

use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

// ---------------------------------------------------------------------------
// Capturing logger for tests
// ---------------------------------------------------------------------------

/// Process-wide logger that keeps records per test thread, so parallel tests
/// only see their own diagnostics.
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

/// Install the capturing logger. Safe to call from every test.
pub fn init_test_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Drain the warnings logged on this thread since the last call.
pub fn take_warnings() -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg)
            .collect()
    })
}

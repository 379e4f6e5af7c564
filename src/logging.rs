#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

/// Writes records to stderr so they never mix with the grid on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "WORDSEARCH_LOG";

/// Level named by `WORDSEARCH_LOG`, `info` if unset or unparsable.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger at the level taken from `WORDSEARCH_LOG`.
pub fn init_logging() {
    init_logging_at(level_from_env());
}

/// Install the logger at an explicit level. Later calls are ignored.
pub fn init_logging_at(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

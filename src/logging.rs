#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "FLEETGRID_LOG";

/// Writes records to stderr so rendered boards and JSON on stdout stay clean.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter for a raw `FLEETGRID_LOG` value; `info` when unset or unparsable.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Calling it again keeps the first logger.
pub fn init_logging() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

//! Minimal stderr logger behind the `log` facade.
//!
//! The library logs through `log` macros only; this module is the binary's
//! sink. Diagnostics go to stderr so they never mix with the report output
//! on stdout.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

pub struct StderrLogger {
    level: Level,
    colors: bool,
}

impl StderrLogger {
    /// Install the process-wide logger.
    ///
    /// The level comes from `PAGESYNTH_LOG`, falling back to `RUST_LOG`,
    /// defaulting to `info`. Colors are suppressed when `NO_COLOR` is set.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let level = std::env::var("PAGESYNTH_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|v| v.parse::<Level>().ok())
            .unwrap_or(Level::Info);

        let logger = StderrLogger {
            level,
            colors: std::env::var("NO_COLOR").is_err(),
        };
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level().as_str();
        let args = record.args();
        let line = if self.colors {
            format!("{}{level}\x1b[0m {args}\n", Self::color(record.level()))
        } else {
            format!("{level} {args}\n")
        };
        let _ = std::io::stderr().write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

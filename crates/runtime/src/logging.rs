use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

/// Level used when `FILEMGR_LOG_LEVEL` is unset or unusable.
pub const DEFAULT_LEVEL: Level = Level::Warn;

/// Minimal stderr logger; stdout is reserved for command output.
pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record));
        }
    }

    fn flush(&self) {}
}

fn format_line(record: &Record<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    // Strip the crate prefix so `filemgr_engine::relocate` prints as `engine::relocate`.
    let target = record
        .target()
        .strip_prefix(PROGRAM_NAME)
        .and_then(|t| t.strip_prefix('_'))
        .unwrap_or(record.target());

    format!(
        "{} {:<5} [{}] {}",
        timestamp,
        record.level(),
        target,
        record.args()
    )
}

/// Parse a level name. `off` and unknown names give [`DEFAULT_LEVEL`].
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

fn get_level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger; the max level must follow the
    // level the stored logger was built with, not a later argument.
    let init_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger::new(level));

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level().to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

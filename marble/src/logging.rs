use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: Level = Level::Warn;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL))
}

pub fn init(level: Level) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Maps the number of `-v` flags to the lowest level that gets printed.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

/// Writes log records to stderr, so they never mix with the maze on stdout.
pub struct AppLogger {
    min_level: RwLock<Level>,
}

impl AppLogger {
    fn new(min_level: Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> Level {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }
}

pub fn format_record(level: Level, source: &str, message: &str) -> String {
    format!("{:<5} {} -> {}", level, source, message)
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_record(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::Warn);
        assert_eq!(level_from_verbosity(1), Level::Info);
        assert_eq!(level_from_verbosity(2), Level::Debug);
        assert_eq!(level_from_verbosity(9), Level::Trace);
    }

    #[test]
    fn min_level_filters() {
        let logger = AppLogger::new(Level::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(Level::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn record_format() {
        assert_eq!(
            format_record(Level::Info, "marble::app", "Seed: 4"),
            "INFO  marble::app -> Seed: 4"
        );
    }
}

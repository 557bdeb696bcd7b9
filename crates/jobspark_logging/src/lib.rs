#![deny(missing_docs)]
//! Shared logging utilities for the JobSpark workspace.
//!
//! This crate provides the `spark_*` logging macros used across the codebase,
//! the logger initialisation used by the app, and a minimal test initializer
//! for the global logger.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[doc(hidden)]
pub use log;

pub use log::LevelFilter;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! spark_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! spark_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! spark_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! spark_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! spark_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file only.
    #[default]
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both the log file and the terminal.
    Both,
}

/// Logger configuration handed over by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Most verbose level that gets through.
    pub level: LevelFilter,
    /// Where records go.
    pub destination: LogDestination,
    /// File written for [`LogDestination::File`] and [`LogDestination::Both`].
    pub file_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            destination: LogDestination::File,
            file_path: PathBuf::from("./jobspark.log"),
        }
    }
}

/// Installs the global logger described by `settings`.
///
/// Returns `false` when nothing was installed, either because the log file
/// could not be created for a file-only destination or because a logger was
/// already set.
pub fn initialize(settings: &LogSettings) -> bool {
    let config = build_config();
    let level = settings.level;

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        if let Some(file_logger) = create_file_logger(settings, config) {
            loggers.push(file_logger);
        }
    }

    if loggers.is_empty() {
        return false;
    }
    CombinedLogger::init(loggers).is_ok()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(settings: &LogSettings, config: Config) -> Option<Box<WriteLogger<File>>> {
    match File::create(&settings.file_path) {
        Ok(file) => Some(WriteLogger::new(settings.level, config, file)),
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                settings.file_path, err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_log_info_to_file() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.destination, LogDestination::File);
        assert_eq!(settings.file_path, PathBuf::from("./jobspark.log"));
    }

    #[test]
    fn unwritable_file_destination_installs_nothing() {
        let settings = LogSettings {
            destination: LogDestination::File,
            file_path: PathBuf::from("/nonexistent-dir/for/jobspark/test.log"),
            ..LogSettings::default()
        };
        assert!(!initialize(&settings));
    }

    #[test]
    fn macros_accept_format_arguments() {
        initialize_for_tests();
        spark_debug!("request_id={} page={}", 3, 2);
        spark_info!("plain message");
        spark_warn!("{:?}", Some("detail"));
    }
}

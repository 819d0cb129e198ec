use chrono::Local;
use log::info;
use simplelog::*;
use std::fs::File;

use crate::Utils::config::{ConfigError, LoggingSettings};

/// log_<date>_<time>.txt
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Initialize terminal logging and, if requested, a timestamped log file.
/// Calling it again once a logger is installed leaves the first logger in place.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), ConfigError> {
    let level = settings.level;
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    // File logger
    let file_name = if settings.file {
        let name = log_file_name();
        loggers.push(WriteLogger::new(level, Config::default(), File::create(&name)?));
        Some(name)
    } else {
        None
    };

    if CombinedLogger::init(loggers).is_ok() {
        match file_name {
            Some(name) => info!("logging at {} level, also to {}", level, name),
            None => info!("logging at {} level", level),
        }
    }
    Ok(())
}

//! Settings read from a TOML file. Every key is optional:
//!
//! ```toml
//! [logging]
//! level = "info"   # trace | debug | info | warn | error | off
//! file = false     # also write log_<date>_<time>.txt
//!
//! [quiz]
//! seed = 42        # fixed seed for reproducible questions
//! min_part = 1     # random real/imaginary parts are drawn from [min_part, max_part)
//! max_part = 11
//! ```
use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use simplelog::LevelFilter;

/// settings file the binary reads when no path is given
pub const DEFAULT_SETTINGS_PATH: &str = "complexity.toml";

/// Error types for loading settings
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "TOML parse error: {}", err),
            ConfigError::Invalid(msg) => write!(f, "Invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    /// write a timestamped log file next to the terminal output
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: LevelFilter::Info,
            file: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizSettings {
    pub seed: Option<u64>,
    pub min_part: i64,
    pub max_part: i64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            seed: None,
            min_part: 1,
            max_part: 11,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub quiz: QuizSettings,
}

fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(ConfigError::Invalid(format!(
            "loglevel must be trace, debug, info, warn, error or off, got {}",
            level
        ))),
    }
}

fn section<'t>(table: &'t toml::Table, name: &str) -> Result<Option<&'t toml::Table>, ConfigError> {
    match table.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_table()
            .map(Some)
            .ok_or_else(|| ConfigError::Invalid(format!("[{}] must be a table", name))),
    }
}

fn typed<'t, T>(
    table: &'t toml::Table,
    key: &str,
    kind: &str,
    get: fn(&'t toml::Value) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => get(value)
            .map(Some)
            .ok_or_else(|| ConfigError::Invalid(format!("{} must be {}, got {}", key, kind, value))),
    }
}

impl Settings {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = input.parse()?;
        let mut settings = Settings::default();

        if let Some(logging) = section(&table, "logging")? {
            if let Some(level) = typed(logging, "level", "a string", toml::Value::as_str)? {
                settings.logging.level = parse_level(level)?;
            }
            if let Some(file) = typed(logging, "file", "a boolean", toml::Value::as_bool)? {
                settings.logging.file = file;
            }
        }

        if let Some(quiz) = section(&table, "quiz")? {
            if let Some(seed) = typed(quiz, "seed", "an integer", toml::Value::as_integer)? {
                let seed = u64::try_from(seed).map_err(|_| {
                    ConfigError::Invalid(format!("seed must be non-negative, got {}", seed))
                })?;
                settings.quiz.seed = Some(seed);
            }
            if let Some(min) = typed(quiz, "min_part", "an integer", toml::Value::as_integer)? {
                settings.quiz.min_part = min;
            }
            if let Some(max) = typed(quiz, "max_part", "an integer", toml::Value::as_integer)? {
                settings.quiz.max_part = max;
            }
            if settings.quiz.min_part >= settings.quiz.max_part {
                return Err(ConfigError::Invalid(format!(
                    "min_part ({}) must be below max_part ({})",
                    settings.quiz.min_part, settings.quiz.max_part
                )));
            }
        }
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml_str(&content)?;
        info!("settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    /// `load`, or the defaults when `path` does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Settings for the command line: an explicit `path` must exist, otherwise
    /// `DEFAULT_SETTINGS_PATH` is read if present.
    pub fn from_cli_arg(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(DEFAULT_SETTINGS_PATH),
        }
    }
}

//! Process configuration from arguments and environment.
//!
//! # Invariants
//! - Command-line flags override environment variables.
//! - File logging is enabled only when a log directory is configured.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "TODOLIST_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "TODOLIST_LOG_DIR";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Print each frame as one JSON line instead of text.
    pub json: bool,
}

impl AppConfig {
    /// Reads settings from the running process.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolves settings from explicit sources.
    pub fn resolve<I, E>(args: I, env: E) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            log_level: env(ENV_LOG_LEVEL)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| todolist_core::default_log_level().to_string()),
            log_dir: env(ENV_LOG_DIR).filter(|value| !value.trim().is_empty()),
            json: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--log-level" => {
                    let level = args.next().ok_or(ConfigError::MissingValue("--log-level"))?;
                    config.log_level = level;
                }
                "--log-dir" => {
                    let dir = args.next().ok_or(ConfigError::MissingValue("--log-dir"))?;
                    config.log_dir = Some(dir);
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(config)
    }
}

/// Invalid command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownArgument(String),
    MissingValue(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownArgument(value) => write!(f, "unknown argument: `{value}`"),
            Self::MissingValue(flag) => write!(f, "missing value for `{flag}`"),
        }
    }
}

impl Error for ConfigError {}

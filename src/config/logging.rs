//! Logging configuration

use crate::logging::LogLevel;
use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // Tables go to stdout; keep stderr quiet unless something is wrong
            level: LogLevel::Warn,
        }
    }
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
}

impl LoggingConfig {
    /// Create from file config, with an optional override (env var) taking precedence
    pub fn from_file(file: Option<FileLogging>, level_override: Option<String>) -> Self {
        let file = file.unwrap_or_default();

        let level = level_override
            .or(file.level)
            .and_then(|l| LogLevel::parse(&l))
            .unwrap_or_else(|| Self::default().level);

        Self { level }
    }
}

use crate::{DEFAULT_LOG_COLORED, LogLevel};

const LOG_DESTINATION_STDERR: &str = "stderr";

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Log file path; stderr when unset
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Where log lines end up, for the configuration summary.
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or(LOG_DESTINATION_STDERR)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

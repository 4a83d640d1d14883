mod accounts_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use accounts_config::AccountsConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "CHAT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".chat";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_DIRECTORY: &str = "data";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

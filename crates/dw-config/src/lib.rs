mod api_config;
mod client_config;
mod config;
mod defaults_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use defaults_config::DefaultsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "DW_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".datawizard";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SCHEMA_PATH: &str = "rest/v1";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DefaultsConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub client: ClientConfig,
    pub defaults: DefaultsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the config directory.
    ///
    /// Loading order:
    /// 1. Check for DW_CONFIG_DIR env var, else use ./.datawizard/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply DW_* environment variable overrides
    /// 4. Read api.api_key_file if no key was provided otherwise
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from_dir(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from_dir(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.api.resolve_key_file(config_dir)?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DW_CONFIG_DIR env var > ./.datawizard/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.client.validate()?;
        self.defaults.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}/{}", self.api.base_url, self.api.schema_path);
        info!(
            "  credentials: api key {}, bearer token {}",
            if self.api.api_key().is_some() {
                "set"
            } else {
                "missing"
            },
            if self.api.has_bearer_token() {
                "set"
            } else {
                "from api key"
            }
        );
        info!(
            "  client: timeout={}s, connect={}s",
            self.client.timeout_secs, self.client.connect_timeout_secs
        );
        info!(
            "  defaults: format={} (id {}), file type={}, recent={}",
            self.defaults.output_format,
            self.defaults.output_format_id,
            self.defaults.fallback_file_type,
            self.defaults.recent_limit
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("DW_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("DW_API_SCHEMA_PATH", &mut self.api.schema_path);
        Self::apply_env_option_string("DW_API_KEY", &mut self.api.api_key);
        Self::apply_env_option_string("DW_API_KEY_FILE", &mut self.api.api_key_file);
        Self::apply_env_option_string("DW_BEARER_TOKEN", &mut self.api.bearer_token);

        // Client
        Self::apply_env_parse("DW_CLIENT_TIMEOUT_SECS", &mut self.client.timeout_secs);
        Self::apply_env_parse(
            "DW_CLIENT_CONNECT_TIMEOUT_SECS",
            &mut self.client.connect_timeout_secs,
        );

        // Defaults
        Self::apply_env_string(
            "DW_DEFAULT_OUTPUT_FORMAT",
            &mut self.defaults.output_format,
        );
        Self::apply_env_parse(
            "DW_DEFAULT_OUTPUT_FORMAT_ID",
            &mut self.defaults.output_format_id,
        );
        Self::apply_env_string(
            "DW_FALLBACK_FILE_TYPE",
            &mut self.defaults.fallback_file_type,
        );
        Self::apply_env_parse("DW_RECENT_LIMIT", &mut self.defaults.recent_limit);

        // Logging
        Self::apply_env_parse("DW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DW_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

use crate::{ConfigError, ConfigErrorResult, DEFAULT_SCHEMA_PATH};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Remote endpoint and credentials.
///
/// Credentials are injected at runtime (`DW_API_KEY`, `DW_BEARER_TOKEN` or
/// `api_key_file`). `Debug` redacts both secrets.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Project root, e.g. `https://<project>.supabase.co`
    pub base_url: String,
    /// Path segment prepended to every resource
    pub schema_path: String,
    pub api_key: Option<String>,
    /// File holding the API key, relative to the config directory unless absolute
    pub api_key_file: Option<String>,
    /// Bearer token; the API key is used when unset
    pub bearer_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            schema_path: String::from(DEFAULT_SCHEMA_PATH),
            api_key: None,
            api_key_file: None,
            bearer_token: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("schema_path", &self.schema_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_file", &self.api_key_file)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ApiConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.api_key())
    }

    /// True when a bearer token of its own is set, rather than the API key
    pub(crate) fn has_bearer_token(&self) -> bool {
        self.bearer_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Read `api_key_file` into `api_key` when no key was given directly.
    pub(crate) fn resolve_key_file(&mut self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.api_key().is_some() {
            return Ok(());
        }

        let Some(ref file) = self.api_key_file else {
            return Ok(());
        };

        let path = Self::key_file_path(config_dir, file);
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let key = contents.trim();
        if key.is_empty() {
            return Err(ConfigError::api(format!(
                "api.api_key_file {} is empty",
                path.display()
            )));
        }

        self.api_key = Some(key.to_string());
        Ok(())
    }

    fn key_file_path(config_dir: &Path, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::api(
                "api.base_url is required (set DW_API_BASE_URL)",
            ));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.schema_path.contains("..") {
            return Err(ConfigError::api("api.schema_path cannot contain '..'"));
        }

        if self.api_key().is_none() {
            return Err(ConfigError::api(
                "api key is required (set DW_API_KEY or api.api_key_file)",
            ));
        }

        Ok(())
    }
}

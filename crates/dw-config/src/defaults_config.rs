use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_OUTPUT_FORMAT: &str = "Excel";
pub const DEFAULT_OUTPUT_FORMAT_ID: i64 = 1;
pub const DEFAULT_FALLBACK_FILE_TYPE: &str = "OTHER";

pub const MIN_RECENT_LIMIT: u32 = 1;
pub const MAX_RECENT_LIMIT: u32 = 100;
pub const DEFAULT_RECENT_LIMIT: u32 = 4;

/// Values lookups fall back to when the remote store has nothing (or fails).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Preferred format reported for users without a stored preference
    pub output_format: String,
    /// Id reported for unknown output formats
    pub output_format_id: i64,
    /// `file_types` row that unknown type names resolve to
    pub fallback_file_type: String,
    /// Row count for "recent" listings when the caller gives none
    pub recent_limit: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_format: String::from(DEFAULT_OUTPUT_FORMAT),
            output_format_id: DEFAULT_OUTPUT_FORMAT_ID,
            fallback_file_type: String::from(DEFAULT_FALLBACK_FILE_TYPE),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl DefaultsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.output_format.trim().is_empty() {
            return Err(ConfigError::defaults(
                "defaults.output_format must not be empty",
            ));
        }

        if self.fallback_file_type.trim().is_empty() {
            return Err(ConfigError::defaults(
                "defaults.fallback_file_type must not be empty",
            ));
        }

        if self.output_format_id < 1 {
            return Err(ConfigError::defaults(format!(
                "defaults.output_format_id must be positive, got {}",
                self.output_format_id
            )));
        }

        if self.recent_limit < MIN_RECENT_LIMIT || self.recent_limit > MAX_RECENT_LIMIT {
            return Err(ConfigError::defaults(format!(
                "defaults.recent_limit must be {}-{}, got {}",
                MIN_RECENT_LIMIT, MAX_RECENT_LIMIT, self.recent_limit
            )));
        }

        Ok(())
    }
}

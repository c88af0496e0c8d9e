mod config;

use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load`, cleared so the host environment cannot leak in
const CONFIG_ENV_VARS: &[&str] = &[
    "DW_API_BASE_URL",
    "DW_API_SCHEMA_PATH",
    "DW_API_KEY",
    "DW_API_KEY_FILE",
    "DW_BEARER_TOKEN",
    "DW_CLIENT_TIMEOUT_SECS",
    "DW_CLIENT_CONNECT_TIMEOUT_SECS",
    "DW_DEFAULT_OUTPUT_FORMAT",
    "DW_DEFAULT_OUTPUT_FORMAT_ID",
    "DW_FALLBACK_FILE_TYPE",
    "DW_RECENT_LIMIT",
    "DW_LOG_LEVEL",
    "DW_LOG_COLORED",
    "DW_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) struct ConfigDir {
    pub(crate) temp: TempDir,
    _dir_guard: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl ConfigDir {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.temp.path().join("config.toml"), contents).unwrap();
    }
}

/// Create a temp config directory, point DW_CONFIG_DIR at it and clear DW_* overrides
pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("DW_CONFIG_DIR", temp.path().to_str().unwrap());
    let cleared = CONFIG_ENV_VARS
        .iter()
        .map(|key| EnvGuard::remove(*key))
        .collect();
    ConfigDir {
        temp,
        _dir_guard: dir_guard,
        _cleared: cleared,
    }
}

/// Minimal settings that pass validation
pub(crate) fn set_required_env() -> (EnvGuard, EnvGuard) {
    (
        EnvGuard::set("DW_API_BASE_URL", "https://project.example.co"),
        EnvGuard::set("DW_API_KEY", "test-anon-key"),
    )
}

use crate::tests::{EnvGuard, set_required_env, setup_config_dir};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _dir = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.schema_path.as_str(), eq("rest/v1"));
    assert_that!(config.client.timeout_secs, eq(30));
    assert_that!(config.defaults.output_format.as_str(), eq("Excel"));
    assert_that!(config.defaults.output_format_id, eq(1));
    assert_that!(config.defaults.fallback_file_type.as_str(), eq("OTHER"));
    assert_that!(config.api.api_key(), none());
}

#[test]
#[serial]
fn given_required_env_when_load_and_validate_then_ok() {
    // Given
    let _dir = setup_config_dir();
    let _required = set_required_env();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(config.api.api_key(), some(eq("test-anon-key")));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let dir = setup_config_dir();
    dir.write_toml(
        r#"
              [api]
              base_url = "https://project.example.co"

              [client]
              timeout_secs = 45

              [defaults]
              output_format = "Csv"
              recent_limit = 10
          "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq("https://project.example.co"));
    assert_that!(config.client.timeout_secs, eq(45));
    assert_that!(config.defaults.output_format.as_str(), eq("Csv"));
    assert_that!(config.defaults.recent_limit, eq(10));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let dir = setup_config_dir();
    dir.write_toml("[client]\ntimeout_secs = 45");
    let _timeout = EnvGuard::set("DW_CLIENT_TIMEOUT_SECS", "12");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.client.timeout_secs, eq(12));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _dir = setup_config_dir();
    let _format = EnvGuard::set("DW_DEFAULT_OUTPUT_FORMAT", "Json");
    let _format_id = EnvGuard::set("DW_DEFAULT_OUTPUT_FORMAT_ID", "3");
    let _fallback = EnvGuard::set("DW_FALLBACK_FILE_TYPE", "UNKNOWN");
    let _colored = EnvGuard::set("DW_LOG_COLORED", "false");
    let _level = EnvGuard::set("DW_LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.defaults.output_format.as_str(), eq("Json"));
    assert_that!(config.defaults.output_format_id, eq(3));
    assert_that!(config.defaults.fallback_file_type.as_str(), eq("UNKNOWN"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_previous_value() {
    // Given
    let _dir = setup_config_dir();
    let _timeout = EnvGuard::set("DW_CLIENT_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.client.timeout_secs, eq(30));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let dir = setup_config_dir();
    dir.write_toml("[client\ntimeout_secs = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result.unwrap_err(), ConfigError::Toml { .. }));
}

#[test]
#[serial]
fn given_no_base_url_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _key = EnvGuard::set("DW_API_KEY", "test-anon-key");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_absolute_log_file_when_validate_then_error() {
    // Given
    let _dir = setup_config_dir();
    let _required = set_required_env();
    let _file = EnvGuard::set("DW_LOG_FILE", "/var/log/dw.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

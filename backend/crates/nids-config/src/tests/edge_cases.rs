use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_previous_value_kept() {
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("NIDS_SERVER_PORT", "not-a-port");

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("NIDS_SERVER_PORT", "80");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_auto_assign_port_when_validate_then_ok() {
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("NIDS_SERVER_PORT", "0");

    let config = Config::load().unwrap();

    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn given_invalid_log_level_in_toml_when_load_then_defaults_to_info() {
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = 42");

    let config = Config::load().unwrap();

    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_dir_with_traversal_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("NIDS_LOG_DIR", "../../var/log");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

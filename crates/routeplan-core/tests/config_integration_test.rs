//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use routeplan_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 5] = [
    "ROUTEPLAN_ORS_URL",
    "ROUTEPLAN_PROFILE",
    "ROUTEPLAN_DETECT_OUTLIERS",
    "ROUTEPLAN_TIMEOUT",
    "ROUTEPLAN_GPX_OUTPUT",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_partial_file_configuration() {
    let file = config_file(
        r#"
profile = "foot-hiking"
# Only override the profile, leave others as defaults
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.profile.value, "foot-hiking");
    assert_eq!(config.profile.source, ConfigSource::File);
    // These should still be defaults
    assert_eq!(config.ors_base_url.source, ConfigSource::Default);
    assert_eq!(config.gpx_output.value, PathBuf::from("out/itinerary.gpx"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/routeplan.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("ROUTEPLAN_PROFILE", "cycling-regular");
    env::set_var("ROUTEPLAN_DETECT_OUTLIERS", "off");
    env::set_var("ROUTEPLAN_GPX_OUTPUT", "/tmp/env.gpx");

    let file = config_file(
        r#"
profile = "foot-hiking"
detect_outliers = true
request_timeout_secs = 12
"#,
    );

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    // Environment should override file
    assert_eq!(config.profile.value, "cycling-regular");
    assert_eq!(config.profile.source, ConfigSource::Environment);
    assert!(!config.detect_outliers.value);
    assert_eq!(config.detect_outliers.source, ConfigSource::Environment);
    assert_eq!(config.gpx_output.value, PathBuf::from("/tmp/env.gpx"));
    // File value survives where no variable is set
    assert_eq!(config.request_timeout_secs.value, 12);
    assert_eq!(config.request_timeout_secs.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("ROUTEPLAN_TIMEOUT", "soon");
    env::set_var("ROUTEPLAN_DETECT_OUTLIERS", "maybe");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.request_timeout_secs.value, 30);
    assert_eq!(config.request_timeout_secs.source, ConfigSource::Default);
    assert!(config.detect_outliers.value);
    assert_eq!(config.detect_outliers.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    env::set_var("ROUTEPLAN_ORS_URL", "http://env:8080/ors");

    let file = config_file(r#"ors_base_url = "http://file:8080/ors""#);

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();
    config.update_from_cli(CliConfigOverrides {
        ors_base_url: Some("http://cli:8080/ors".to_string()),
        ..Default::default()
    });

    assert_eq!(config.ors_base_url.value, "http://cli:8080/ors");
    assert_eq!(config.ors_base_url.source, ConfigSource::Cli);

    clear_env();
}

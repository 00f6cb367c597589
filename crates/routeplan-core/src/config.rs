use crate::error::{Result, RouteplanError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for routeplan
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub ors_base_url: ConfigValue<String>,
    pub profile: ConfigValue<String>,
    pub detect_outliers: ConfigValue<bool>,
    pub request_timeout_secs: ConfigValue<u64>,
    pub gpx_output: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    pub const DEFAULT_ORS_URL: &'static str = "https://api.openrouteservice.org";

    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            ors_base_url: ConfigValue::new(Self::DEFAULT_ORS_URL.to_string(), ConfigSource::Default),
            profile: ConfigValue::new("foot-walking".to_string(), ConfigSource::Default),
            detect_outliers: ConfigValue::new(true, ConfigSource::Default),
            request_timeout_secs: ConfigValue::new(30, ConfigSource::Default),
            gpx_output: ConfigValue::new(PathBuf::from("out/itinerary.gpx"), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RouteplanError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RouteplanError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(url) = file_config.ors_base_url {
            self.ors_base_url.update(url, ConfigSource::File);
        }

        if let Some(profile) = file_config.profile {
            self.profile.update(profile, ConfigSource::File);
        }

        if let Some(detect) = file_config.detect_outliers {
            self.detect_outliers.update(detect, ConfigSource::File);
        }

        if let Some(timeout) = file_config.request_timeout_secs {
            self.request_timeout_secs.update(timeout, ConfigSource::File);
        }

        if let Some(output) = file_config.gpx_output {
            self.gpx_output.update(output, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // ROUTEPLAN_ORS_URL
        if let Ok(url) = env::var("ROUTEPLAN_ORS_URL") {
            self.ors_base_url.update(url, ConfigSource::Environment);
        }

        // ROUTEPLAN_PROFILE
        if let Ok(profile) = env::var("ROUTEPLAN_PROFILE") {
            self.profile.update(profile, ConfigSource::Environment);
        }

        // ROUTEPLAN_DETECT_OUTLIERS
        if let Ok(detect_str) = env::var("ROUTEPLAN_DETECT_OUTLIERS") {
            match parse_bool(&detect_str) {
                Ok(detect) => self.detect_outliers.update(detect, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ROUTEPLAN_DETECT_OUTLIERS value '{}': expected true or false",
                    detect_str
                ),
            }
        }

        // ROUTEPLAN_TIMEOUT
        if let Ok(timeout_str) = env::var("ROUTEPLAN_TIMEOUT") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => {
                    self.request_timeout_secs.update(timeout, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid ROUTEPLAN_TIMEOUT value '{}': expected whole seconds",
                    timeout_str
                ),
            }
        }

        // ROUTEPLAN_GPX_OUTPUT
        if let Ok(output) = env::var("ROUTEPLAN_GPX_OUTPUT") {
            self.gpx_output.update(PathBuf::from(output), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(url) = overrides.ors_base_url {
            self.ors_base_url.update(url, ConfigSource::Cli);
        }

        if let Some(profile) = overrides.profile {
            self.profile.update(profile, ConfigSource::Cli);
        }

        if let Some(detect) = overrides.detect_outliers {
            self.detect_outliers.update(detect, ConfigSource::Cli);
        }

        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs.update(timeout, ConfigSource::Cli);
        }

        if let Some(output) = overrides.gpx_output {
            self.gpx_output.update(output, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "ors_base_url".to_string(),
            (self.ors_base_url.value.clone(), self.ors_base_url.source),
        );

        map.insert("profile".to_string(), (self.profile.value.clone(), self.profile.source));

        map.insert(
            "detect_outliers".to_string(),
            (self.detect_outliers.value.to_string(), self.detect_outliers.source),
        );

        map.insert(
            "request_timeout_secs".to_string(),
            (self.request_timeout_secs.value.to_string(), self.request_timeout_secs.source),
        );

        map.insert(
            "gpx_output".to_string(),
            (self.gpx_output.value.display().to_string(), self.gpx_output.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    ors_base_url: Option<String>,
    profile: Option<String>,
    detect_outliers: Option<bool>,
    request_timeout_secs: Option<u64>,
    gpx_output: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub ors_base_url: Option<String>,
    pub profile: Option<String>,
    pub detect_outliers: Option<bool>,
    pub request_timeout_secs: Option<u64>,
    pub gpx_output: Option<PathBuf>,
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RouteplanError::ConfigInvalid {
            key: "detect_outliers".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

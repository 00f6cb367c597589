//! Command implementations

mod config;
mod resolve;
mod route;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use routeplan_core::config::{CliConfigOverrides, LayeredConfig};
use routeplan_core::error::RouteplanError;
use routeplan_ors::OrsClient;
use std::path::Path;
use std::time::Duration;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "routeplan.toml";

/// Environment variable holding the openrouteservice key
const API_KEY_VAR: &str = "ORS_API_KEY";

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut overrides = CliConfigOverrides {
        ors_base_url: cli.ors_url.clone(),
        request_timeout_secs: cli.timeout,
        ..Default::default()
    };

    match &cli.command {
        Commands::Resolve(args) => {
            if args.no_outliers {
                overrides.detect_outliers = Some(false);
            }
        }
        Commands::Route(args) => {
            overrides.profile = args.profile.clone();
            overrides.gpx_output = args.gpx.clone();
            if args.no_outliers {
                overrides.detect_outliers = Some(false);
            }
        }
        Commands::Config => {}
    }

    let config = load_config(cli.config.as_deref(), overrides)?;

    match cli.command {
        Commands::Resolve(args) => resolve::execute(args, &config, &output),
        Commands::Route(args) => route::execute(args, &config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}

/// Build the layered configuration: defaults, file, environment, then CLI
fn load_config(path: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match path {
        Some(path) => {
            config = config
                .load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
        }
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            config = config.load_from_file(DEFAULT_CONFIG_FILE)?;
        }
        None => {}
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

/// openrouteservice client for the configured endpoint
fn ors_client(config: &LayeredConfig) -> Result<OrsClient> {
    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| RouteplanError::ConfigMissing { key: API_KEY_VAR.to_string() })?;

    let client = OrsClient::new(
        config.ors_base_url.value.clone(),
        api_key,
        Duration::from_secs(config.request_timeout_secs.value),
    )?;
    tracing::debug!("Using openrouteservice at {}", client.base_url());
    Ok(client)
}

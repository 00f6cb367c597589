use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// routeplan - Plan walking routes through free-text places
#[derive(Parser, Debug)]
#[command(name = "routeplan")]
#[command(about = "Plan walking routes through free-text places", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./routeplan.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// openrouteservice base URL
    #[arg(long, global = true, value_name = "URL")]
    pub ors_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Geocode places in order, repairing outliers
    Resolve(ResolveArgs),

    /// Plan a route from start to end through optional stops
    Route(RouteArgs),

    /// Show effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Places to geocode, in order
    #[arg(required = true)]
    pub places: Vec<String>,

    /// Skip outlier detection and re-querying
    #[arg(long)]
    pub no_outliers: bool,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Start of the route
    #[arg(long)]
    pub start: String,

    /// End of the route
    #[arg(long)]
    pub end: String,

    /// Intermediate stop (repeatable, visited in order)
    #[arg(long = "via", value_name = "PLACE")]
    pub waypoints: Vec<String>,

    /// Routing profile (e.g., foot-walking, foot-hiking)
    #[arg(long)]
    pub profile: Option<String>,

    /// Where to write the GPX track
    #[arg(long, value_name = "PATH", conflicts_with = "no_gpx")]
    pub gpx: Option<PathBuf>,

    /// Do not write a GPX file
    #[arg(long)]
    pub no_gpx: bool,

    /// Skip outlier detection and re-querying
    #[arg(long)]
    pub no_outliers: bool,
}

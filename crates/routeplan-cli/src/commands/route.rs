//! Route command implementation

use super::ors_client;
use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use crate::output_types::{PlaceRow, RouteOutput, ShareRow};
use anyhow::Result;
use routeplan_core::config::LayeredConfig;
use routeplan_core::models::{Itinerary, Place, RouteOptions};
use routeplan_resolver::RoutePlanner;

pub fn execute(args: RouteArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let client = ors_client(config)?;
    let options = RouteOptions::default().with_profile(config.profile.value.clone());
    let planner = RoutePlanner::new(&client, &client)
        .with_options(options)
        .with_outlier_detection(config.detect_outliers.value);

    let itinerary =
        Itinerary::new(args.start, args.end, args.waypoints.into_iter().map(Place::from).collect());

    let gpx_path = if args.no_gpx { None } else { Some(config.gpx_output.value.clone()) };
    let planned = match &gpx_path {
        Some(path) => planner.plan_and_save(&itinerary, path)?,
        None => planner.plan(&itinerary)?,
    };
    let route = &planned.route;

    let surface = route.surface().map(|s| ShareRow::from_summary(s.summary())).unwrap_or_default();
    let steepness =
        route.steepness().map(|s| ShareRow::from_summary(s.summary())).unwrap_or_default();

    if output.is_json() {
        output.result(RouteOutput {
            places: planned.places.clone(),
            distance_m: route.distance(),
            ascent_m: route.ascent(),
            descent_m: route.descent(),
            greenness: route.greenness(),
            noise: route.noise(),
            shade: route.shade(),
            surface,
            steepness,
            gpx_path: gpx_path.map(|p| p.display().to_string()),
        })?;
        return Ok(());
    }

    output.section("Stops");
    output.table(planned.places.iter().map(PlaceRow::from).collect());

    output.section("Route");
    output.kv("Distance", format!("{:.0} m", route.distance()));
    if let (Some(ascent), Some(descent)) = (route.ascent(), route.descent()) {
        output.kv("Ascent", format!("{:.0} m", ascent));
        output.kv("Descent", format!("{:.0} m", descent));
    }
    output.kv("Greenness", gauge(route.greenness()));
    output.kv("Noise", gauge(route.noise()));
    output.kv("Shade", gauge(route.shade()));

    if let Some(dominant) = route.surface().and_then(|s| s.summary().dominant()) {
        output.kv("Mostly", dominant);
    }

    if !surface.is_empty() {
        output.section("Surface");
        output.table(surface);
    }
    if !steepness.is_empty() {
        output.section("Steepness");
        output.table(steepness);
    }

    match gpx_path {
        Some(path) => output.success(format!("Route saved to {}", path.display())),
        None => output.success("Route planned"),
    }

    Ok(())
}

fn gauge(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2} / 10", v),
        None => "n/a".to_string(),
    }
}

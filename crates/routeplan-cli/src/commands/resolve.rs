//! Resolve command implementation

use super::ors_client;
use crate::cli::ResolveArgs;
use crate::output::OutputWriter;
use crate::output_types::{PlaceRow, ResolveOutput};
use anyhow::Result;
use routeplan_core::config::LayeredConfig;
use routeplan_core::models::Place;
use routeplan_resolver::GeocodeResolver;

pub fn execute(args: ResolveArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let client = ors_client(config)?;
    let resolver = GeocodeResolver::new(&client);

    let places: Vec<Place> = args.places.into_iter().map(Place::from).collect();
    let resolved = resolver.resolve_detailed(&places, config.detect_outliers.value)?;

    let corrected = resolved.iter().filter(|r| r.status.is_outlier()).count();

    if output.is_json() {
        output.result(ResolveOutput { places: resolved })?;
    } else {
        output.section("Resolved Places");
        output.table(resolved.iter().map(PlaceRow::from).collect());
        if corrected > 0 {
            output.warning(format!("{} place(s) looked misplaced and were re-queried", corrected));
        }
        output.success(format!("Resolved {} place(s)", resolved.len()));
    }

    Ok(())
}

use routeplan_core::error::{Result, RouteplanError};
use routeplan_core::models::{Coordinate, Itinerary, ResolvedPlace, RouteOptions};
use routeplan_core::ports::{GeocodingService, RoutingService};
use routeplan_core::Route;
use std::path::Path;

use crate::resolver::GeocodeResolver;

/// A route together with the places it was planned from
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub places: Vec<ResolvedPlace>,
    pub route: Route,
}

impl PlannedRoute {
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.places.iter().map(|p| p.coordinate).collect()
    }
}

/// Planning pipeline: resolve places, request a route, build the `Route`
pub struct RoutePlanner<G, R>
where
    G: GeocodingService,
    R: RoutingService,
{
    resolver: GeocodeResolver<G>,
    router: R,
    options: RouteOptions,
    detect_outliers: bool,
}

impl<G, R> RoutePlanner<G, R>
where
    G: GeocodingService,
    R: RoutingService,
{
    /// Create a planner with default route options and outlier detection on
    pub fn new(geocoder: G, router: R) -> Self {
        Self {
            resolver: GeocodeResolver::new(geocoder),
            router,
            options: RouteOptions::default(),
            detect_outliers: true,
        }
    }

    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_outlier_detection(mut self, enabled: bool) -> Self {
        self.detect_outliers = enabled;
        self
    }

    pub fn resolver(&self) -> &GeocodeResolver<G> {
        &self.resolver
    }

    /// Plan a route through the itinerary's places in order
    pub fn plan(&self, itinerary: &Itinerary) -> Result<PlannedRoute> {
        if !itinerary.is_feasible() {
            return Err(RouteplanError::InvalidItinerary {
                reason: "Cannot create route for unfeasible itinerary".to_string(),
            });
        }

        let places = self.resolver.resolve_detailed(&itinerary.places(), self.detect_outliers)?;
        let coordinates: Vec<Coordinate> = places.iter().map(|p| p.coordinate).collect();
        tracing::info!("Geocoded coordinates: {:?}", coordinates);

        let record = self.router.route(&coordinates, &self.options).map_err(|e| {
            tracing::error!("Error requesting route: {}", e);
            e
        })?;
        let route = Route::from_record(record)?;
        tracing::info!(
            "Planned route of {:.0} m through {} places",
            route.distance(),
            places.len()
        );

        Ok(PlannedRoute { places, route })
    }

    /// Plan and write the route geometry to `path` as GPX
    pub fn plan_and_save<P: AsRef<Path>>(
        &self,
        itinerary: &Itinerary,
        path: P,
    ) -> Result<PlannedRoute> {
        let planned = self.plan(itinerary)?;
        planned.route.save_gpx(path)?;
        Ok(planned)
    }
}

use geojson::{Feature, GeoJson, Value};
use routeplan_core::error::{Result, RouteplanError};
use routeplan_core::models::{Coordinate, ExtraInfo, RouteOptions, RouteRecord};
use routeplan_core::ports::RoutingService;
use serde::Serialize;
use std::collections::HashMap;

use crate::client::OrsClient;

/// Request body for the directions API
#[derive(Debug, Serialize)]
struct DirectionsRequest<'a> {
    coordinates: Vec<[f64; 2]>,
    elevation: bool,
    extra_info: &'a [String],
    instructions: bool,
    preference: &'static str,
    units: &'static str,
    options: DirectionsOptions<'a>,
}

#[derive(Debug, Serialize)]
struct DirectionsOptions<'a> {
    avoid_features: &'a [String],
}

impl<'a> DirectionsRequest<'a> {
    fn new(coordinates: &[Coordinate], options: &'a RouteOptions) -> Self {
        Self {
            coordinates: coordinates.iter().map(|&c| c.into()).collect(),
            elevation: options.elevation,
            extra_info: &options.extra_info,
            instructions: false,
            preference: "recommended",
            units: "m",
            options: DirectionsOptions { avoid_features: &options.avoid_features },
        }
    }
}

impl RoutingService for OrsClient {
    fn route(&self, coordinates: &[Coordinate], options: &RouteOptions) -> Result<RouteRecord> {
        if coordinates.len() < 2 {
            return Err(RouteplanError::InvalidItinerary {
                reason: format!("A route needs at least 2 points, got {}", coordinates.len()),
            });
        }

        let request = DirectionsRequest::new(coordinates, options);
        let url = self.endpoint(&format!("/v2/directions/{}/geojson", options.profile));
        tracing::debug!(
            "Requesting {} route through {} points",
            options.profile,
            coordinates.len()
        );

        let builder = self
            .http()
            .post(url)
            .header("Authorization", self.api_key())
            .header("Accept", "application/geo+json, application/json")
            .json(&request);

        let body = self.block_on(self.send(builder))?;
        parse_directions_response(&body)
    }
}

/// First route of a directions GeoJSON response as a provider-neutral record
pub fn parse_directions_response(body: &str) -> Result<RouteRecord> {
    let geojson = body.parse::<GeoJson>().map_err(|e| {
        RouteplanError::Serialization(format!("Invalid directions response: {}", e))
    })?;

    let (feature, collection_bbox) = match geojson {
        GeoJson::FeatureCollection(collection) => {
            let bbox = collection.bbox;
            let feature = collection.features.into_iter().next().ok_or_else(|| {
                RouteplanError::InvalidRouteData {
                    reason: "Directions response contains no route".to_string(),
                }
            })?;
            (feature, bbox)
        }
        GeoJson::Feature(feature) => (feature, None),
        GeoJson::Geometry(_) => {
            return Err(RouteplanError::InvalidRouteData {
                reason: "Directions response has no route properties".to_string(),
            })
        }
    };

    let bbox = feature.bbox.clone().or(collection_bbox);
    record_from_feature(feature, bbox)
}

fn record_from_feature(feature: Feature, bbox: Option<Vec<f64>>) -> Result<RouteRecord> {
    let coordinates = match feature.geometry.map(|g| g.value) {
        Some(Value::LineString(positions)) => positions,
        _ => {
            return Err(RouteplanError::InvalidRouteData {
                reason: "Route geometry is missing or not a LineString".to_string(),
            })
        }
    };

    let properties = feature.properties.unwrap_or_default();

    // Zero-valued fields are omitted by the API
    let distance = properties
        .get("summary")
        .and_then(|summary| summary.get("distance"))
        .and_then(|d| d.as_f64())
        .unwrap_or(0.0);
    let ascent = properties.get("ascent").and_then(|v| v.as_f64());
    let descent = properties.get("descent").and_then(|v| v.as_f64());

    let extras: HashMap<String, ExtraInfo> = match properties.get("extras") {
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            RouteplanError::InvalidRouteData { reason: format!("Malformed route extras: {}", e) }
        })?,
        None => HashMap::new(),
    };

    Ok(RouteRecord { coordinates, bbox, distance, ascent, descent, extras })
}

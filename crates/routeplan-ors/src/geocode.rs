use geojson::{GeoJson, Value};
use routeplan_core::error::{Result, RouteplanError};
use routeplan_core::models::{BoundingBox, Coordinate};
use routeplan_core::ports::GeocodingService;

use crate::client::OrsClient;

const SEARCH_PATH: &str = "/geocode/search";

impl OrsClient {
    /// Query parameters for a Pelias search
    fn search_params(
        &self,
        text: &str,
        max_results: usize,
        bounding_box: Option<&BoundingBox>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key().to_string()),
            ("text", text.to_string()),
            ("size", max_results.to_string()),
        ];
        if let Some(bbox) = bounding_box {
            params.push(("boundary.rect.min_lon", bbox.min_lon.to_string()));
            params.push(("boundary.rect.max_lon", bbox.max_lon.to_string()));
            params.push(("boundary.rect.min_lat", bbox.min_lat.to_string()));
            params.push(("boundary.rect.max_lat", bbox.max_lat.to_string()));
        }
        params
    }
}

impl GeocodingService for OrsClient {
    fn search(
        &self,
        text: &str,
        max_results: usize,
        bounding_box: Option<&BoundingBox>,
    ) -> Result<Vec<Coordinate>> {
        let url = reqwest::Url::parse_with_params(
            &self.endpoint(SEARCH_PATH),
            self.search_params(text, max_results, bounding_box),
        )
        .map_err(|e| RouteplanError::ConfigInvalid {
            key: "ors_base_url".to_string(),
            reason: format!("Invalid openrouteservice URL: {}", e),
        })?;

        tracing::debug!(
            "Searching '{}' (size {}, bounded: {})",
            text,
            max_results,
            bounding_box.is_some()
        );

        let body = self.block_on(self.send(self.http().get(url)))?;
        parse_search_response(&body)
    }
}

/// Point coordinates of a Pelias search response, in ranking order
///
/// Features without a usable point geometry are skipped.
pub fn parse_search_response(body: &str) -> Result<Vec<Coordinate>> {
    let geojson = body.parse::<GeoJson>().map_err(|e| {
        RouteplanError::Serialization(format!("Invalid geocoding response: {}", e))
    })?;

    let collection = match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(RouteplanError::Serialization(
                "Geocoding response is not a FeatureCollection".to_string(),
            ))
        }
    };

    let coords = collection
        .features
        .iter()
        .filter_map(|feature| match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) if position.len() >= 2 => {
                Some(Coordinate::new(position[0], position[1]))
            }
            _ => {
                tracing::debug!("Skipping geocoding feature without point geometry");
                None
            }
        })
        .collect();

    Ok(coords)
}

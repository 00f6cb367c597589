use routeplan_core::error::{Result, RouteplanError};
use routeplan_core::models::{BoundingBox, Coordinate, OutlierStatus, Place, ResolvedPlace};
use routeplan_core::ports::GeocodingService;
use routeplan_geo::median_distance_to;

use crate::outliers::{detect_outliers, OutlierConfig};

/// Resolves ordered place lists to coordinates, repairing outliers on request
///
/// All intermediate state lives on the stack of a single `resolve` call, so one
/// resolver can serve independent itineraries concurrently.
pub struct GeocodeResolver<G>
where
    G: GeocodingService,
{
    geocoder: G,
    config: OutlierConfig,
}

impl<G> GeocodeResolver<G>
where
    G: GeocodingService,
{
    /// Create a resolver with the default outlier thresholds
    pub fn new(geocoder: G) -> Self {
        Self::with_config(geocoder, OutlierConfig::default())
    }

    pub fn with_config(geocoder: G, config: OutlierConfig) -> Self {
        Self { geocoder, config }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// One coordinate per place, in input order
    pub fn resolve(&self, places: &[Place], detect_outliers: bool) -> Result<Vec<Coordinate>> {
        Ok(self
            .resolve_detailed(places, detect_outliers)?
            .into_iter()
            .map(|resolved| resolved.coordinate)
            .collect())
    }

    /// Like [`resolve`](Self::resolve), also reporting how each place was treated
    pub fn resolve_detailed(
        &self,
        places: &[Place],
        detect_outliers: bool,
    ) -> Result<Vec<ResolvedPlace>> {
        let mut coords = Vec::with_capacity(places.len());
        for place in places {
            coords.push(self.geocode(place)?);
        }

        let mut statuses = vec![OutlierStatus::Inlier; coords.len()];
        if detect_outliers {
            self.repair_outliers(places, &mut coords, &mut statuses);
        }

        Ok(places
            .iter()
            .zip(coords)
            .zip(statuses)
            .map(|((place, coordinate), status)| ResolvedPlace {
                place: place.clone(),
                coordinate,
                status,
            })
            .collect())
    }

    /// Primary lookup: best match only, no bounding box
    fn geocode(&self, place: &Place) -> Result<Coordinate> {
        let results = self.geocoder.search(place.as_str(), 1, None)?;
        match results.first() {
            Some(coordinate) => {
                tracing::debug!("Geocoded '{}' to {}", place, coordinate);
                Ok(*coordinate)
            }
            None => {
                tracing::error!("Could not geocode location: {}", place);
                Err(RouteplanError::GeocodingFailure { place: place.to_string() })
            }
        }
    }

    /// Re-query flagged places inside the padded box of the inliers, then
    /// check once more. Failures here only log; the original coordinate stays.
    fn repair_outliers(
        &self,
        places: &[Place],
        coords: &mut [Coordinate],
        statuses: &mut [OutlierStatus],
    ) {
        let report = detect_outliers(coords, &self.config);
        if !report.has_outliers() {
            return;
        }
        tracing::info!("Outlier indices detected in geocoding: {:?}", report.indices());

        let inliers: Vec<Coordinate> = coords
            .iter()
            .enumerate()
            .filter(|(idx, _)| !report.is_outlier(*idx))
            .map(|(_, coord)| *coord)
            .collect();
        let search_box: Option<BoundingBox> =
            BoundingBox::from_coordinates(&inliers).map(|bbox| bbox.padded(self.config.bbox_padding));

        for &idx in &report.outliers {
            let place = &places[idx];
            statuses[idx] = OutlierStatus::Retained;

            let candidates = match self.geocoder.search(
                place.as_str(),
                self.config.max_candidates,
                search_box.as_ref(),
            ) {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!("Re-query failed for '{}': {}", place, e);
                    continue;
                }
            };

            match choose_best_candidate(&candidates, &inliers) {
                Some(best) => {
                    tracing::info!("Replaced '{}' {} with {}", place, coords[idx], best);
                    coords[idx] = best;
                    statuses[idx] = OutlierStatus::Corrected;
                }
                None => tracing::warn!(
                    "Re-query for '{}' returned no usable candidates, keeping {}",
                    place,
                    coords[idx]
                ),
            }
        }

        let recheck = detect_outliers(coords, &self.config);
        if recheck.has_outliers() {
            tracing::info!("Still outlier indices detected in geocoding: {:?}", recheck.indices());
        }
    }
}

/// Candidate with the smallest median distance to `fixed`; the first one wins ties.
/// Returns None when there are no candidates or nothing to compare against.
pub fn choose_best_candidate(candidates: &[Coordinate], fixed: &[Coordinate]) -> Option<Coordinate> {
    let mut best = None;
    let mut best_score = f64::INFINITY;

    for candidate in candidates {
        if let Some(score) = median_distance_to(candidate, fixed) {
            if score < best_score {
                best_score = score;
                best = Some(*candidate);
            }
        }
    }

    best
}

//! Scripted in-memory services shared by the integration tests

#![allow(dead_code)]

use routeplan_core::error::{Result, RouteplanError};
use routeplan_core::models::{BoundingBox, Coordinate, RouteOptions, RouteRecord};
use routeplan_core::ports::{GeocodingService, RoutingService};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded call to the scripted geocoder
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub text: String,
    pub max_results: usize,
    pub bounding_box: Option<BoundingBox>,
}

/// Geocoder answering from fixed tables: unbounded searches use `primary`,
/// bounded re-queries use `requery`
#[derive(Default)]
pub struct ScriptedGeocoder {
    primary: HashMap<String, Vec<Coordinate>>,
    requery: HashMap<String, Vec<Coordinate>>,
    failing_requery: Vec<String>,
    failing_primary: Vec<String>,
    calls: Mutex<Vec<SearchCall>>,
}

impl ScriptedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, text: &str, coord: Coordinate) -> Self {
        self.primary.insert(text.to_string(), vec![coord]);
        self
    }

    pub fn with_candidates(mut self, text: &str, candidates: Vec<Coordinate>) -> Self {
        self.requery.insert(text.to_string(), candidates);
        self
    }

    pub fn with_failing_requery(mut self, text: &str) -> Self {
        self.failing_requery.push(text.to_string());
        self
    }

    pub fn with_failing_primary(mut self, text: &str) -> Self {
        self.failing_primary.push(text.to_string());
        self
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn requery_calls(&self) -> Vec<SearchCall> {
        self.calls().into_iter().filter(|c| c.bounding_box.is_some()).collect()
    }
}

fn unavailable(text: &str) -> RouteplanError {
    RouteplanError::ServiceUnavailable {
        service: "scripted geocoder".to_string(),
        reason: format!("no answer for '{}'", text),
        remediation: "none".to_string(),
    }
}

impl GeocodingService for ScriptedGeocoder {
    fn search(
        &self,
        text: &str,
        max_results: usize,
        bounding_box: Option<&BoundingBox>,
    ) -> Result<Vec<Coordinate>> {
        self.calls.lock().unwrap().push(SearchCall {
            text: text.to_string(),
            max_results,
            bounding_box: bounding_box.copied(),
        });

        let (table, failing) = if bounding_box.is_some() {
            (&self.requery, &self.failing_requery)
        } else {
            (&self.primary, &self.failing_primary)
        };
        if failing.iter().any(|f| f == text) {
            return Err(unavailable(text));
        }

        let mut results = table.get(text).cloned().unwrap_or_default();
        results.truncate(max_results);
        Ok(results)
    }
}

/// Router returning a canned record and remembering the coordinates it was given
pub struct CannedRouter {
    record: RouteRecord,
    pub requests: Mutex<Vec<(Vec<Coordinate>, RouteOptions)>>,
}

impl CannedRouter {
    pub fn new(record: RouteRecord) -> Self {
        Self { record, requests: Mutex::new(Vec::new()) }
    }
}

impl RoutingService for CannedRouter {
    fn route(&self, coordinates: &[Coordinate], options: &RouteOptions) -> Result<RouteRecord> {
        self.requests.lock().unwrap().push((coordinates.to_vec(), options.clone()));
        Ok(self.record.clone())
    }
}

/// Four points within ~130 m of each other around Krakow's Main Square
pub fn krakow_cluster() -> Vec<Coordinate> {
    vec![
        Coordinate::new(19.9373, 50.0617),
        Coordinate::new(19.9383, 50.0617),
        Coordinate::new(19.9373, 50.0627),
        Coordinate::new(19.9383, 50.0627),
    ]
}

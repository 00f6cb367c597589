//! Provider-neutral shape of a routing response and the options that request it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `(start, end, code)` entry of a detailed annotation block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtraSegment(pub f64, pub f64, pub i32);

impl ExtraSegment {
    pub fn start(&self) -> f64 {
        self.0
    }

    pub fn end(&self) -> f64 {
        self.1
    }

    pub fn code(&self) -> i32 {
        self.2
    }
}

/// One entry of an annotation summary: how much of the route carries `value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub value: f64,
    pub distance: f64,
    /// Share of the total route, in percent
    pub amount: f64,
}

/// A named annotation block as returned by the routing provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    #[serde(default)]
    pub values: Vec<ExtraSegment>,
    #[serde(default)]
    pub summary: Vec<SummaryEntry>,
}

/// A single route feature returned by a routing provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Path points as `[lon, lat]` or `[lon, lat, elevation]`
    pub coordinates: Vec<Vec<f64>>,
    /// `[min_lon, min_lat, max_lon, max_lat]`, optionally with elevation bounds
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
    /// Total distance in meters
    pub distance: f64,
    #[serde(default)]
    pub ascent: Option<f64>,
    #[serde(default)]
    pub descent: Option<f64>,
    #[serde(default)]
    pub extras: HashMap<String, ExtraInfo>,
}

/// Options forwarded to the routing provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    pub profile: String,
    pub avoid_features: Vec<String>,
    pub elevation: bool,
    pub extra_info: Vec<String>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            profile: "foot-walking".to_string(),
            avoid_features: vec!["ferries".to_string()],
            elevation: true,
            extra_info: ["steepness", "suitability", "surface", "green", "noise", "shadow"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RouteOptions {
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }
}

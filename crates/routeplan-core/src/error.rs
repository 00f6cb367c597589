//! Error types for routeplan

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteplanError {
    // Geocoding errors
    #[error("Could not geocode location: {place}")]
    GeocodingFailure { place: String },

    // Feature index errors
    #[error("Point {point} outside of indexed range [{start}, {end})")]
    OutOfRange { point: f64, start: f64, end: f64 },

    #[error("Unknown {feature} category code: {code}")]
    UnknownCategory { feature: &'static str, code: String },

    // Routing errors
    #[error("Invalid route data: {reason}")]
    InvalidRouteData { reason: String },

    #[error("Cannot plan itinerary: {reason}")]
    InvalidItinerary { reason: String },

    // Provider errors
    #[error("{service} unavailable: {reason}. Try: {remediation}")]
    ServiceUnavailable {
        service: String,
        reason: String,
        remediation: String,
    },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Export errors
    #[error("Failed to write {format}: {reason}")]
    Export { format: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RouteplanError {
    pub(crate) fn invalid_route(reason: impl Into<String>) -> Self {
        RouteplanError::InvalidRouteData { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, RouteplanError>;

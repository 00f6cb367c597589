//! openrouteservice adapter for the routeplan geocoding and routing ports

pub mod client;
pub mod directions;
pub mod geocode;

pub use client::OrsClient;
pub use directions::parse_directions_response;
pub use geocode::parse_search_response;

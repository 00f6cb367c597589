//! Port trait definitions
//!
//! These traits define the interfaces that provider adapters must implement.

pub mod geocoding;
pub mod routing;

pub use geocoding::GeocodingService;
pub use routing::RoutingService;

use crate::error::Result;
use crate::models::{Coordinate, RouteOptions, RouteRecord};

/// Port for routing through an ordered list of coordinates
pub trait RoutingService: Send + Sync {
    /// Request a single route visiting `coordinates` in order
    fn route(&self, coordinates: &[Coordinate], options: &RouteOptions) -> Result<RouteRecord>;
}

impl<T: RoutingService + ?Sized> RoutingService for &T {
    fn route(&self, coordinates: &[Coordinate], options: &RouteOptions) -> Result<RouteRecord> {
        (**self).route(coordinates, options)
    }
}

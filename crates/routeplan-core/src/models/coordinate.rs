//! WGS84 coordinates and longitude/latitude bounding boxes.

use geo::{BoundingRect, MultiPoint, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (longitude, latitude) pair in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude)
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self { min_lon, max_lon, min_lat, max_lat }
    }

    /// Smallest box containing every coordinate. Returns None for an empty slice.
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let points: MultiPoint<f64> = coords.iter().map(|c| c.to_point()).collect();
        let rect = points.bounding_rect()?;
        Some(Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y))
    }

    /// Grow the box by `fraction` of its extent on each side of each axis
    pub fn padded(&self, fraction: f64) -> Self {
        let pad_lon = (self.max_lon - self.min_lon) * fraction;
        let pad_lat = (self.max_lat - self.min_lat) * fraction;
        Self {
            min_lon: self.min_lon - pad_lon,
            max_lon: self.max_lon + pad_lon,
            min_lat: self.min_lat - pad_lat,
            max_lat: self.max_lat + pad_lat,
        }
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lon >= self.min_lon
            && coord.lon <= self.max_lon
            && coord.lat >= self.min_lat
            && coord.lat <= self.max_lat
    }
}

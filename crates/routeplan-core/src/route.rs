//! A routed path with its geometry, totals and feature annotations.

use crate::error::{Result, RouteplanError};
use crate::features::{GaugeFeature, Steepness, SteepnessType, Surface, SurfaceType};
use crate::models::{BoundingBox, Coordinate, ExtraInfo, RouteRecord};
use std::collections::HashMap;

/// Annotation block names used by the routing provider
pub mod extras {
    pub const SURFACE: &str = "surface";
    pub const STEEPNESS: &str = "steepness";
    pub const GREEN: &str = "green";
    pub const NOISE: &str = "noise";
    pub const SHADOW: &str = "shadow";
}

/// One point of the route geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePoint {
    pub coordinate: Coordinate,
    pub elevation: Option<f64>,
}

/// A route built from one routing-provider record
///
/// Immutable once constructed. Feature accessors return `None` when the
/// provider did not include that annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<RoutePoint>,
    has_elevation: bool,
    bbox: BoundingBox,
    distance: f64,
    ascent: Option<f64>,
    descent: Option<f64>,
    surface: Option<Surface>,
    steepness: Option<Steepness>,
    greenness: Option<GaugeFeature>,
    noise: Option<GaugeFeature>,
    shade: Option<GaugeFeature>,
}

impl Route {
    pub fn from_record(record: RouteRecord) -> Result<Self> {
        let (points, has_elevation) = parse_geometry(&record.coordinates)?;

        let bbox = match &record.bbox {
            Some(raw) => parse_bbox(raw)?,
            None => {
                let coords: Vec<Coordinate> = points.iter().map(|p| p.coordinate).collect();
                BoundingBox::from_coordinates(&coords)
                    .ok_or_else(|| RouteplanError::invalid_route("Coords not present"))?
            }
        };

        let (ascent, descent) =
            if has_elevation { (record.ascent, record.descent) } else { (None, None) };

        let blocks = &record.extras;
        Ok(Self {
            points,
            has_elevation,
            bbox,
            distance: record.distance,
            ascent,
            descent,
            surface: parse_extra(blocks, extras::SURFACE, Surface::from_extra)?,
            steepness: parse_extra(blocks, extras::STEEPNESS, Steepness::from_extra)?,
            greenness: parse_extra(blocks, extras::GREEN, GaugeFeature::from_extra)?,
            noise: parse_extra(blocks, extras::NOISE, GaugeFeature::from_extra)?,
            shade: parse_extra(blocks, extras::SHADOW, GaugeFeature::from_extra)?,
        })
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn has_elevation(&self) -> bool {
        self.has_elevation
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Total distance in meters
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total ascent in meters; only present for 3D geometry
    pub fn ascent(&self) -> Option<f64> {
        self.ascent
    }

    pub fn descent(&self) -> Option<f64> {
        self.descent
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn steepness(&self) -> Option<&Steepness> {
        self.steepness.as_ref()
    }

    /// Surface at `point`, or None when the route carries no surface data
    pub fn surface_at(&self, point: f64) -> Option<Result<SurfaceType>> {
        self.surface.as_ref().map(|s| s.query(point))
    }

    pub fn steepness_at(&self, point: f64) -> Option<Result<SteepnessType>> {
        self.steepness.as_ref().map(|s| s.query(point))
    }

    pub fn greenness(&self) -> Option<f64> {
        self.greenness.as_ref().and_then(GaugeFeature::average)
    }

    pub fn noise(&self) -> Option<f64> {
        self.noise.as_ref().and_then(GaugeFeature::average)
    }

    pub fn shade(&self) -> Option<f64> {
        self.shade.as_ref().and_then(GaugeFeature::average)
    }
}

impl TryFrom<RouteRecord> for Route {
    type Error = RouteplanError;

    fn try_from(record: RouteRecord) -> Result<Self> {
        Self::from_record(record)
    }
}

fn parse_geometry(raw: &[Vec<f64>]) -> Result<(Vec<RoutePoint>, bool)> {
    let first = raw.first().ok_or_else(|| RouteplanError::invalid_route("Coords not present"))?;
    let dims = first.len();
    if dims != 2 && dims != 3 {
        return Err(RouteplanError::invalid_route(format!(
            "expected 2 or 3 components per point, got {}",
            dims
        )));
    }

    let points = raw
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            if point.len() != dims {
                return Err(RouteplanError::invalid_route(format!(
                    "point {} has {} components, expected {}",
                    idx,
                    point.len(),
                    dims
                )));
            }
            Ok(RoutePoint {
                coordinate: Coordinate::new(point[0], point[1]),
                elevation: point.get(2).copied(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((points, dims == 3))
}

fn parse_bbox(raw: &[f64]) -> Result<BoundingBox> {
    match raw {
        [min_lon, min_lat, max_lon, max_lat] => {
            Ok(BoundingBox::new(*min_lon, *max_lon, *min_lat, *max_lat))
        }
        [min_lon, min_lat, _, max_lon, max_lat, _] => {
            Ok(BoundingBox::new(*min_lon, *max_lon, *min_lat, *max_lat))
        }
        other => Err(RouteplanError::invalid_route(format!(
            "bbox must have 4 or 6 values, got {}",
            other.len()
        ))),
    }
}

fn parse_extra<F>(
    extras: &HashMap<String, ExtraInfo>,
    name: &str,
    parse: impl Fn(&ExtraInfo) -> Result<F>,
) -> Result<Option<F>> {
    let block = match extras.get(name) {
        Some(block) => block,
        None => return Ok(None),
    };
    match parse(block) {
        Ok(feature) => Ok(Some(feature)),
        Err(RouteplanError::UnknownCategory { feature, code }) => {
            Err(RouteplanError::invalid_route(format!(
                "unknown {} code {} in '{}' block",
                feature, code, name
            )))
        }
        Err(e) => Err(e),
    }
}

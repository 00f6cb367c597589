use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, RouteplanError};
use crate::route::Route;

const CREATOR: &str = "routeplan";

/// Build a GPX document with one track and one segment holding the route geometry
pub fn route_to_gpx(route: &Route) -> Gpx {
    let mut segment = TrackSegment::new();
    segment.points = route
        .points()
        .iter()
        .map(|point| {
            let mut waypoint = Waypoint::new(point.coordinate.to_point());
            waypoint.elevation = point.elevation;
            waypoint
        })
        .collect();

    let mut track = Track::new();
    track.segments.push(segment);

    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.to_string()),
        tracks: vec![track],
        ..Default::default()
    }
}

/// Serialize the route as GPX into `writer`
pub fn write_gpx<W: Write>(route: &Route, writer: W) -> Result<()> {
    gpx::write(&route_to_gpx(route), writer).map_err(|e| RouteplanError::Export {
        format: "GPX".to_string(),
        reason: e.to_string(),
    })
}

impl Route {
    /// GPX document as a string
    pub fn to_gpx_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        write_gpx(self, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| RouteplanError::Serialization(e.to_string()))
    }

    /// Write the route to `path` as GPX, creating parent directories as needed
    pub fn save_gpx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        write_gpx(self, &mut writer)?;
        writer.flush()?;
        tracing::info!("Saved GPX track with {} points to {}", self.points().len(), path.display());
        Ok(())
    }
}

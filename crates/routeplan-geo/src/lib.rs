//! Routeplan Geo - Great-circle distances and robust statistics
//!
//! Distances are computed with the haversine formula on the mean Earth
//! radius (6371.0088 km) and reported in kilometers.

pub mod distance;
pub mod stats;

pub use distance::{haversine_km, median_distance_to, median_pairwise_distances};
pub use stats::{median, median_absolute_deviation};

//! Routeplan Resolver - Outlier-aware geocoding and route planning
//!
//! Resolves ordered place lists to coordinates, repairs statistically
//! anomalous geocoding results, and hands the result to a routing service.

pub mod outliers;
pub mod planner;
pub mod resolver;

pub use outliers::{detect_outliers, DetectionMethod, OutlierConfig, OutlierReport};
pub use planner::{PlannedRoute, RoutePlanner};
pub use resolver::{choose_best_candidate, GeocodeResolver};

//! Route annotations: decoded categories, segment indices and summaries
//!
//! Detailed features (surface, steepness) can be queried at any distance along
//! the route. Gauge features (greenness, noise, shade) only carry a summary
//! and a weighted 0-10 average.

pub mod category;
pub mod detailed;
pub mod gauge;
pub mod index;
pub mod summary;

pub use category::{Category, GaugeLevel, SteepnessType, SurfaceType};
pub use detailed::{DetailedFeature, Steepness, Surface};
pub use gauge::GaugeFeature;
pub use index::{FeatureSegment, SegmentIndex};
pub use summary::{FeatureSummary, SummaryShare};

use crate::error::Result;

/// Anything that carries a per-category summary of the route
pub trait Annotation {
    type Category: Category;

    fn summary(&self) -> &FeatureSummary<Self::Category>;
}

/// Annotations that can answer "what is the category at this distance?"
pub trait SegmentQuery: Annotation {
    fn query(&self, point: f64) -> Result<Self::Category>;
}

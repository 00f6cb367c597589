use super::category::{Category, SteepnessType, SurfaceType};
use super::index::SegmentIndex;
use super::summary::FeatureSummary;
use super::{Annotation, SegmentQuery};
use crate::error::Result;
use crate::models::ExtraInfo;

/// A feature available both per segment and as a route summary
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedFeature<T> {
    index: SegmentIndex<T>,
    summary: FeatureSummary<T>,
}

pub type Surface = DetailedFeature<SurfaceType>;
pub type Steepness = DetailedFeature<SteepnessType>;

impl<T: Category> DetailedFeature<T> {
    pub fn new(index: SegmentIndex<T>, summary: FeatureSummary<T>) -> Self {
        Self { index, summary }
    }

    pub fn from_extra(extra: &ExtraInfo) -> Result<Self> {
        Ok(Self::new(
            SegmentIndex::from_values(&extra.values)?,
            FeatureSummary::from_entries(&extra.summary)?,
        ))
    }

    /// Category at `point` along the route
    pub fn query(&self, point: f64) -> Result<T> {
        self.index.query(point)
    }

    pub fn index(&self) -> &SegmentIndex<T> {
        &self.index
    }

    pub fn summary(&self) -> &FeatureSummary<T> {
        &self.summary
    }
}

impl<T: Category> Annotation for DetailedFeature<T> {
    type Category = T;

    fn summary(&self) -> &FeatureSummary<T> {
        &self.summary
    }
}

impl<T: Category> SegmentQuery for DetailedFeature<T> {
    fn query(&self, point: f64) -> Result<T> {
        self.index.query(point)
    }
}

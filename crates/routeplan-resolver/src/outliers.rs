//! Outlier detection over geocoded points
//!
//! Each point is scored by the median great-circle distance to every other
//! point. Points whose score deviates strongly from the typical score are
//! flagged, using the modified z-score when the median absolute deviation
//! (MAD) is usable and fixed distance thresholds when it is zero.

use routeplan_core::models::Coordinate;
use routeplan_geo::{median_absolute_deviation, median_pairwise_distances};
use std::collections::BTreeSet;

/// Scale factor that makes the MAD comparable to a standard deviation
const MODIFIED_Z_SCALE: f64 = 0.6745;

/// Below this many points there is no meaningful "typical" spacing
const MIN_POINTS: usize = 3;

/// Tunables for outlier detection and repair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierConfig {
    /// Modified z-score above which a point is flagged
    pub z_threshold: f64,
    /// When every point coincides, flag points further than this (km)
    pub coincident_threshold_km: f64,
    /// With zero MAD, flag points beyond `median * spread_factor` ...
    pub spread_factor: f64,
    /// ... or `median + spread_margin_km`, whichever is larger
    pub spread_margin_km: f64,
    /// Fraction of the inlier box extent added on each side for re-queries
    pub bbox_padding: f64,
    /// Number of candidates requested when re-querying a flagged place
    pub max_candidates: usize,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            z_threshold: 3.5,
            coincident_threshold_km: 1.5,
            spread_factor: 3.5,
            spread_margin_km: 2.0,
            bbox_padding: 0.2,
            max_candidates: 5,
        }
    }
}

/// Which rule produced the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Fewer than three points
    Skipped,
    /// MAD and median are both zero
    Coincident,
    /// MAD is zero but points are spread out
    Spread,
    /// Regular modified z-score test
    ModifiedZScore,
}

/// Outcome of one detection pass
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    pub median_distances: Vec<f64>,
    pub overall_median: f64,
    pub mad: f64,
    pub method: DetectionMethod,
    pub outliers: BTreeSet<usize>,
}

impl OutlierReport {
    fn skipped(len: usize) -> Self {
        Self {
            median_distances: vec![0.0; len],
            overall_median: 0.0,
            mad: 0.0,
            method: DetectionMethod::Skipped,
            outliers: BTreeSet::new(),
        }
    }

    pub fn is_outlier(&self, idx: usize) -> bool {
        self.outliers.contains(&idx)
    }

    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }

    /// Flagged indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.outliers.iter().copied().collect()
    }
}

/// Flag points whose median distance to the others is anomalous
pub fn detect_outliers(coords: &[Coordinate], config: &OutlierConfig) -> OutlierReport {
    if coords.len() < MIN_POINTS {
        return OutlierReport::skipped(coords.len());
    }

    let median_distances = median_pairwise_distances(coords);
    let (overall_median, mad) = median_absolute_deviation(&median_distances);

    let method = match (mad == 0.0, overall_median == 0.0) {
        (true, true) => DetectionMethod::Coincident,
        (true, false) => DetectionMethod::Spread,
        (false, _) => DetectionMethod::ModifiedZScore,
    };
    let spread_limit =
        (overall_median * config.spread_factor).max(overall_median + config.spread_margin_km);

    let is_outlier = |d: f64| match method {
        DetectionMethod::Coincident => d > config.coincident_threshold_km,
        DetectionMethod::Spread => d > spread_limit,
        DetectionMethod::ModifiedZScore => {
            MODIFIED_Z_SCALE * (d - overall_median).abs() / mad > config.z_threshold
        }
        DetectionMethod::Skipped => false,
    };

    let outliers = median_distances
        .iter()
        .enumerate()
        .filter(|(_, d)| is_outlier(**d))
        .map(|(idx, _)| idx)
        .collect();

    OutlierReport { median_distances, overall_median, mad, method, outliers }
}

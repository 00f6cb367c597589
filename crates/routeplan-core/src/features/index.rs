//! Distance-indexed segments with binary-search lookup.

use super::category::Category;
use crate::error::{Result, RouteplanError};
use crate::models::ExtraSegment;

/// A `[start, end)` stretch of the route carrying one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSegment<T> {
    pub start: f64,
    pub end: f64,
    pub category: T,
}

impl<T> FeatureSegment<T> {
    pub fn contains(&self, point: f64) -> bool {
        self.start <= point && point < self.end
    }
}

/// Sorted, non-overlapping segments over one category type
///
/// Segments do not have to be contiguous. A query that lands in a gap fails
/// with `OutOfRange` instead of snapping to a neighbour.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentIndex<T> {
    segments: Vec<FeatureSegment<T>>,
}

impl<T: Category> SegmentIndex<T> {
    /// Build from already-decoded segments
    pub fn new(segments: Vec<FeatureSegment<T>>) -> Result<Self> {
        for (idx, segment) in segments.iter().enumerate() {
            if !(segment.start <= segment.end) {
                return Err(RouteplanError::invalid_route(format!(
                    "{} segment {} ends before it starts ({} > {})",
                    T::FEATURE,
                    idx,
                    segment.start,
                    segment.end
                )));
            }
            if idx > 0 && segment.start < segments[idx - 1].end {
                return Err(RouteplanError::invalid_route(format!(
                    "{} segment {} starts at {} inside the previous segment ending at {}",
                    T::FEATURE,
                    idx,
                    segment.start,
                    segments[idx - 1].end
                )));
            }
        }

        Ok(Self { segments })
    }

    /// Decode raw provider `(start, end, code)` triples
    pub fn from_values(values: &[ExtraSegment]) -> Result<Self> {
        let segments = values
            .iter()
            .map(|value| {
                Ok(FeatureSegment {
                    start: value.start(),
                    end: value.end(),
                    category: T::from_code(value.code())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(segments)
    }

    /// Category of the segment containing `point`
    pub fn query(&self, point: f64) -> Result<T> {
        let out_of_range = || RouteplanError::OutOfRange {
            point,
            start: self.start().unwrap_or(0.0),
            end: self.end().unwrap_or(0.0),
        };

        match (self.start(), self.end()) {
            (Some(start), Some(end)) if start <= point && point < end => {}
            _ => return Err(out_of_range()),
        }

        // Rightmost segment whose start is <= point
        let idx = self.segments.partition_point(|segment| segment.start <= point);
        if idx == 0 {
            return Err(out_of_range());
        }

        let segment = &self.segments[idx - 1];
        if segment.contains(point) {
            Ok(segment.category)
        } else {
            Err(out_of_range())
        }
    }
}

impl<T> SegmentIndex<T> {
    /// Start of the first segment
    pub fn start(&self) -> Option<f64> {
        self.segments.first().map(|s| s.start)
    }

    /// End of the last segment (exclusive)
    pub fn end(&self) -> Option<f64> {
        self.segments.last().map(|s| s.end)
    }

    pub fn segments(&self) -> &[FeatureSegment<T>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

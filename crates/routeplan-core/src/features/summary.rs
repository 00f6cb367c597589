use super::category::Category;
use crate::error::Result;
use crate::models::SummaryEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distance and share of the route covered by one category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryShare {
    pub distance: f64,
    pub percent: f64,
}

/// Per-category coverage of a route
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary<T> {
    shares: BTreeMap<T, SummaryShare>,
}

impl<T: Category> FeatureSummary<T> {
    /// Decode provider summary entries. Repeated values are merged.
    pub fn from_entries(entries: &[SummaryEntry]) -> Result<Self> {
        let mut shares: BTreeMap<T, SummaryShare> = BTreeMap::new();
        for entry in entries {
            let share = shares.entry(T::from_value(entry.value)?).or_default();
            share.distance += entry.distance;
            share.percent += entry.amount;
        }

        let summary = Self { shares };
        if !summary.is_empty() && (summary.total_percent() - 100.0).abs() > 1.0 {
            tracing::debug!(
                "{} summary covers {:.2}% of the route",
                T::FEATURE,
                summary.total_percent()
            );
        }
        Ok(summary)
    }

    pub fn get(&self, category: T) -> Option<&SummaryShare> {
        self.shares.get(&category)
    }

    /// Category covering the longest distance
    pub fn dominant(&self) -> Option<T> {
        self.shares
            .iter()
            .max_by(|a, b| a.1.distance.total_cmp(&b.1.distance))
            .map(|(category, _)| *category)
    }

    /// Percent-weighted mean of the category codes, rounded to 2 decimals.
    /// None when the summary is empty.
    pub fn weighted_average(&self) -> Option<f64> {
        if self.shares.is_empty() {
            return None;
        }
        let average: f64 = self
            .shares
            .iter()
            .map(|(category, share)| category.code() as f64 * share.percent / 100.0)
            .sum();
        Some((average * 100.0).round() / 100.0)
    }
}

impl<T> FeatureSummary<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&T, &SummaryShare)> {
        self.shares.iter()
    }

    pub fn total_percent(&self) -> f64 {
        self.shares.values().map(|s| s.percent).sum()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl<T: Ord> Default for FeatureSummary<T> {
    fn default() -> Self {
        Self { shares: BTreeMap::new() }
    }
}

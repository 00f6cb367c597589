use super::category::GaugeLevel;
use super::summary::FeatureSummary;
use super::Annotation;
use crate::error::Result;
use crate::models::{ExtraInfo, SummaryEntry};

/// A summary-only 0-10 rating (greenness, noise, shade)
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeFeature {
    summary: FeatureSummary<GaugeLevel>,
    average: Option<f64>,
}

impl GaugeFeature {
    pub fn from_summary(entries: &[SummaryEntry]) -> Result<Self> {
        let summary = FeatureSummary::from_entries(entries)?;
        let average = summary.weighted_average();
        Ok(Self { summary, average })
    }

    /// Only the summary is used; per-segment values are ignored
    pub fn from_extra(extra: &ExtraInfo) -> Result<Self> {
        Self::from_summary(&extra.summary)
    }

    /// Percent-weighted average level, absent for an empty summary
    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn summary(&self) -> &FeatureSummary<GaugeLevel> {
        &self.summary
    }
}

impl Annotation for GaugeFeature {
    type Category = GaugeLevel;

    fn summary(&self) -> &FeatureSummary<GaugeLevel> {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_greenness_average() {
        let gauge = GaugeFeature::from_summary(&[
            SummaryEntry { value: 3.0, distance: 100.0, amount: 40.0 },
            SummaryEntry { value: 7.0, distance: 150.0, amount: 60.0 },
        ])
        .unwrap();

        assert_eq!(gauge.average(), Some(5.4));
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let gauge = GaugeFeature::from_summary(&[
            SummaryEntry { value: 1.0, distance: 10.0, amount: 33.333 },
            SummaryEntry { value: 2.0, distance: 20.0, amount: 66.667 },
        ])
        .unwrap();

        assert_eq!(gauge.average(), Some(1.67));
    }

    #[test]
    fn test_empty_summary_is_absent_not_zero() {
        let gauge = GaugeFeature::from_summary(&[]).unwrap();
        assert_eq!(gauge.average(), None);
    }

    #[test]
    fn test_out_of_scale_level_rejected() {
        let result = GaugeFeature::from_summary(&[SummaryEntry {
            value: 12.0,
            distance: 10.0,
            amount: 100.0,
        }]);
        assert!(result.is_err());
    }

    /// Shares over distinct levels in shuffled order
    fn shares() -> impl Strategy<Value = Vec<SummaryEntry>> {
        let levels: Vec<u8> = (0..=GaugeLevel::MAX).collect();
        (
            prop::sample::subsequence(levels, 1..8).prop_shuffle(),
            prop::collection::vec(1u32..1000, 8),
        )
            .prop_map(|(levels, weights)| {
                let raw: Vec<(u8, u32)> = levels.into_iter().zip(weights).collect();
                let total: u32 = raw.iter().map(|(_, w)| *w).sum();
                raw.into_iter()
                    .map(|(value, weight)| SummaryEntry {
                        value: value as f64,
                        distance: weight as f64,
                        amount: weight as f64 * 100.0 / total as f64,
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_average_is_order_invariant(entries in shares()) {
            let forward = GaugeFeature::from_summary(&entries).unwrap().average().unwrap();
            let mut reversed = entries.clone();
            reversed.reverse();
            let backward = GaugeFeature::from_summary(&reversed).unwrap().average().unwrap();

            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn prop_average_within_scale(entries in shares()) {
            let max_value = entries.iter().map(|e| e.value).fold(0.0, f64::max);
            let average = GaugeFeature::from_summary(&entries).unwrap().average().unwrap();

            prop_assert!(average >= 0.0);
            prop_assert!(average <= max_value + 0.005);
        }
    }
}

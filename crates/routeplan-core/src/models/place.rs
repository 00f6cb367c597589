use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text place description as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(pub String);

impl Place {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Place {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Place {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How outlier detection treated a resolved place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutlierStatus {
    /// Not flagged
    #[default]
    Inlier,
    /// Flagged and replaced by a re-queried candidate
    Corrected,
    /// Flagged, but the re-query produced nothing better so the original was kept
    Retained,
}

impl OutlierStatus {
    pub fn is_outlier(&self) -> bool {
        !matches!(self, OutlierStatus::Inlier)
    }
}

/// A place together with the coordinate it resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub place: Place,
    pub coordinate: Coordinate,
    pub status: OutlierStatus,
}

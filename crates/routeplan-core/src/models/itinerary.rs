use super::place::Place;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered walk from `start` to `end` through `waypoints`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub start: Place,
    pub end: Place,
    #[serde(default)]
    pub waypoints: Vec<Place>,
    /// Set when the request cannot be planned as asked
    #[serde(default)]
    pub updated_request: Option<String>,
}

impl Itinerary {
    pub fn new(start: impl Into<Place>, end: impl Into<Place>, waypoints: Vec<Place>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            waypoints,
            updated_request: None,
        }
    }

    /// An itinerary that cannot be planned; carries a suggested rewording of the request
    pub fn unfeasible(updated_request: impl Into<String>) -> Self {
        Self {
            start: Place::new(""),
            end: Place::new(""),
            waypoints: Vec::new(),
            updated_request: Some(updated_request.into()),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.updated_request.is_none()
    }

    /// Places in visiting order: start, waypoints, end
    pub fn places(&self) -> Vec<Place> {
        let mut places = Vec::with_capacity(self.waypoints.len() + 2);
        places.push(self.start.clone());
        places.extend(self.waypoints.iter().cloned());
        places.push(self.end.clone());
        places
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(updated) = &self.updated_request {
            return write!(f, "Unfeasible itinerary. Suggested update to request: {}", updated);
        }
        let via: Vec<&str> = self.waypoints.iter().map(Place::as_str).collect();
        write!(f, "Itinerary from {} to {} via [{}]", self.start, self.end, via.join(", "))
    }
}

use crate::error::Result;
use crate::models::{BoundingBox, Coordinate};

/// Port for turning free text into coordinates
pub trait GeocodingService: Send + Sync {
    /// Search for a place, best match first
    ///
    /// # Arguments
    /// * `text` - Free-text place description
    /// * `max_results` - Upper bound on the number of coordinates returned
    /// * `bounding_box` - Optional box the results must fall inside
    ///
    /// # Returns
    /// Matching coordinates in provider rank order; may be empty
    fn search(
        &self,
        text: &str,
        max_results: usize,
        bounding_box: Option<&BoundingBox>,
    ) -> Result<Vec<Coordinate>>;
}

impl<T: GeocodingService + ?Sized> GeocodingService for &T {
    fn search(
        &self,
        text: &str,
        max_results: usize,
        bounding_box: Option<&BoundingBox>,
    ) -> Result<Vec<Coordinate>> {
        (**self).search(text, max_results, bounding_box)
    }
}

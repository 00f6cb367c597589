use geo::{Distance, Haversine};
use routeplan_core::models::Coordinate;

/// Great-circle distance in kilometers between two coordinates
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    // geo's Haversine uses the mean Earth radius of 6371008.8 m
    Haversine.distance(a.to_point(), b.to_point()) / 1000.0
}

/// Median distance from `point` to every coordinate in `others`.
/// Returns None when `others` is empty.
pub fn median_distance_to(point: &Coordinate, others: &[Coordinate]) -> Option<f64> {
    if others.is_empty() {
        return None;
    }
    let distances: Vec<f64> = others.iter().map(|other| haversine_km(point, other)).collect();
    Some(crate::stats::median(&distances))
}

/// For each coordinate, the median distance to every other coordinate
pub fn median_pairwise_distances(coords: &[Coordinate]) -> Vec<f64> {
    coords
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let distances: Vec<f64> = coords
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| haversine_km(point, other))
                .collect();
            crate::stats::median(&distances)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = Coordinate::new(10.0, 50.0);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // One degree of arc on a 6371.0088 km sphere
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let expected = 6371.0088 * std::f64::consts::PI / 180.0;
        assert!((haversine_km(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_known_city_pair() {
        // Krakow Main Square to Warsaw Palace of Culture, roughly 252 km
        let krakow = Coordinate::new(19.9373, 50.0617);
        let warsaw = Coordinate::new(21.0067, 52.2319);
        let d = haversine_km(&krakow, &warsaw);
        assert!(d > 250.0 && d < 255.0, "distance was {}", d);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = Coordinate::new(-122.3269, 47.6445);
        let b = Coordinate::new(-122.3275, 47.6450);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn test_median_distance_to_empty() {
        assert!(median_distance_to(&Coordinate::new(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn test_median_pairwise_distances() {
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
        ];
        let one_degree = 6371.0088 * std::f64::consts::PI / 180.0;

        let medians = median_pairwise_distances(&coords);
        assert_eq!(medians.len(), 3);
        // Ends: median of (1°, 2°); middle: median of (1°, 1°)
        assert!((medians[0] - 1.5 * one_degree).abs() < 1e-6);
        assert!((medians[1] - one_degree).abs() < 1e-6);
        assert!((medians[2] - 1.5 * one_degree).abs() < 1e-6);
    }

    #[test]
    fn test_median_pairwise_single_point() {
        let medians = median_pairwise_distances(&[Coordinate::new(1.0, 1.0)]);
        assert_eq!(medians, vec![0.0]);
    }
}

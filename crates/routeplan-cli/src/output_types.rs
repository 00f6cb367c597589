use routeplan_core::features::{Category, FeatureSummary};
use routeplan_core::models::ResolvedPlace;
use serde::Serialize;
use tabled::Tabled;

/// Output for resolve command
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub places: Vec<ResolvedPlace>,
}

/// Output for route command
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub places: Vec<ResolvedPlace>,
    pub distance_m: f64,
    pub ascent_m: Option<f64>,
    pub descent_m: Option<f64>,
    pub greenness: Option<f64>,
    pub noise: Option<f64>,
    pub shade: Option<f64>,
    pub surface: Vec<ShareRow>,
    pub steepness: Vec<ShareRow>,
    pub gpx_path: Option<String>,
}

/// One resolved place as a table row
#[derive(Debug, Tabled)]
pub struct PlaceRow {
    #[tabled(rename = "Place")]
    pub place: String,
    #[tabled(rename = "Lon")]
    pub lon: String,
    #[tabled(rename = "Lat")]
    pub lat: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&ResolvedPlace> for PlaceRow {
    fn from(resolved: &ResolvedPlace) -> Self {
        Self {
            place: resolved.place.to_string(),
            lon: format!("{:.6}", resolved.coordinate.lon),
            lat: format!("{:.6}", resolved.coordinate.lat),
            status: format!("{:?}", resolved.status),
        }
    }
}

/// Share of the route in one category
#[derive(Debug, Serialize, Tabled)]
pub struct ShareRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Code")]
    pub code: i32,
    #[tabled(rename = "Distance (m)")]
    pub distance: f64,
    #[tabled(rename = "Share (%)")]
    pub percent: f64,
}

impl ShareRow {
    pub fn from_summary<T: Category>(summary: &FeatureSummary<T>) -> Vec<Self> {
        summary
            .iter()
            .map(|(category, share)| Self {
                category: category.to_string(),
                code: category.code(),
                distance: share.distance,
                percent: share.percent,
            })
            .collect()
    }
}

/// A configuration value with its source
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplan_core::features::{SteepnessType, SurfaceType};
    use routeplan_core::models::{Coordinate, OutlierStatus, Place, SummaryEntry};

    fn corrected_barbican() -> ResolvedPlace {
        ResolvedPlace {
            place: Place::new("Barbican, Krakow"),
            coordinate: Coordinate::new(19.9416, 50.0655),
            status: OutlierStatus::Corrected,
        }
    }

    #[test]
    fn test_place_row_formats_coordinates() {
        let row = PlaceRow::from(&corrected_barbican());

        assert_eq!(row.place, "Barbican, Krakow");
        assert_eq!(row.lon, "19.941600");
        assert_eq!(row.lat, "50.065500");
        assert_eq!(row.status, "Corrected");
    }

    #[test]
    fn test_share_rows_from_surface_summary() {
        let summary = FeatureSummary::<SurfaceType>::from_entries(&[
            SummaryEntry { value: 10.0, distance: 510.2, amount: 60.0 },
            SummaryEntry { value: 3.0, distance: 340.1, amount: 40.0 },
        ])
        .unwrap();

        let rows = ShareRow::from_summary(&summary);

        // Ordered by category, not by input order
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Asphalt");
        assert_eq!(rows[0].code, 3);
        assert_eq!(rows[0].distance, 340.1);
        assert_eq!(rows[1].category, "Gravel");
        assert_eq!(rows[1].percent, 60.0);
    }

    #[test]
    fn test_share_rows_keep_signed_steepness_codes() {
        let summary = FeatureSummary::<SteepnessType>::from_entries(&[SummaryEntry {
            value: -4.0,
            distance: 80.0,
            amount: 100.0,
        }])
        .unwrap();

        let rows = ShareRow::from_summary(&summary);

        assert_eq!(rows[0].code, -4);
        assert_eq!(rows[0].category, SteepnessType::SteepDecline.to_string());
    }

    #[test]
    fn test_route_output_json_shape() {
        let output = RouteOutput {
            places: vec![corrected_barbican()],
            distance_m: 850.3,
            ascent_m: Some(9.0),
            descent_m: None,
            greenness: Some(5.4),
            noise: None,
            shade: None,
            surface: Vec::new(),
            steepness: Vec::new(),
            gpx_path: Some("out/itinerary.gpx".to_string()),
        };

        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["distance_m"], 850.3);
        assert_eq!(json["greenness"], 5.4);
        assert!(json["noise"].is_null());
        assert_eq!(json["places"][0]["status"], "corrected");
        assert_eq!(json["places"][0]["coordinate"]["lon"], 19.9416);
        assert_eq!(json["gpx_path"], "out/itinerary.gpx");
    }

    #[test]
    fn test_resolve_output_json_shape() {
        let output = ResolveOutput { places: vec![corrected_barbican()] };

        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["places"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["places"][0]["place"], "Barbican, Krakow");
    }
}

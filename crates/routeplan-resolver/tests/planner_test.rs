//! Integration tests for the route planning pipeline

mod common;

use common::{krakow_cluster, CannedRouter, ScriptedGeocoder};
use routeplan_core::error::RouteplanError;
use routeplan_core::features::SurfaceType;
use routeplan_core::models::{
    Coordinate, ExtraInfo, ExtraSegment, Itinerary, OutlierStatus, Place, RouteOptions,
    RouteRecord, SummaryEntry,
};
use routeplan_resolver::RoutePlanner;
use std::collections::HashMap;
use tempfile::TempDir;

fn old_town_walk() -> RouteRecord {
    let mut extras = HashMap::new();
    extras.insert(
        "surface".to_string(),
        ExtraInfo {
            values: vec![ExtraSegment(0.0, 2.0, 3), ExtraSegment(2.0, 3.0, 10)],
            summary: vec![
                SummaryEntry { value: 3.0, distance: 180.0, amount: 60.0 },
                SummaryEntry { value: 10.0, distance: 120.0, amount: 40.0 },
            ],
        },
    );
    extras.insert(
        "green".to_string(),
        ExtraInfo {
            values: vec![ExtraSegment(0.0, 3.0, 6)],
            summary: vec![SummaryEntry { value: 6.0, distance: 300.0, amount: 100.0 }],
        },
    );

    RouteRecord {
        coordinates: vec![
            vec![19.9373, 50.0617, 210.0],
            vec![19.9383, 50.0617, 212.5],
            vec![19.9373, 50.0627, 211.0],
            vec![19.9383, 50.0627, 215.0],
        ],
        bbox: None,
        distance: 300.0,
        ascent: Some(6.5),
        descent: Some(1.5),
        extras,
    }
}

fn walk_geocoder() -> ScriptedGeocoder {
    let cluster = krakow_cluster();
    ScriptedGeocoder::new()
        .with_place("Wawel Castle", cluster[0])
        .with_place("Grodzka Street", cluster[1])
        .with_place("Main Market Square", cluster[2])
        .with_place("Florianska Street", cluster[3])
}

fn walk_itinerary() -> Itinerary {
    Itinerary::new(
        "Wawel Castle",
        "Florianska Street",
        vec![Place::new("Grodzka Street"), Place::new("Main Market Square")],
    )
}

#[test]
fn test_plan_builds_route_from_itinerary() {
    let planner = RoutePlanner::new(walk_geocoder(), CannedRouter::new(old_town_walk()));

    let planned = planner.plan(&walk_itinerary()).unwrap();

    assert_eq!(planned.coordinates(), krakow_cluster());
    assert!(planned.places.iter().all(|p| p.status == OutlierStatus::Inlier));
    assert_eq!(planned.route.distance(), 300.0);
    assert_eq!(planned.route.ascent(), Some(6.5));
    assert_eq!(planned.route.surface_at(1.0).unwrap().unwrap(), SurfaceType::Asphalt);
    assert_eq!(planned.route.greenness(), Some(6.0));
    assert!(planned.route.noise().is_none());
}

#[test]
fn test_plan_forwards_coordinates_and_options() {
    let router = CannedRouter::new(old_town_walk());
    let options = RouteOptions::default().with_profile("foot-hiking");
    let planner = RoutePlanner::new(walk_geocoder(), &router).with_options(options.clone());

    planner.plan(&walk_itinerary()).unwrap();

    let requests = router.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, krakow_cluster());
    assert_eq!(requests[0].1, options);
}

#[test]
fn test_unfeasible_itinerary_is_rejected() {
    let router = CannedRouter::new(old_town_walk());
    let geocoder = walk_geocoder();
    let planner = RoutePlanner::new(&geocoder, &router);

    let err = planner
        .plan(&Itinerary::unfeasible("Try fewer stops within one city"))
        .unwrap_err();

    assert!(matches!(err, RouteplanError::InvalidItinerary { .. }));
    assert!(geocoder.calls().is_empty());
    assert!(router.requests.lock().unwrap().is_empty());
}

#[test]
fn test_plan_repairs_outliers_before_routing() {
    let closer = Coordinate::new(19.9378, 50.0622);
    let geocoder = walk_geocoder()
        .with_place("Barbican", Coordinate::new(20.6373, 50.0617))
        .with_candidates("Barbican", vec![closer]);
    let router = CannedRouter::new(old_town_walk());
    let planner = RoutePlanner::new(geocoder, &router);

    let itinerary = Itinerary::new(
        "Wawel Castle",
        "Barbican",
        vec![
            Place::new("Grodzka Street"),
            Place::new("Main Market Square"),
            Place::new("Florianska Street"),
        ],
    );
    let planned = planner.plan(&itinerary).unwrap();

    assert_eq!(planned.places[4].status, OutlierStatus::Corrected);
    assert_eq!(router.requests.lock().unwrap()[0].0[4], closer);
}

#[test]
fn test_plan_without_detection_routes_raw_coordinates() {
    let far = Coordinate::new(20.6373, 50.0617);
    let geocoder = walk_geocoder()
        .with_place("Barbican", far)
        .with_candidates("Barbican", vec![Coordinate::new(19.9378, 50.0622)]);
    let router = CannedRouter::new(old_town_walk());
    let planner = RoutePlanner::new(geocoder, &router).with_outlier_detection(false);

    let itinerary = Itinerary::new(
        "Wawel Castle",
        "Barbican",
        vec![
            Place::new("Grodzka Street"),
            Place::new("Main Market Square"),
            Place::new("Florianska Street"),
        ],
    );
    planner.plan(&itinerary).unwrap();

    assert_eq!(router.requests.lock().unwrap()[0].0[4], far);
    assert!(planner.resolver().geocoder().requery_calls().is_empty());
}

#[test]
fn test_plan_and_save_writes_gpx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("itinerary.gpx");
    let planner = RoutePlanner::new(walk_geocoder(), CannedRouter::new(old_town_walk()));

    planner.plan_and_save(&walk_itinerary(), &path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let gpx = gpx::read(std::io::BufReader::new(file)).unwrap();
    let points = &gpx.tracks[0].segments[0].points;
    assert_eq!(points.len(), 4);
    assert_eq!(points[3].elevation, Some(215.0));
}

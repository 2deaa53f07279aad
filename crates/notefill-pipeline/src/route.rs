//! Stop ordering for the pub crawl workflow.
//!
//! Greedy nearest-neighbor over haversine distance, starting from home.
//! Not optimal, but a crawl of a dozen pubs does not warrant more.

use notefill_core::{FieldValue, Record};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named stop with coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Great-circle distance between two (lat, lon) points in kilometers.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = (b.0 - a.0).to_radians();
    let d_lon = (b.1 - a.1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.0.to_radians().cos() * b.0.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Index of the nearest candidate to `position`. Input order breaks ties.
fn nearest(position: (f64, f64), candidates: &[(f64, f64)]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, at) in candidates.iter().enumerate() {
        let dist = haversine_km(position, *at);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Order stops by repeatedly taking the nearest unvisited one, starting
/// from `start`.
pub fn nearest_neighbor_route(start: (f64, f64), stops: &[Waypoint]) -> Vec<Waypoint> {
    let mut remaining: Vec<Waypoint> = stops.to_vec();
    let mut route = Vec::with_capacity(remaining.len());
    let mut position = start;

    while !remaining.is_empty() {
        let coords: Vec<(f64, f64)> = remaining.iter().map(|s| (s.lat, s.lon)).collect();
        let next = remaining.remove(nearest(position, &coords));
        position = (next.lat, next.lon);
        route.push(next);
    }
    route
}

fn coords(record: &Record) -> Option<(f64, f64)> {
    let lat = match record.field("Latitude") {
        Some(FieldValue::Number(Some(v))) => *v,
        _ => return None,
    };
    let lon = match record.field("Longitude") {
        Some(FieldValue::Number(Some(v))) => *v,
        _ => return None,
    };
    Some((lat, lon))
}

/// Arrange pub records in crawl order from home.
///
/// Records without `Latitude`/`Longitude` fields keep their relative order
/// and go to the end of the crawl.
pub fn crawl_order(home: (f64, f64), records: Vec<Record>) -> Vec<Record> {
    let mut located = Vec::new();
    let mut unlocated = Vec::new();
    for record in records {
        match coords(&record) {
            Some(at) => located.push((at, record)),
            None => unlocated.push(record),
        }
    }

    let mut ordered = Vec::with_capacity(located.len() + unlocated.len());
    let mut position = home;
    while !located.is_empty() {
        let coords: Vec<(f64, f64)> = located.iter().map(|(at, _)| *at).collect();
        let (at, record) = located.remove(nearest(position, &coords));
        position = at;
        ordered.push(record);
    }
    ordered.extend(unlocated);
    ordered
}

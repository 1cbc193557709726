//! Great-circle distance and proximity filtering over cafe locations.
//!
//! Pure functions only: no I/O, no shared state. Filtering returns new
//! records carrying the computed distance; the input collection is never
//! mutated.

use cafescout_core::{CafeLocation, GeoPoint};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine).
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Returns the locations within `radius_km` of `origin`, annotated with
/// their distance and ordered nearest-first.
///
/// A location exactly on the boundary is kept (`distance <= radius_km`).
/// The sort is stable, so equal distances keep their input order. Distances
/// on the returned records are recomputed from the coordinates, which makes
/// re-applying the filter with the same origin and radius a no-op.
#[must_use]
pub fn within_radius(
    origin: GeoPoint,
    locations: &[CafeLocation],
    radius_km: f64,
) -> Vec<CafeLocation> {
    let mut filtered: Vec<CafeLocation> = locations
        .iter()
        .filter_map(|location| {
            let distance = haversine_km(
                origin,
                GeoPoint {
                    lat: location.lat,
                    lon: location.lon,
                },
            );
            (distance <= radius_km).then(|| CafeLocation {
                distance_km: Some(distance),
                ..location.clone()
            })
        })
        .collect();

    filtered.sort_by(|a, b| {
        let da = a.distance_km.unwrap_or(f64::INFINITY);
        let db = b.distance_km.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });

    filtered
}

//! Location records and coordinate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel address used when an element carries no usable address tags.
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// One coffee-shop location resolved from the spatial-data service.
///
/// Records always carry valid coordinates; elements without a resolvable
/// coordinate are dropped during normalization and never become a
/// `CafeLocation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeLocation {
    /// OSM element id. Opaque; only meaningful to the upstream service.
    pub id: i64,
    /// The brand query key that found this location.
    pub brand: String,
    /// Display name from the element's `name` tag, falling back to the brand.
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Human-readable address assembled from `addr:*` tags, or
    /// [`ADDRESS_NOT_AVAILABLE`].
    pub address: String,
    /// Kilometers from a reference point. Set only on records produced by
    /// the proximity filter; filtering returns new records rather than
    /// mutating this field in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// A reference coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Error returned when a `LAT,LON` string cannot be parsed into a [`GeoPoint`].
#[derive(Debug, Clone, Error)]
#[error("invalid coordinate pair '{input}': {reason}")]
pub struct ParseGeoPointError {
    input: String,
    reason: String,
}

impl std::str::FromStr for GeoPoint {
    type Err = ParseGeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason: String| ParseGeoPointError {
            input: s.to_owned(),
            reason,
        };

        let (lat_raw, lon_raw) = s
            .split_once(',')
            .ok_or_else(|| err("expected LAT,LON in decimal degrees".to_owned()))?;

        let lat: f64 = lat_raw
            .trim()
            .parse()
            .map_err(|_| err(format!("latitude '{}' is not a number", lat_raw.trim())))?;
        let lon: f64 = lon_raw
            .trim()
            .parse()
            .map_err(|_| err(format!("longitude '{}' is not a number", lon_raw.trim())))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(err(format!("latitude {lat} is outside [-90, 90]")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(err(format!("longitude {lon} is outside [-180, 180]")));
        }

        Ok(GeoPoint { lat, lon })
    }
}

/// The working set produced by one brand-selection submission.
///
/// Built fresh per round and replaced wholesale; nothing persists across
/// rounds and no round is merged into another.
#[derive(Debug, Clone)]
pub struct FetchRound {
    /// Aggregate records in brand-selection order, each brand's records in
    /// upstream order.
    pub locations: Vec<CafeLocation>,
    pub fetched_at: DateTime<Utc>,
    /// Brands whose fetch failed after exhausting retries. Each contributes
    /// zero records to `locations`.
    pub failed_brands: Vec<String>,
}

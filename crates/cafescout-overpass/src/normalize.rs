//! Normalization from raw Overpass elements to [`cafescout_core::CafeLocation`].

use cafescout_core::{CafeLocation, ADDRESS_NOT_AVAILABLE};

use crate::types::OverpassElement;

/// `addr:*` tags assembled into the display address, in output order.
const ADDRESS_TAGS: [&str; 4] = ["addr:housenumber", "addr:street", "addr:city", "addr:postcode"];

/// Converts raw elements into location records, preserving upstream order.
///
/// Elements without a resolvable coordinate are dropped with a debug
/// diagnostic; incomplete geometry is expected upstream noise, not an error.
pub(crate) fn normalize_elements(
    elements: Vec<OverpassElement>,
    brand: &str,
) -> Vec<CafeLocation> {
    elements
        .into_iter()
        .filter_map(|element| {
            let id = element.id;
            let location = normalize_element(element, brand);
            if location.is_none() {
                tracing::debug!(id, brand, "dropping element without coordinates");
            }
            location
        })
        .collect()
}

/// Converts one element, or `None` when no coordinate resolves.
///
/// The coordinate is the element's own `lat`/`lon` when present, else the
/// centroid supplied by `out center` for ways and relations.
fn normalize_element(element: OverpassElement, brand: &str) -> Option<CafeLocation> {
    let (lat, lon) = match (element.lat, element.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            let center = element.center?;
            (center.lat, center.lon)
        }
    };

    let tags = element.tags;
    let parts: Vec<&str> = ADDRESS_TAGS
        .iter()
        .filter_map(|key| tags.get(*key))
        .map(String::as_str)
        .collect();
    let address = if parts.is_empty() {
        ADDRESS_NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    };

    let name = tags
        .get("name")
        .cloned()
        .unwrap_or_else(|| brand.to_string());

    Some(CafeLocation {
        id: element.id,
        brand: brand.to_string(),
        name,
        lat,
        lon,
        address,
        distance_km: None,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

//! Rendering collaborators for fetch results.
//!
//! A text table for the terminal and a GeoJSON `FeatureCollection` for map
//! tooling. Renderers receive complete record sets and write everything in
//! one pass; they hold no state across rounds.

use std::io::Write;

use cafescout_core::{CafeLocation, GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Geojson,
}

/// Reference-point boundary emitted alongside a filtered result set, so map
/// tooling can draw the radius indicator around it.
pub(crate) struct Boundary {
    pub origin: GeoPoint,
    pub radius_km: f64,
}

/// Writes the record set to `out` in the requested format.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub(crate) fn render(
    out: &mut impl Write,
    locations: &[CafeLocation],
    format: OutputFormat,
    boundary: Option<&Boundary>,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Table => render_table(out, locations),
        OutputFormat::Geojson => render_geojson(out, locations, boundary),
    }
}

fn render_table(out: &mut impl Write, locations: &[CafeLocation]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<16} {:<28} {:<44} {:>10} {:>11} {:>7}",
        "BRAND", "NAME", "ADDRESS", "LAT", "LON", "KM"
    )?;
    for location in locations {
        let distance = location
            .distance_km
            .map_or_else(String::new, |d| format!("{d:.2}"));
        writeln!(
            out,
            "{:<16} {:<28} {:<44} {:>10.5} {:>11.5} {:>7}",
            location.brand, location.name, location.address, location.lat, location.lon, distance
        )?;
    }
    Ok(())
}

fn render_geojson(
    out: &mut impl Write,
    locations: &[CafeLocation],
    boundary: Option<&Boundary>,
) -> std::io::Result<()> {
    let mut features: Vec<serde_json::Value> = locations.iter().map(feature).collect();

    if let Some(boundary) = boundary {
        features.push(serde_json::json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [boundary.origin.lon, boundary.origin.lat],
            },
            "properties": {
                "role": "reference-point",
                "radius_km": boundary.radius_km,
            },
        }));
    }

    let collection = serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    });
    writeln!(out, "{collection:#}")
}

fn feature(location: &CafeLocation) -> serde_json::Value {
    let mut properties = serde_json::json!({
        "id": location.id,
        "brand": location.brand,
        "name": location.name,
        "address": location.address,
    });
    if let Some(distance) = location.distance_km {
        properties["distance_km"] = serde_json::json!(distance);
    }

    serde_json::json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            // GeoJSON positions are [lon, lat].
            "coordinates": [location.lon, location.lat],
        },
        "properties": properties,
    })
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;

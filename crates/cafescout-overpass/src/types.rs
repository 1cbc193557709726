//! Overpass API response types.
//!
//! All types model the JSON returned by the interpreter's `[out:json]`
//! output; only the fields the normalizer consumes are declared.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope of an Overpass JSON response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One raw feature returned by a query: a node, way, or relation.
///
/// Nodes carry `lat`/`lon` directly; ways and relations carry a `center`
/// point computed by `out center`. Either may be absent for degenerate
/// geometry, in which case the element is dropped during normalization.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<CenterPoint>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Representative coordinate supplied for non-point features.
#[derive(Debug, Deserialize)]
pub struct CenterPoint {
    pub lat: f64,
    pub lon: f64,
}

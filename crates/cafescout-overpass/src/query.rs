//! Overpass QL query construction.

/// The administrative area a brand query is scoped to.
#[derive(Debug, Clone)]
pub struct SearchArea {
    /// Area `name` tag value, e.g. `"Ontario"`.
    pub name: String,
    /// OSM `admin_level` of the area (4 for provinces/states).
    pub admin_level: u8,
}

/// Builds the Overpass QL query for all nodes, ways, and relations tagged
/// with the given `brand` inside the named administrative area. Non-point
/// features get a centroid via `out center`.
pub(crate) fn brand_area_query(brand: &str, area: &SearchArea, timeout_secs: u64) -> String {
    let brand = escape_ql(brand);
    let area_name = escape_ql(&area.name);
    let admin_level = area.admin_level;
    format!(
        "[out:json][timeout:{timeout_secs}];\n\
         area[\"name\"=\"{area_name}\"][\"admin_level\"={admin_level}]->.searchArea;\n\
         (\n\
           node[\"brand\"=\"{brand}\"](area.searchArea);\n\
           way[\"brand\"=\"{brand}\"](area.searchArea);\n\
           relation[\"brand\"=\"{brand}\"](area.searchArea);\n\
         );\n\
         out center;"
    )
}

/// Escapes a value for use inside a double-quoted Overpass QL string literal.
fn escape_ql(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

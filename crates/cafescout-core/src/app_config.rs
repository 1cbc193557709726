use std::path::PathBuf;

/// Application configuration, read from `CAFESCOUT_*` environment variables.
///
/// Every field has a default; an empty environment yields a working
/// configuration pointed at the public Overpass endpoint and the Ontario
/// search area.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overpass interpreter endpoint the queries are sent to.
    pub overpass_url: String,
    /// Name of the administrative area the brand queries are scoped to.
    pub search_area: String,
    /// OSM `admin_level` of the search area (4 for provinces/states).
    pub area_admin_level: u8,
    /// HTTP request timeout; also embedded as the Overpass `[timeout:]`.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional fetch attempts after the first failure.
    pub max_retries: u32,
    /// Fixed delay between fetch attempts.
    pub retry_delay_secs: u64,
    /// Default proximity-filter radius around a reference point.
    pub radius_km: f64,
    /// Brand fetches in flight at once; 1 means strictly sequential.
    pub max_concurrent_brands: usize,
    pub brands_path: PathBuf,
    pub log_level: String,
}

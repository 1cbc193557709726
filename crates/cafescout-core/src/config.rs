use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup, without
/// any `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u8>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("radius must be a positive number of kilometers, got {raw}"),
            });
        }
        Ok(value)
    };

    let overpass_url = or_default(
        "CAFESCOUT_OVERPASS_URL",
        "https://lz4.overpass-api.de/api/interpreter",
    );
    let search_area = or_default("CAFESCOUT_SEARCH_AREA", "Ontario");
    let area_admin_level = parse_u8("CAFESCOUT_AREA_ADMIN_LEVEL", "4")?;
    let request_timeout_secs = parse_u64("CAFESCOUT_REQUEST_TIMEOUT_SECS", "25")?;
    let user_agent = or_default(
        "CAFESCOUT_USER_AGENT",
        "cafescout/0.1 (coffee-location-search)",
    );
    let max_retries = parse_u32("CAFESCOUT_MAX_RETRIES", "3")?;
    let retry_delay_secs = parse_u64("CAFESCOUT_RETRY_DELAY_SECS", "2")?;
    let radius_km = parse_radius("CAFESCOUT_RADIUS_KM", "15")?;
    let max_concurrent_brands = parse_usize("CAFESCOUT_MAX_CONCURRENT_BRANDS", "1")?;
    let brands_path = PathBuf::from(or_default("CAFESCOUT_BRANDS_PATH", "./config/brands.yaml"));
    let log_level = or_default("CAFESCOUT_LOG_LEVEL", "info");

    Ok(AppConfig {
        overpass_url,
        search_area,
        area_admin_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_delay_secs,
        radius_km,
        max_concurrent_brands,
        brands_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

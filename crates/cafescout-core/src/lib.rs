//! Shared domain types and configuration for cafescout.
//!
//! Holds the location record and reference-point types consumed by the
//! Overpass client and the proximity filter, the brand catalog loaded from
//! `config/brands.yaml`, and application configuration read from the
//! environment.

mod app_config;
mod brands;
mod config;
mod location;

pub use app_config::AppConfig;
pub use brands::{load_brands, BrandConfig, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{
    CafeLocation, FetchRound, GeoPoint, ParseGeoPointError, ADDRESS_NOT_AVAILABLE,
};

use thiserror::Error;

/// Errors raised while loading application or brand-catalog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("invalid brands config: {0}")]
    Validation(String),
}

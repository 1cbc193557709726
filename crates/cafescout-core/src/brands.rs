use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A single brand entry from the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Display name, and the default OSM `brand` tag value.
    pub name: String,
    /// Overrides the OSM `brand` tag value when it differs from `name`.
    pub query_key: Option<String>,
    pub notes: Option<String>,
}

impl BrandConfig {
    /// Generate the CLI-safe slug used to select this brand.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// The value matched against the OSM `brand` tag for this entry.
    #[must_use]
    pub fn osm_brand(&self) -> &str {
        self.query_key.as_deref().unwrap_or(&self.name)
    }
}

/// The parsed brand catalog.
#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandConfig>,
}

impl BrandsFile {
    /// Look up a brand by its slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&BrandConfig> {
        self.brands.iter().find(|b| b.slug() == slug)
    }
}

/// Load and validate the brand catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        if let Some(key) = &brand.query_key {
            if key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has an empty query_key; omit the field instead",
                    brand.name
                )));
            }
        }

        let lower_name = brand.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        let slug = brand.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand slug: '{slug}' (from brand '{}')",
                brand.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;

//! `locate` command handler.
//!
//! Orchestrates one fetch round: resolves the selected brands against the
//! catalog, fetches each brand's locations through the Overpass client,
//! aggregates in selection order, and hands the result sets to the
//! renderers. A brand whose fetch fails after retries contributes no
//! records and is reported with a warning; the round itself carries on.

mod runner;

use cafescout_core::{AppConfig, BrandConfig, BrandsFile, GeoPoint};
use cafescout_overpass::{OverpassClient, SearchArea};

use crate::output::{self, Boundary, OutputFormat};

pub(crate) async fn run_locate(
    config: &AppConfig,
    selected: &[String],
    near: Option<GeoPoint>,
    radius_km: Option<f64>,
    format: OutputFormat,
    dry_run: bool,
) -> anyhow::Result<()> {
    let radius_km = radius_km.unwrap_or(config.radius_km);
    if !radius_km.is_finite() || radius_km <= 0.0 {
        anyhow::bail!("--radius-km must be a positive number of kilometers");
    }

    let catalog = cafescout_core::load_brands(&config.brands_path)?;
    let brands = resolve_brands(&catalog, selected)?;

    if dry_run {
        let names: Vec<&str> = brands.iter().map(|b| b.name.as_str()).collect();
        println!(
            "dry-run: would fetch {} brand(s) in {}: [{}]",
            brands.len(),
            config.search_area,
            names.join(", ")
        );
        return Ok(());
    }

    let client = build_overpass_client(config)?;
    let area = SearchArea {
        name: config.search_area.clone(),
        admin_level: config.area_admin_level,
    };

    let round =
        runner::run_fetch_round(&client, &area, &brands, config.max_concurrent_brands).await;

    for name in &round.failed_brands {
        println!("warning: failed to load {name} data from Overpass; it contributes no locations");
    }
    println!(
        "fetched {} locations across {} brand(s) at {}",
        round.locations.len(),
        brands.len(),
        round.fetched_at.to_rfc3339()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match near {
        None => output::render(&mut out, &round.locations, format, None)?,
        Some(origin) => {
            let filtered = cafescout_geo::within_radius(origin, &round.locations, radius_km);
            if filtered.is_empty() {
                println!(
                    "no locations found within {radius_km} km of {},{}",
                    origin.lat, origin.lon
                );
            }
            let boundary = Boundary { origin, radius_km };
            output::render(&mut out, &filtered, format, Some(&boundary))?;
        }
    }
    Ok(())
}

/// Resolves the selected slugs against the catalog, preserving selection
/// order. Selecting the same brand twice fetches it twice.
fn resolve_brands<'a>(
    catalog: &'a BrandsFile,
    selected: &[String],
) -> anyhow::Result<Vec<&'a BrandConfig>> {
    selected
        .iter()
        .map(|slug| {
            catalog.by_slug(slug).ok_or_else(|| {
                anyhow::anyhow!(
                    "brand '{slug}' is not in the catalog; run `cafescout brands` for known slugs"
                )
            })
        })
        .collect()
}

fn build_overpass_client(config: &AppConfig) -> anyhow::Result<OverpassClient> {
    Ok(OverpassClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_delay_secs,
        &config.overpass_url,
    )?)
}

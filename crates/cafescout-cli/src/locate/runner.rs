//! Order-preserving execution of one fetch round.

use chrono::Utc;
use futures::stream::{self, StreamExt};

use cafescout_core::{BrandConfig, CafeLocation, FetchRound};
use cafescout_overpass::{OverpassClient, OverpassError, SearchArea};

/// Outcome of fetching a single brand.
pub(super) struct BrandOutcome {
    /// Display name, used for notifications and diagnostics.
    pub name: String,
    pub result: Result<Vec<CafeLocation>, OverpassError>,
}

/// One unit of work for the round: the brand's display name and the value
/// matched against the OSM `brand` tag.
pub(super) struct BrandQuery {
    pub name: String,
    pub query_key: String,
}

/// Runs `fetch` once per query through a buffered stream.
///
/// `buffered` (unlike `buffer_unordered`) yields outcomes in input order,
/// so the aggregate keeps brand-selection order no matter how request
/// latencies interleave. `max_concurrent` of 1 reproduces strictly
/// sequential fetching; larger values overlap requests while each brand
/// keeps its own retry handling.
pub(super) async fn fetch_all<F, Fut>(
    queries: Vec<BrandQuery>,
    max_concurrent: usize,
    fetch: F,
) -> Vec<BrandOutcome>
where
    F: Fn(String) -> Fut,
    Fut: std::future::Future<Output = Result<Vec<CafeLocation>, OverpassError>>,
{
    stream::iter(queries)
        .map(|query| {
            let BrandQuery { name, query_key } = query;
            let fut = fetch(query_key);
            async move {
                BrandOutcome {
                    name,
                    result: fut.await,
                }
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

/// Folds per-brand outcomes into the round's working set.
///
/// Successful brands append their records in outcome order; failed brands
/// are recorded by name and contribute nothing.
pub(super) fn aggregate(outcomes: Vec<BrandOutcome>) -> FetchRound {
    let mut locations = Vec::new();
    let mut failed_brands = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(records) => {
                tracing::info!(
                    brand = %outcome.name,
                    count = records.len(),
                    "fetched brand locations"
                );
                locations.extend(records);
            }
            Err(err) => {
                tracing::error!(
                    brand = %outcome.name,
                    error = %err,
                    "brand fetch failed after retries"
                );
                failed_brands.push(outcome.name);
            }
        }
    }

    FetchRound {
        locations,
        fetched_at: Utc::now(),
        failed_brands,
    }
}

pub(super) async fn run_fetch_round(
    client: &OverpassClient,
    area: &SearchArea,
    brands: &[&BrandConfig],
    max_concurrent: usize,
) -> FetchRound {
    let queries: Vec<BrandQuery> = brands
        .iter()
        .map(|b| BrandQuery {
            name: b.name.clone(),
            query_key: b.osm_brand().to_owned(),
        })
        .collect();

    let outcomes = fetch_all(queries, max_concurrent, |key| async move {
        client.fetch_brand_locations(&key, area).await
    })
    .await;

    aggregate(outcomes)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;

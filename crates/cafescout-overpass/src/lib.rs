//! Overpass API client for brand location queries.
//!
//! Translates a brand name into [`cafescout_core::CafeLocation`] records by
//! building an Overpass QL query scoped to a named administrative area,
//! issuing a GET against the interpreter endpoint, and normalizing the
//! heterogeneous element list in the response. Transient failures (network
//! errors, non-2xx statuses) are retried with a fixed delay.

mod client;
mod error;
mod normalize;
mod query;
mod retry;
mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use query::SearchArea;
pub use types::{CenterPoint, OverpassElement, OverpassResponse};

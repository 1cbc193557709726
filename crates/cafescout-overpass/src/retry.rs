//! Fixed-delay retry for transient Overpass failures.
//!
//! The public Overpass instances shed load with 429/504 bursts that clear
//! within seconds, so attempts are spaced by a constant delay rather than an
//! exponential schedule. Non-transient errors (deserialization failures, a
//! bad endpoint URL) are propagated immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::OverpassError;

/// Returns `true` if `err` represents a transient condition worth another
/// attempt after the delay.
///
/// Retriable:
/// - [`OverpassError::Http`] — network-level failure (connection reset,
///   timeout, TLS).
/// - [`OverpassError::UnexpectedStatus`] — any non-2xx status; the public
///   interpreters answer 429 and 504 under load.
///
/// Not retriable (propagated immediately):
/// - [`OverpassError::Deserialize`] — the body does not parse; retrying
///   returns the same body.
/// - [`OverpassError::InvalidEndpoint`] — configuration error.
fn is_retriable(err: &OverpassError) -> bool {
    matches!(
        err,
        OverpassError::Http(_) | OverpassError::UnexpectedStatus { .. }
    )
}

/// Executes `operation` with up to `max_retries` additional attempts on
/// transient errors, sleeping a fixed `delay_secs` between attempts.
///
/// With `max_retries = 3` the operation is attempted at most 4 times. On
/// success the result is returned immediately; once retries are exhausted
/// the last error is returned. Each retry emits a `tracing` warning.
pub(crate) async fn retry_with_delay<T, F, Fut>(
    max_retries: u32,
    delay_secs: u64,
    mut operation: F,
) -> Result<T, OverpassError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, OverpassError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_secs,
                    error = %err,
                    "transient Overpass error — retrying after delay"
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
            }
        }
    }
}

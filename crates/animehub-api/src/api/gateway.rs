//! Rate-limited request gateway.
//!
//! Every outbound call to the upstream API goes through [`Gateway::fetch_json`],
//! which enforces a minimum wall-clock interval between consecutive
//! dispatches across all concurrent callers. The upstream allows roughly
//! one request per second for unauthenticated clients; exceeding it gets
//! the whole client IP throttled, so pacing has to be process-wide rather
//! than per call site.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

use super::error::ApiError;

/// Default minimum interval between dispatches (1 request/second).
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Pacing state: the time of the last dispatched request.
///
/// `None` until the first dispatch; monotonically non-decreasing after
/// that, across successful and failed dispatches alike.
#[derive(Debug)]
struct Pacing {
    last_dispatch: Option<Instant>,
}

/// Rate-limited request gateway.
///
/// Owns the single shared pacing timestamp. Callers never interact with
/// the pacing state directly; they call [`Gateway::fetch_json`] and are
/// suspended (cooperatively, without occupying a thread) until their
/// dispatch slot opens.
///
/// There is no ordering guarantee among callers racing for the next
/// slot: the mutex wakeup order decides the tie-break. Exactly one
/// caller occupies each interval-wide slot.
#[derive(Debug)]
pub struct Gateway {
    /// HTTP client shared by all requests.
    http: Client,
    /// Minimum wall-clock gap between consecutive dispatches.
    min_interval: Duration,
    /// Shared pacing state.
    pacing: Mutex<Pacing>,
}

impl Gateway {
    /// Creates a gateway over an existing HTTP client.
    pub fn new(http: Client, min_interval: Duration) -> Self {
        Self {
            http,
            min_interval,
            pacing: Mutex::new(Pacing { last_dispatch: None }),
        }
    }

    /// Fetches `locator` and decodes the response body as JSON.
    ///
    /// Waits for the next pacing slot first. The pacing timestamp is
    /// advanced at dispatch time, before the network call completes, and
    /// is not rolled back if the call fails: a failed call still
    /// consumed its slot.
    ///
    /// No retries, no backoff beyond the pacing wait, no timeout. A
    /// caller that stops awaiting the result does not cancel the
    /// in-flight request.
    pub async fn fetch_json<T: DeserializeOwned>(&self, locator: Url) -> Result<T, ApiError> {
        self.acquire_slot().await;

        debug!(url = %locator, "dispatching request");

        let response = self
            .http
            .get(locator.clone())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %locator, status = %status, "request failed");
            return Err(ApiError::RequestFailed { status });
        }

        response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                ApiError::Decode(err)
            } else {
                ApiError::Transport(err)
            }
        })
    }

    /// Waits out the remaining interval and claims the next dispatch slot.
    ///
    /// The mutex is held across the sleep: the elapsed-time check, the
    /// wait, and the timestamp update form one critical section. Without
    /// it, two callers could both read a stale timestamp and dispatch
    /// back to back.
    async fn acquire_slot(&self) {
        let mut pacing = self.pacing.lock().await;

        if let Some(last) = pacing.last_dispatch {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis(), "waiting for next dispatch slot");
                tokio::time::sleep(wait).await;
            }
        }

        pacing.last_dispatch = Some(Instant::now());
    }
}

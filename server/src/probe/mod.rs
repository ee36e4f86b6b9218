//! Status probing seam.
//!
//! The store only ever talks to [`StatusProber`]; the shipped implementation
//! is a randomized stand-in, a real HTTP prober would slot in behind the
//! same trait.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::registry::types::ServiceStatus;

/// Simulated probe latency window in milliseconds.
const PROBE_DELAY_MIN_MS: u64 = 500;
const PROBE_DELAY_MAX_MS: u64 = 1500;

#[async_trait]
pub trait StatusProber: Send + Sync {
    /// Determine the current status of the service behind `url`.
    /// An `Err` is a probe failure, not a verdict; callers map it to
    /// the `error` status themselves.
    async fn probe(&self, url: &str) -> Result<ServiceStatus>;
}

/// Randomized prober: waits 500-1500ms, then draws a uniform roll.
/// Roughly 10% offline, 20% error, 70% online.
#[derive(Debug, Clone)]
pub struct SimulatedProber;

impl SimulatedProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimulatedProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusProber for SimulatedProber {
    async fn probe(&self, url: &str) -> Result<ServiceStatus> {
        let delay_ms = rand::random_range(PROBE_DELAY_MIN_MS..PROBE_DELAY_MAX_MS);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let status = outcome_for(rand::random::<f64>());
        debug!("Probed {} in {}ms: {}", url, delay_ms, status);
        Ok(status)
    }
}

/// Maps a uniform roll in [0, 1) onto a status verdict.
fn outcome_for(roll: f64) -> ServiceStatus {
    if roll > 0.9 {
        ServiceStatus::Offline
    } else if roll > 0.7 {
        ServiceStatus::Error
    } else {
        ServiceStatus::Online
    }
}

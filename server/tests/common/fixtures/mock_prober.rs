//! Canned status probers for store and registry tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use servicewatch::probe::StatusProber;
use servicewatch::registry::types::ServiceStatus;

/// Prober that reports the same verdict for every URL, instantly.
pub struct FixedProber {
    status: ServiceStatus,
}

impl FixedProber {
    pub fn new(status: ServiceStatus) -> Self {
        Self { status }
    }
}

#[async_trait]
impl StatusProber for FixedProber {
    async fn probe(&self, _url: &str) -> Result<ServiceStatus> {
        Ok(self.status)
    }
}

/// Prober that replays a scripted sequence of verdicts across calls,
/// repeating the last entry once the script runs out.
pub struct ScriptedProber {
    script: Vec<ServiceStatus>,
    cursor: AtomicUsize,
}

impl ScriptedProber {
    pub fn new(script: Vec<ServiceStatus>) -> Self {
        assert!(!script.is_empty(), "script must have at least one verdict");
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of probes issued so far.
    pub fn calls(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusProber for ScriptedProber {
    async fn probe(&self, _url: &str) -> Result<ServiceStatus> {
        let call = self.cursor.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.script.len() - 1);
        Ok(self.script[index])
    }
}

/// Prober whose every probe fails.
pub struct FailingProber;

#[async_trait]
impl StatusProber for FailingProber {
    async fn probe(&self, url: &str) -> Result<ServiceStatus> {
        Err(anyhow!("probe unreachable: {}", url))
    }
}

//! # NameGen Health Prober
//!
//! File: cli/src/common/network/probe.rs
//!
//! ## Overview
//!
//! Decides whether a candidate address is a live NameGen backend. A probe is
//! `GET {address}/health` with the short probe timeout, and it only counts as
//! reachable when:
//! - the status is exactly `200`, and
//! - the body is a JSON object whose `status` field is the string `"healthy"`.
//!
//! The body check keeps captive portals and unrelated services on the same
//! port from being mistaken for the backend.
//!
//! ## Architecture
//!
//! - **`HealthProbe`**: the trait the discovery orchestrator and resolver
//!   depend on. `probe` returns a plain `bool` and never fails.
//! - **`HttpProbe`**: the real implementation over
//!   `common::network::http::request_json`. `check_health` keeps the reason
//!   for a negative verdict as a `Result` so it can be logged; `probe` folds it
//!   into `false`.
//!
use super::http::{self, JsonResponse};
use crate::core::error::{NameGenError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Path appended to an address to probe it.
pub const HEALTH_PATH: &str = "/health";
/// Value of the `status` field a healthy backend reports.
pub const HEALTHY_STATUS: &str = "healthy";

/// Reachability check for one address.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// `true` only if `address` answered its health check positively.
    async fn probe(&self, address: &str) -> bool;
}

/// Probes over HTTP with a fixed per-probe timeout.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Runs the health check, keeping the reason for failure.
    pub async fn check_health(&self, address: &str) -> Result<()> {
        let url = format!("{}{}", address, HEALTH_PATH);
        let response = http::request_json(&self.client, Method::GET, &url, None, self.timeout).await?;
        verify_health(&response)
    }
}

/// Applies the strict `200` + `{"status": "healthy"}` rule to a response.
fn verify_health(response: &JsonResponse) -> Result<()> {
    if response.status != 200 {
        return Err(NameGenError::Unhealthy(format!("HTTP {}", response.status)).into());
    }
    match response.body.get("status").and_then(Value::as_str) {
        Some(HEALTHY_STATUS) => Ok(()),
        Some(other) => Err(NameGenError::Unhealthy(format!("status is '{}'", other)).into()),
        None => Err(NameGenError::Unhealthy("no status field in body".to_string()).into()),
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn probe(&self, address: &str) -> bool {
        match self.check_health(address).await {
            Ok(()) => {
                debug!("{} is reachable", address);
                true
            }
            Err(e) => {
                debug!("{} is unreachable: {}", address, e);
                false
            }
        }
    }
}

//! # NameGen Discovery Orchestrator
//!
//! File: cli/src/common/network/discovery.rs
//!
//! ## Overview
//!
//! Finds a reachable backend without user configuration. One call to
//! `Discovery::run` is one discovery pass:
//!
//! 1. Read the saved preference. If it is set and probes reachable, return it
//!    straight away; no candidates are generated or probed.
//! 2. Otherwise detect the platform and generate its candidate list.
//! 3. Probe every candidate concurrently and wait for all of them.
//! 4. Take the first reachable candidate **in generator order** (not the
//!    first to answer), save it as the preference and return it.
//! 5. If nothing answered, leave the preference alone and return the static
//!    platform default.
//!
//! A pass cannot fail. Storage and platform lookups return `Result`; each
//! `Err` is logged here and read as "no value" / `Platform::Other`.
//!
//! ## Architecture
//!
//! `Discovery` owns its collaborators behind trait objects so tests can swap
//! in a scripted prober, an in-memory store and a fixed platform. It does not
//! hold the current address; the `Resolver` adopts whatever `run` returns.
//!
use super::candidates::{self, CandidateSettings};
use super::probe::HealthProbe;
use crate::common::storage::ServerPreference;
use crate::common::system::{Platform, PlatformDetector};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the address returned by a pass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    /// The saved preference was still reachable.
    Preference,
    /// A generated candidate answered.
    Candidate,
    /// Nothing answered; this is the static platform default.
    Fallback,
}

/// Result of one discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    pub address: String,
    pub source: DiscoverySource,
    pub platform: Platform,
}

/// # Discovery Orchestrator (`Discovery`)
///
/// Combines the saved preference, the candidate generator and the health
/// prober into one discovery pass (`run`). Holds no address state of its
/// own; callers adopt what `run` returns.
#[derive(Clone)]
pub struct Discovery {
    prober: Arc<dyn HealthProbe>,
    preference: ServerPreference,
    platform: Arc<dyn PlatformDetector>,
    settings: CandidateSettings,
}

impl Discovery {
    /// Creates an orchestrator over the given collaborators.
    ///
    /// ## Arguments
    ///
    /// * `prober` - Health check used for the preference and every candidate.
    /// * `preference` - Where the winning address is saved.
    /// * `platform` - Asked once per pass; an `Err` counts as `Platform::Other`.
    /// * `settings` - Port and LAN subnets for candidate generation.
    pub fn new(
        prober: Arc<dyn HealthProbe>,
        preference: ServerPreference,
        platform: Arc<dyn PlatformDetector>,
        settings: CandidateSettings,
    ) -> Self {
        Self {
            prober,
            preference,
            platform,
            settings,
        }
    }

    /// The health prober, shared with the resolver's ensure and set checks.
    pub fn prober(&self) -> &dyn HealthProbe {
        self.prober.as_ref()
    }

    /// The saved-address store the resolver writes manual overrides to.
    pub fn preference(&self) -> &ServerPreference {
        &self.preference
    }

    /// Current platform; detection failure reads as `Platform::Other`.
    pub fn platform(&self) -> Platform {
        match self.platform.detect() {
            Ok(platform) => platform,
            Err(e) => {
                warn!("Platform detection failed, assuming 'other': {:#}", e);
                Platform::Other
            }
        }
    }

    /// Static default address for the current platform.
    pub fn static_default(&self) -> String {
        candidates::static_default(self.platform(), &self.settings)
    }

    /// Saved preference; a storage failure reads as absent.
    pub fn saved_address(&self) -> Option<String> {
        match self.preference.get() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not read saved server address: {:#}", e);
                None
            }
        }
    }

    /// # Run Discovery Pass (`run`)
    ///
    /// Runs one full discovery pass. Always returns a non-empty address.
    ///
    /// ## Workflow:
    /// 1. Saved preference reachable: return it with one probe.
    /// 2. Otherwise probe every platform candidate concurrently and wait for
    ///    all of them.
    /// 3. First reachable candidate in generator order: save and return it.
    /// 4. Nothing reachable: return the static default; the store is not
    ///    touched.
    pub async fn run(&self) -> DiscoveryOutcome {
        if let Some(saved) = self.saved_address() {
            if self.prober.probe(&saved).await {
                info!("Saved server address {} is reachable", saved);
                return DiscoveryOutcome {
                    address: saved,
                    source: DiscoverySource::Preference,
                    platform: self.platform(),
                };
            }
            info!("Saved server address {} is unreachable, rediscovering", saved);
        }

        let platform = self.platform();
        let candidates = candidates::generate(platform, &self.settings);
        info!(
            "Probing {} candidate address(es) for platform '{}'",
            candidates.len(),
            platform
        );

        match self.first_reachable(&candidates).await {
            Some(winner) => {
                if let Err(e) = self.preference.set(&winner) {
                    warn!("Could not save discovered server address {}: {:#}", winner, e);
                }
                info!("Discovered server at {}", winner);
                DiscoveryOutcome {
                    address: winner,
                    source: DiscoverySource::Candidate,
                    platform,
                }
            }
            None => {
                let fallback = candidates::static_default(platform, &self.settings);
                warn!(
                    "No candidate answered its health check; falling back to {}",
                    fallback
                );
                DiscoveryOutcome {
                    address: fallback,
                    source: DiscoverySource::Fallback,
                    platform,
                }
            }
        }
    }

    /// Probes all candidates concurrently and returns the first reachable one
    /// in the order given.
    async fn first_reachable(&self, candidates: &[String]) -> Option<String> {
        let probes = candidates.iter().map(|address| self.prober.probe(address));
        // join_all yields results in input order regardless of completion order.
        let verdicts = join_all(probes).await;
        let reachable = verdicts.iter().filter(|ok| **ok).count();
        debug!("{} of {} candidate(s) reachable", reachable, candidates.len());

        candidates
            .iter()
            .zip(verdicts)
            .find(|(_, reachable)| *reachable)
            .map(|(address, _)| address.clone())
    }
}

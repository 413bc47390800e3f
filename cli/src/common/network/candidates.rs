//! # NameGen Candidate Generator
//!
//! File: cli/src/common/network/candidates.rs
//!
//! ## Overview
//!
//! Produces the ordered list of addresses worth probing for a platform, and
//! the static default address used before discovery and when it finds
//! nothing. Order matters: discovery picks the first reachable candidate in
//! this order, so the most likely address for a platform comes first.
//!
//! | Platform  | Candidates (in order)                                         | Default            |
//! |-----------|---------------------------------------------------------------|--------------------|
//! | `android` | `10.0.2.2`, then `.1`–`.255` of each configured LAN subnet    | `10.0.2.2`         |
//! | `ios`     | `localhost`, `127.0.0.1`                                      | `localhost`        |
//! | `other`   | `127.0.0.1`, `localhost`                                      | `127.0.0.1`        |
//!
//! Everything here is pure: no I/O, and a fresh `Vec` on every call.
//!
use crate::common::system::Platform;

/// Host the Android emulator maps to the development machine's loopback.
pub const ANDROID_EMULATOR_HOST: &str = "10.0.2.2";
const LOCALHOST: &str = "localhost";
const LOOPBACK_IP: &str = "127.0.0.1";

/// Inputs to candidate generation that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSettings {
    pub port: u16,
    /// Two-octet prefixes (e.g. `192.168.1`) of the /24 subnets swept on android.
    pub lan_subnets: Vec<String>,
}

impl CandidateSettings {
    pub fn new(port: u16, lan_subnets: Vec<String>) -> Self {
        Self { port, lan_subnets }
    }

    fn address(&self, host: &str) -> String {
        format!("http://{}:{}", host, self.port)
    }
}

/// Ordered addresses to probe for `platform`.
pub fn generate(platform: Platform, settings: &CandidateSettings) -> Vec<String> {
    match platform {
        Platform::Android => {
            let mut candidates = Vec::with_capacity(1 + 255 * settings.lan_subnets.len());
            candidates.push(settings.address(ANDROID_EMULATOR_HOST));
            for subnet in &settings.lan_subnets {
                candidates.extend((1..=255u16).map(|host| settings.address(&format!("{}.{}", subnet, host))));
            }
            candidates
        }
        Platform::Ios => vec![settings.address(LOCALHOST), settings.address(LOOPBACK_IP)],
        Platform::Other => vec![settings.address(LOOPBACK_IP), settings.address(LOCALHOST)],
    }
}

/// Address used before the first discovery and when discovery finds nothing.
pub fn static_default(platform: Platform, settings: &CandidateSettings) -> String {
    match platform {
        Platform::Android => settings.address(ANDROID_EMULATOR_HOST),
        Platform::Ios => settings.address(LOCALHOST),
        Platform::Other => settings.address(LOOPBACK_IP),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CandidateSettings {
        CandidateSettings::new(5000, vec!["192.168.1".into(), "192.168.0".into()])
    }

    #[test]
    fn test_android_sweeps_emulator_then_both_subnets() {
        let candidates = generate(Platform::Android, &settings());
        assert_eq!(candidates.len(), 1 + 510);
        assert_eq!(candidates[0], "http://10.0.2.2:5000");
        assert_eq!(candidates[1], "http://192.168.1.1:5000");
        assert_eq!(candidates[255], "http://192.168.1.255:5000");
        assert_eq!(candidates[256], "http://192.168.0.1:5000");
        assert_eq!(candidates[510], "http://192.168.0.255:5000");
        assert!(!candidates.iter().any(|c| c.contains(".0:")));
    }

    #[test]
    fn test_ios_prefers_hostname() {
        assert_eq!(
            generate(Platform::Ios, &settings()),
            vec!["http://localhost:5000", "http://127.0.0.1:5000"]
        );
    }

    #[test]
    fn test_other_prefers_loopback_ip() {
        assert_eq!(
            generate(Platform::Other, &settings()),
            vec!["http://127.0.0.1:5000", "http://localhost:5000"]
        );
    }

    #[test]
    fn test_android_without_subnets_keeps_emulator() {
        let settings = CandidateSettings::new(8080, Vec::new());
        assert_eq!(generate(Platform::Android, &settings), vec!["http://10.0.2.2:8080"]);
    }

    #[test]
    fn test_static_defaults() {
        let s = settings();
        assert_eq!(static_default(Platform::Android, &s), "http://10.0.2.2:5000");
        assert_eq!(static_default(Platform::Ios, &s), "http://localhost:5000");
        assert_eq!(static_default(Platform::Other, &s), "http://127.0.0.1:5000");
    }
}

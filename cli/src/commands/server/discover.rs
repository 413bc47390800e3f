//! # Server Discover / Ensure Commands
//!
//! File: cli/src/commands/server/discover.rs
//!
//! `namegen server discover` and `namegen server ensure`. Neither can fail:
//! when nothing answers, the static platform default is reported together
//! with a warning on stderr.
//!
use crate::commands::AppContext;
use crate::common::network::discovery::DiscoverySource;
use crate::core::error::Result;
use tracing::info;

/// # Handle Server Discover (`handle_discover`)
///
/// Runs `Resolver::discover_with_outcome` and prints the adopted address with
/// where it came from (saved preference, discovered candidate or fallback).
/// A fallback also prints a warning on stderr. Always returns `Ok(())`.
pub async fn handle_discover(ctx: &AppContext) -> Result<()> {
    info!("Handling server discover command");
    let outcome = ctx.resolver.discover_with_outcome().await;
    let how = match outcome.source {
        DiscoverySource::Preference => "saved address is reachable",
        DiscoverySource::Candidate => "discovered and saved",
        DiscoverySource::Fallback => "no server answered, using platform default",
    };
    if outcome.source == DiscoverySource::Fallback {
        eprintln!(
            "Warning: no NameGen server answered on platform '{}'.",
            outcome.platform
        );
    }
    println!("Server: {} ({})", outcome.address, how);
    Ok(())
}

/// # Handle Server Ensure (`handle_ensure`)
///
/// Runs the startup path (`AppContext::connect`): restore the saved address,
/// keep it if it answers, otherwise discover. Prints the resulting address.
pub async fn handle_ensure(ctx: &AppContext) -> Result<()> {
    info!("Handling server ensure command");
    let address = ctx.connect().await;
    println!("Server: {}", address);
    Ok(())
}

//! # Server Set Command
//!
//! File: cli/src/commands/server/set.rs
//!
//! `namegen server set <url>` installs a manual server address. The address
//! is only saved when it passes the same health check discovery uses; an
//! unreachable address leaves the saved preference untouched and exits with
//! an error.
//!
use crate::commands::AppContext;
use crate::core::error::{NameGenError, Result};
use crate::core::resolver::normalize_address;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Server address, e.g. `http://192.168.1.20:5000`.
    pub url: String,
}

/// # Handle Server Set (`handle_set`)
///
/// Installs `args.url` as the server address.
///
/// ## Workflow:
/// 1. Normalizes the address (whitespace and trailing `/` removed).
/// 2. Rejects a blank address without touching the network.
/// 3. Hands it to `Resolver::set_server_url`, which health-checks it and
///    only then saves and adopts it.
///
/// ## Errors
///
/// * `NameGenError::InvalidAddress` if the address is blank.
/// * `NameGenError::Unhealthy` if it does not pass the health check; the
///   saved preference is left as it was.
pub async fn handle_set(ctx: &AppContext, args: SetArgs) -> Result<()> {
    info!("Handling server set command for {}", args.url);
    let address = normalize_address(&args.url);
    if address.is_empty() {
        anyhow::bail!(NameGenError::InvalidAddress(args.url));
    }
    if !ctx.resolver.set_server_url(&address).await {
        anyhow::bail!(NameGenError::Unhealthy(format!(
            "'{}' did not pass the health check; saved address unchanged",
            address
        )));
    }
    println!("Server address set to {}", ctx.resolver.api_base_url());
    Ok(())
}

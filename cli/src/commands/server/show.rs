//! # Server Show Command
//!
//! File: cli/src/commands/server/show.rs
//!
//! Prints the saved address and the platform default without any network I/O.
//!
use crate::commands::AppContext;
use crate::core::error::Result;

/// # Handle Server Show (`handle_show`)
///
/// Prints the saved address (or `(none)`), the static default for the
/// detected platform and the preference file path.
pub fn handle_show(ctx: &AppContext) -> Result<()> {
    let saved = ctx.resolver.get_custom_server_url();
    println!(
        "Saved server address:   {}",
        saved.as_deref().unwrap_or("(none)")
    );
    println!("Default server address: {}", ctx.resolver.default_server_url());
    println!("Preference file:        {}", ctx.config.storage_path().display());
    Ok(())
}

//! # Server Clear Command
//!
//! File: cli/src/commands/server/clear.rs
//!
use crate::commands::AppContext;
use crate::core::error::Result;
use tracing::info;

/// Forgets the saved address; the next discovery starts from the candidates.
pub async fn handle_clear(ctx: &AppContext) -> Result<()> {
    info!("Handling server clear command");
    ctx.resolver.clear_custom_server_url().await;
    println!(
        "Cleared saved server address; using {}",
        ctx.resolver.api_base_url()
    );
    Ok(())
}

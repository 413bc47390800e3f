//! # NameGen Server Address Commands
//!
//! File: cli/src/commands/server/mod.rs
//!
//! ## Overview
//!
//! `namegen server ...` exposes the resolver facade on the command line:
//!
//! ```bash
//! # Probe the saved address, then the platform candidates, and save the winner
//! namegen server discover
//!
//! # Keep the current address if it still answers, otherwise discover
//! namegen server ensure
//!
//! # Use a specific backend (only saved if it passes the health check)
//! namegen server set http://192.168.1.20:5000
//!
//! # Show the saved and default addresses
//! namegen server show
//!
//! # Forget the saved address
//! namegen server clear
//! ```
//!
use super::AppContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod clear;
mod discover;
mod set;
mod show;

/// # Server Arguments (`ServerArgs`)
///
/// Arguments of `namegen server`; holds the selected subcommand.
#[derive(Parser, Debug)]
pub struct ServerArgs {
    #[command(subcommand)]
    command: ServerCommand,
}

#[derive(Subcommand, Debug)]
enum ServerCommand {
    /// Runs a full discovery pass and saves the address it finds.
    Discover,
    /// Keeps the current address if reachable, otherwise discovers.
    Ensure,
    /// Sets the server address manually after a health check.
    Set(set::SetArgs),
    /// Shows the saved and default server addresses.
    Show,
    /// Forgets the saved server address.
    Clear,
}

/// # Handle Server Command (`handle_server`)
///
/// Dispatches `namegen server <subcommand>` to its handler. None of these
/// handlers run the startup check first; `discover` and `ensure` are the
/// startup check.
pub async fn handle_server(ctx: &AppContext, args: ServerArgs) -> Result<()> {
    match args.command {
        ServerCommand::Discover => discover::handle_discover(ctx).await?,
        ServerCommand::Ensure => discover::handle_ensure(ctx).await?,
        ServerCommand::Set(args) => set::handle_set(ctx, args).await?,
        ServerCommand::Show => show::handle_show(ctx)?,
        ServerCommand::Clear => clear::handle_clear(ctx).await?,
    }
    Ok(())
}

//! # NameGen Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `namegen` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and building the shared `AppContext`
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Find the backend and remember it
//! namegen server discover
//!
//! # Generate names with debug logging of the discovery pass
//! namegen -vv generate --description "a cheerful little girl born in spring"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and build the resolver and API client
//! 4. For backend commands, ensure the current server address is reachable
//! 5. Route to the command handler and report any error
//!
use clap::Parser;
use namegen::commands::{self, AppContext};
use namegen::core::config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "namegen",
    about = "NameGen client with automatic backend discovery",
    long_about = "Talks to a NameGen name-generation server, locating it automatically\n\
                  on the emulator host or the local network and remembering the result.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Path to a TOML configuration file.
    #[arg(long, env = "NAMEGEN_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Discovers, shows, sets or clears the backend server address.
    #[command(alias = "s")]
    Server(commands::server::ServerArgs),
    /// Checks the server's health endpoint.
    Health,
    /// Lists the styles, genders, ages and APIs the server offers.
    Options,
    /// Shows server statistics.
    Stats,
    /// Generates names from a description.
    #[command(alias = "g")]
    Generate(commands::names::GenerateArgs),
    /// Lists, adds or removes favorite names.
    #[command(alias = "f")]
    Favorites(commands::favorites::FavoritesArgs),
    /// Shows the generation history.
    History(commands::history::HistoryArgs),
}

impl Commands {
    /// Every command except `server` talks to the backend and goes through
    /// the startup check first.
    fn needs_backend(&self) -> bool {
        !matches!(self, Commands::Server(_))
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let ctx = AppContext::from_config(config)?;

    if cli.command.needs_backend() {
        let address = ctx.connect().await;
        tracing::info!("Using server {}", address);
    }

    match cli.command {
        Commands::Server(args) => commands::server::handle_server(&ctx, args).await,
        Commands::Health => commands::names::handle_health(&ctx).await,
        Commands::Options => commands::names::handle_options(&ctx).await,
        Commands::Stats => commands::names::handle_stats(&ctx).await,
        Commands::Generate(args) => commands::names::handle_generate(&ctx, args).await,
        Commands::Favorites(args) => commands::favorites::handle_favorites(&ctx, args).await,
        Commands::History(args) => commands::history::handle_history(&ctx, args).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

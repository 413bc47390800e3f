//! # NameGen Name Commands
//!
//! File: cli/src/commands/names.rs
//!
//! ## Overview
//!
//! Top-level commands that call the generation side of the backend:
//!
//! ```bash
//! namegen health
//! namegen options
//! namegen stats
//! namegen generate --description "a calm autumn baby" --count 3 --style chinese_traditional
//! ```
//!
//! The address they talk to was settled by `AppContext::connect()` in
//! `main.rs` before the handler runs.
//!
use super::AppContext;
use crate::common::api::types::GenerateNamesPayload;
use crate::core::error::{NameGenError, Result};
use clap::Parser;
use tracing::info;

pub const DEFAULT_COUNT: u32 = 5;
pub const DEFAULT_STYLE: &str = "chinese_modern";
pub const DEFAULT_GENDER: &str = "neutral";
pub const DEFAULT_AGE: &str = "adult";

/// # Generate Arguments (`GenerateArgs`)
///
/// Arguments of `namegen generate`. Defaults match the server's own defaults
/// for a request that omits the field.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Free-text description of the person to name.
    #[arg(short, long)]
    pub description: String,

    /// How many names to request.
    #[arg(short, long, default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..=20))]
    pub count: u32,

    /// Cultural style (see `namegen options`).
    #[arg(short, long, default_value = DEFAULT_STYLE)]
    pub style: String,

    #[arg(short, long, default_value = DEFAULT_GENDER)]
    pub gender: String,

    #[arg(short, long, default_value = DEFAULT_AGE)]
    pub age: String,

    /// Preferred generation backend on the server.
    #[arg(long = "api")]
    pub api: Option<String>,

    /// Ask the server to skip its result cache.
    #[arg(long)]
    pub no_cache: bool,
}

impl GenerateArgs {
    fn to_payload(&self) -> GenerateNamesPayload {
        GenerateNamesPayload {
            description: self.description.trim().to_string(),
            count: self.count,
            cultural_style: self.style.clone(),
            gender: self.gender.clone(),
            age: self.age.clone(),
            preferred_api: self.api.clone(),
            use_cache: self.no_cache.then_some(false),
        }
    }
}

/// Prints the current server address and its `/health` report.
pub async fn handle_health(ctx: &AppContext) -> Result<()> {
    info!("Handling health command");
    let health = ctx.api.fetch_health().await?;
    println!("Server:    {}", ctx.resolver.api_base_url());
    println!("Status:    {}", health.status);
    if !health.timestamp.is_empty() {
        println!("Timestamp: {}", health.timestamp);
    }
    if let Some(version) = health.version {
        println!("Version:   {}", version);
    }
    Ok(())
}

/// Prints the styles, genders, ages and APIs the server accepts.
pub async fn handle_options(ctx: &AppContext) -> Result<()> {
    info!("Handling options command");
    let response = ctx.api.fetch_options().await?;
    if !response.success {
        anyhow::bail!(server_failure("options", response.error));
    }
    let options = response.options;
    println!("Cultural styles: {}", options.cultural_styles.join(", "));
    println!("Genders:         {}", options.genders.join(", "));
    println!("Ages:            {}", options.ages.join(", "));
    println!("APIs:            {}", options.apis.join(", "));
    Ok(())
}

pub async fn handle_stats(ctx: &AppContext) -> Result<()> {
    info!("Handling stats command");
    let response = ctx.api.fetch_stats().await?;
    if !response.success {
        anyhow::bail!(server_failure("stats", response.error));
    }
    println!("{}", serde_json::to_string_pretty(&response.stats)?);
    Ok(())
}

/// # Handle Generate (`handle_generate`)
///
/// ## Workflow:
/// 1. Builds the `/generate` payload from the arguments; a blank description
///    is rejected before any request.
/// 2. Posts it to the current server.
/// 3. Prints one numbered line per name, then the generator that produced them.
///
/// ## Errors
///
/// Request failures as classified by `common::network::http`, or
/// `NameGenError::HttpStatus` when the server answers `success: false`.
pub async fn handle_generate(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let payload = args.to_payload();
    if payload.description.is_empty() {
        anyhow::bail!("Description must not be empty");
    }
    info!(
        "Generating {} name(s) in style '{}'",
        payload.count, payload.cultural_style
    );

    let response = ctx.api.generate_names(&payload).await?;
    if !response.success {
        anyhow::bail!(server_failure("generate", response.error));
    }
    if response.names.is_empty() {
        println!("The server returned no names.");
        return Ok(());
    }
    for (index, name) in response.names.iter().enumerate() {
        println!("{:>2}. {}  {}", index + 1, name.name, name.meaning);
    }
    if let Some(api_name) = response.api_name {
        match response.model {
            Some(model) => println!("Generated by {} ({})", api_name, model),
            None => println!("Generated by {}", api_name),
        }
    }
    Ok(())
}

fn server_failure(endpoint: &str, error: Option<String>) -> NameGenError {
    NameGenError::HttpStatus {
        status: 200,
        message: format!(
            "{} failed: {}",
            endpoint,
            error.unwrap_or_else(|| "server reported failure".to_string())
        ),
    }
}

//! # NameGen Favorites Commands
//!
//! File: cli/src/commands/favorites.rs
//!
//! ```bash
//! namegen favorites list
//! namegen favorites add "Lin Qingyu" --meaning "clear like jade" --style chinese_modern
//! namegen favorites rm 3f2a 9b1c
//! ```
//!
use super::AppContext;
use crate::common::api::types::FavoriteItem;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    command: FavoritesCommand,
}

#[derive(Subcommand, Debug)]
enum FavoritesCommand {
    /// Lists saved favorites.
    List,
    /// Saves a name as a favorite.
    Add(AddArgs),
    /// Removes favorites by id.
    Rm(RmArgs),
}

#[derive(Parser, Debug)]
struct AddArgs {
    name: String,

    #[arg(short, long, default_value = "")]
    meaning: String,

    #[arg(short, long)]
    style: Option<String>,

    #[arg(short, long)]
    gender: Option<String>,

    /// Which generator produced the name.
    #[arg(long)]
    source: Option<String>,

    /// Reuse an existing id; the server assigns one when omitted.
    #[arg(long, default_value = "")]
    id: String,
}

impl AddArgs {
    fn into_item(self) -> FavoriteItem {
        FavoriteItem {
            id: self.id,
            name: self.name,
            meaning: self.meaning,
            style: self.style,
            gender: self.gender,
            source: self.source,
            time: None,
        }
    }
}

#[derive(Parser, Debug)]
struct RmArgs {
    #[arg(required = true)]
    ids: Vec<String>,
}

/// # Handle Favorites (`handle_favorites`)
///
/// Lists, adds or removes favorites on the current server and prints the
/// result. Errors from the request layer are returned unchanged.
pub async fn handle_favorites(ctx: &AppContext, args: FavoritesArgs) -> Result<()> {
    match args.command {
        FavoritesCommand::List => {
            info!("Listing favorites");
            let response = ctx.api.get_favorites().await?;
            if response.items.is_empty() {
                println!("No favorites saved.");
            }
            for item in &response.items {
                println!("{:<12} {}  {}", item.id, item.name, item.meaning);
            }
        }
        FavoritesCommand::Add(add) => {
            let item = add.into_item();
            info!("Adding favorite '{}'", item.name);
            let response = ctx.api.add_favorite(&item).await?;
            println!("Saved '{}' with id {}", response.item.name, response.item.id);
        }
        FavoritesCommand::Rm(rm) => {
            info!("Removing {} favorite(s)", rm.ids.len());
            let response = ctx.api.delete_favorites(&rm.ids).await?;
            println!("Removed {} favorite(s)", response.deleted.len());
        }
    }
    Ok(())
}

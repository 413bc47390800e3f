//! # NameGen History Command
//!
//! File: cli/src/commands/history.rs
//!
//! `namegen history [--page N] [--page-size N] [--query TEXT]` pages through
//! the server's generation history.
//!
use super::AppContext;
use crate::common::api::types::HistoryQuery;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: Option<u32>,

    /// Only show entries whose description contains this text.
    #[arg(short, long)]
    query: Option<String>,
}

impl From<HistoryArgs> for HistoryQuery {
    fn from(args: HistoryArgs) -> Self {
        HistoryQuery {
            page: args.page,
            page_size: args.page_size,
            q: args.query,
        }
    }
}

/// # Handle History (`handle_history`)
///
/// Fetches one page of `/history/list` (page 1, size 10 unless given) and
/// prints each entry with its names, then the paging summary.
pub async fn handle_history(ctx: &AppContext, args: HistoryArgs) -> Result<()> {
    let query = HistoryQuery::from(args);
    info!("Fetching history with {:?}", query);
    let page = ctx.api.get_history_list(&query).await?;

    if page.items.is_empty() {
        println!("No history entries.");
        return Ok(());
    }
    for item in &page.items {
        println!("[{}] {} ({} names)", item.time, item.description, item.count);
        if !item.names.is_empty() {
            println!("    {}", item.names.join(", "));
        }
    }
    println!(
        "Page {} (size {}), {} entries total",
        page.page, page.page_size, page.total
    );
    Ok(())
}

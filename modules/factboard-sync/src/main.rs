use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use factboard_common::{CategorySelection, Config};
use factboard_sync::{FactBoard, SupabaseFactStore};
use supabase_client::SupabaseClient;

/// One-shot fetch-and-print against the live store. Pass a category name
/// (or "all", the default) as the first argument.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("factboard=info".parse()?))
        .init();

    let selection: CategorySelection = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => CategorySelection::All,
    };

    let config = Config::from_env();
    let client = SupabaseClient::new(config.supabase_url, config.supabase_anon_key);
    let store = Arc::new(SupabaseFactStore::new(client));
    let board = FactBoard::new(store);

    info!(selection = %selection, "Fetching facts");
    board.set_selection(selection).await?;

    for fact in board.facts() {
        let disputed = if fact.is_disputed() { " [DISPUTED]" } else { "" };
        println!(
            "[{}]{} {} ({})  +{} ~{} -{}",
            fact.category,
            disputed,
            fact.text,
            fact.source,
            fact.votes_interesting,
            fact.votes_mindblowing,
            fact.votes_false,
        );
    }
    println!("{} facts", board.fact_count());

    Ok(())
}

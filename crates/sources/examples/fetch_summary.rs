//! Example: Fetch the query document for a title
//!
//! Run with: cargo run --package sources --example fetch_summary -- "Heat"
//!
//! This example shows how to:
//! 1. Build the HTTP client and both providers
//! 2. Fetch each provider's fragment separately
//! 3. Build the final query document (with catalog fallback)

use data_loader::Catalog;
use sources::{
    build_http_client, ImdbProvider, SummaryAcquirer, WikipediaProvider, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_USER_AGENT,
};
use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,sources=debug")
        .init();

    let title = std::env::args().nth(1).unwrap_or_else(|| "Heat".to_string());
    println!("=== Summary Acquisition Example: {} ===\n", title);

    let path = Path::new("data/tmdb_5000_movies.csv");
    let catalog = if path.exists() {
        Catalog::load_from_file(path)?
    } else {
        println!("(no catalog at {:?}, fallback disabled)\n", path);
        Catalog::default()
    };

    let client = build_http_client(DEFAULT_USER_AGENT, DEFAULT_FETCH_TIMEOUT)?;
    let acquirer = SummaryAcquirer::new()
        .with_provider(ImdbProvider::new(client.clone()))
        .with_provider(WikipediaProvider::new(client));

    let start = Instant::now();
    let fragments = acquirer.fetch_fragments(&title).await;
    println!("Fetched {} fragments in {:?}", fragments.len(), start.elapsed());
    for (provider, text) in &fragments {
        println!("  [{}] {}", provider, text);
    }

    match acquirer.acquire(&title, &catalog).await {
        Some(query) => println!("\nQuery document ({}):\n{}", query.origin, query.text),
        None => println!("\nNo usable query text for {}", title),
    }

    Ok(())
}

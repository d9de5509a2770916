//! Search Example
//!
//! Indexes a few documents into an existing collection and searches them.
//! Reads `solrkit.json` when present, otherwise talks to localhost:8983.
//!
//! Run with: RUST_LOG=debug cargo run --example search_collection

use serde_json::json;
use solrkit_rs::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("solrkit=debug,solrkit_rs=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = ClientConfig::load("solrkit.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load solrkit.json, using defaults");
        ClientConfig::default()
    });
    let client = SolrClient::from_config(&config);
    tracing::info!("Using Solr at {}", config.base_url());

    // Index a few documents, committed immediately
    let index = client.index().in_collection("beers").prepare_bulk(
        vec![
            json!({"id": "1", "name": "Home Brewery Pale Ale", "abv": 5.2}),
            json!({"id": "2", "name": "Dark Forest Stout", "abv": 7.5}),
            json!({"id": "3", "name": "Citrus Wheat", "abv": 4.8}),
        ],
        ["obsolete-1"],
    );
    client.execute(&index).await?;
    println!("✅ Indexed 3 documents\n");

    // Search names, filtered on strength
    let search = client
        .search()
        .in_collection("beers")
        .query(LuceneQuery::new().term("home brewery").term("stout").in_field("name"))
        .filter(SearchFilter::new("abv").from(5).to(8))
        .facet_on_field("abv")
        .field("id")
        .field("name")
        .sort("abv", SortOrder::Desc)
        .limit(10);

    let response = client.execute(&search).await?;
    println!("🔍 Results:");
    if let Some(docs) = response["response"]["docs"].as_array() {
        for (i, doc) in docs.iter().enumerate() {
            println!("   {}. {} ({})", i + 1, doc["name"], doc["id"]);
        }
    }

    Ok(())
}

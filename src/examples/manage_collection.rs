//! Collection Management Example
//!
//! Uploads a configset, creates a collection from it, points an alias at the
//! collection and lists what exists. Pass the configset zip as first argument.
//!
//! Run with: cargo run --example manage_collection -- /path/to/configset.zip

use solrkit_rs::*;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let zip_file = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: manage_collection <configset.zip>"))?;

    let client = SolrClient::new("localhost", 8983).with_logger(Arc::new(TracingRequestLogger));

    let upload = client.configsets().prepare_upload("beers_config", &zip_file);
    client.execute(&upload).await?;
    println!("📦 Uploaded configset beers_config");

    let create = client
        .collections()
        .router_name(RouterName::CompositeId)
        .num_shards(2)
        .prepare_create("beers_v2", "beers_config");
    client.execute(&create).await?;
    println!("📚 Created collection beers_v2");

    let alias = client.aliases().prepare_create("beers", ["beers_v2"]);
    client.execute(&alias).await?;
    println!("🔗 Alias beers -> beers_v2");

    let aliases = client.execute(&client.aliases().prepare_list()).await?;
    println!("\nAliases: {}", aliases["aliases"]);

    let configsets = client.execute(&client.configsets().prepare_list()).await?;
    println!("Configsets: {}", configsets["configSets"]);

    // A server-side failure comes back as ClientError::Server
    let delete = client.configsets().prepare_delete("does_not_exist");
    match client.execute(&delete).await {
        Err(ClientError::Server { message, .. }) => println!("\nExpected failure: {}", message),
        Err(e) => return Err(e.into()),
        Ok(_) => println!("\nConfigset does_not_exist was deleted"),
    }

    Ok(())
}

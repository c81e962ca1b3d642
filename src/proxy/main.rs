//! Government data proxy server.
//!
//! Accepts classified road descriptions from the lookup client and answers
//! with (simulated) data.gov.in records. The API key is read once here and
//! handed to the router state.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use roadinfo::server::{create_router, AppState, PROXY_PATH};

#[derive(Parser, Debug)]
#[command(name = "proxy")]
#[command(about = "Government data proxy server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// data.gov.in API key
    #[arg(long, env = "DATA_GOV_IN_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("RoadInfo Government Data Proxy");

    let state = Arc::new(AppState::new(args.api_key));
    if state.api_key.is_none() {
        warn!("No data.gov.in API key configured; lookups will fail with 500");
    }

    let app = create_router(state);

    info!("Starting server on {} (endpoint {})", args.listen, PROXY_PATH);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}

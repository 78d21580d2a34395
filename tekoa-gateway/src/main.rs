//! tekoa-gateway: web front-end for the Tekoá Hub cultural collection
//!
//! Serves the site pages and the gallery/admin JSON API, backed by the
//! remote content store. Likes live in a gateway-local ledger; everything
//! else is read through (and written through, with validation) to the store.

use clap::Parser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tekoa_client::{ContentStoreClient, StoreConfig};
use tekoa_gateway::config::Args;
use tekoa_gateway::likes::{ledger_file, LikeLedger};
use tekoa_gateway::routes;
use tekoa_gateway::state::GatewayState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tekoa_gateway={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  Tekoá Hub - gateway");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!("Content store: {}", args.backend_base());
    info!("Data dir: {}", args.data_dir.display());
    info!("======================================");

    let likes = LikeLedger::load(ledger_file(&args.data_dir))?;

    let store = ContentStoreClient::new(StoreConfig {
        base_url: args.backend_base().to_string(),
        timeout_secs: args.request_timeout_secs,
    });

    let listen = args.listen;
    let state = Arc::new(RwLock::new(GatewayState::new(args, store, likes)));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("Gateway listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod cache;
mod config;
mod couplet;
mod error;
mod handlers;
mod llm;
mod nft;
mod options;
mod prompt;
mod state;
mod utils;

use cache::{spawn_sweep_task, LayeredCache, MemoryTier, SqliteTier};
use config::CONFIG;
use couplet::CoupletWriter;
use llm::{ChatCompletionClient, DashScopeClient, ImageGateway};
use nft::{NftService, RpcChainClient, ServiceSettings};
use options::OptionRegistry;
use state::AppState;
use utils::logging::init_logging;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guards = init_logging();
    info!("Starting couplet studio");

    if CONFIG.openai_api_key.trim().is_empty() {
        warn!("OPENAI_API_KEY is not set; /couplet/generate will fail");
    }
    if CONFIG.dashscope_api_key.trim().is_empty() {
        warn!("DASHSCOPE_API_KEY is not set; /couplet/image will fail");
    }
    if !CONFIG.mutations_enabled() {
        info!("TX_FROM_ADDRESS is not set; like/unlike/transfer are disabled");
    }

    let durable = SqliteTier::init(&CONFIG.cache_database_url, CONFIG.persistent_cache_ttl()).await?;
    let fast = MemoryTier::new(CONFIG.memory_cache_ttl(), CONFIG.memory_cache_capacity);
    let cache = LayeredCache::new(Arc::new(fast), Arc::new(durable));

    let chain = RpcChainClient::from_config(&CONFIG)?;
    let nfts = NftService::new(
        Arc::new(chain),
        cache.clone(),
        ServiceSettings::from_config(&CONFIG),
    );
    let writer = CoupletWriter::new(Arc::new(ChatCompletionClient::from_config(&CONFIG)));
    let images: Arc<dyn ImageGateway> = Arc::new(DashScopeClient::from_config(&CONFIG));
    let state = AppState::new(Arc::new(OptionRegistry::builtin()), writer, images, nfts);

    spawn_sweep_task(cache, Duration::from_secs(CONFIG.cache_sweep_interval_seconds));

    let listener = TcpListener::bind(&CONFIG.bind_address).await?;
    info!("Listening on {}", CONFIG.bind_address);
    axum::serve(listener, handlers::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

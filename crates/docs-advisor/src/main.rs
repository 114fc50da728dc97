mod cache;
mod classify;
mod config;
mod engine;
mod error;
mod gaps;
mod knowledge;
mod model;
mod quality;
mod retrieval;
mod segment;
mod server;
mod suggest;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cache::ReportCache;
use config::Config;
use engine::DocEngine;
use server::DocsAdvisorServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting docs-advisor MCP server");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(
        redis = config.redis_url.is_some(),
        analyze_threshold = config.analyze_threshold,
        "configuration loaded"
    );

    // 2. Connect to Redis (optional — graceful degradation if unavailable)
    let redis_cache = advisor_common::redis::RedisCache::new(config.redis_url.as_deref());
    if redis_cache.is_available().await {
        info!("redis connected");
    } else {
        info!("redis unavailable, running without cache");
    }
    let cache = Arc::new(ReportCache::new(redis_cache));

    // 3. Build the engine over the immutable catalog. The embedding model is
    //    constructed lazily on the first query, so startup never pays the
    //    model download unless retrieval is actually used.
    let catalog = knowledge::best_practices();
    info!(entries = catalog.len(), "best-practice catalog loaded");
    let engine = Arc::new(DocEngine::new(catalog, config.analyze_threshold));

    // 4. Serve on stdio
    let server = DocsAdvisorServer::new(engine, cache);
    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}

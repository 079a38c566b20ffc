mod analysis;
mod applications;
mod config;
mod db;
mod documents;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::orchestrator::AnalysisOrchestrator;
use crate::analysis::providers::{AnalysisProvider, ChatProvider};
use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::jooble::JoobleClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    // Analysis providers, highest precedence first
    let openai = ChatProvider::openai(config.openai_api_key.clone(), config.use_gpt4)?;
    let deepseek = ChatProvider::deepseek(config.deepseek_api_key.clone())?;
    for provider in [&openai, &deepseek] {
        match provider.model() {
            Some(model) => info!("Provider {} enabled (model: {model})", provider.id()),
            None => warn!("Provider {} disabled: no API key configured", provider.id()),
        }
    }
    let providers: Vec<Arc<dyn AnalysisProvider>> = vec![Arc::new(openai), Arc::new(deepseek)];
    let orchestrator = AnalysisOrchestrator::new(providers);
    info!(
        "Analysis providers available: {:?}",
        orchestrator.available_providers()
    );

    let jobs = JoobleClient::new(config.jooble_api_key.clone())?;
    if !jobs.is_configured() {
        warn!("JOOBLE_API_KEY not set; job search will be unavailable");
    }

    let state = AppState {
        db,
        orchestrator,
        jobs,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

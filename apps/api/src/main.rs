mod config;
mod errors;
mod llm_client;
mod models;
mod roster;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roster::CandidateRoster;
use crate::routes::build_router;
use crate::screening::scorer::LlmResumeScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentFind API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client with the configured per-call timeout
    let llm = LlmClient::with_timeout(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.scoring_timeout_secs),
    );
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize scorer and the in-memory candidate pool
    let scorer = Arc::new(LlmResumeScorer::new(llm.clone()));
    let roster = CandidateRoster::new();
    info!(
        scoring_concurrency = config.scoring_concurrency,
        "Candidate roster initialized"
    );

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        scorer,
        roster,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

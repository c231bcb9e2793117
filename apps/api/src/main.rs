mod advisor;
mod analysis;
mod config;
mod crew;
mod errors;
mod extraction;
mod llm_client;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_utils;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::build_resume_crew;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::store::ImprovedResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: a missing GEMINI_API_KEY stops startup here.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Advisor v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let crew = build_resume_crew()?;
    info!("Resume crew ready with {} tasks", crew.tasks().len());

    let store = ImprovedResumeStore::open(&config.output_dir).await?;
    info!("Writing improved resumes to {}", config.output_dir.display());

    let state = AppState {
        llm: Arc::new(llm),
        crew: Arc::new(crew),
        store,
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

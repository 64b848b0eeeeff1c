mod config;
mod db;
mod errors;
mod history;
mod models;
mod prediction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::history::store::PgPredictionStore;
use crate::history::PredictionStore;
use crate::prediction::model_repository;
use crate::prediction::service::PredictionService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    // A missing artifact means fallback scoring; a broken one stops startup.
    let model = model_repository::load(&config.model_path)
        .with_context(|| format!("Refusing to start with model at {}", config.model_path.display()))?;

    let db = create_pool(&config.database_url).await?;
    let store: Arc<dyn PredictionStore> = Arc::new(PgPredictionStore::new(db));

    let predictions = Arc::new(PredictionService::new(
        model,
        store.clone(),
        config.persist_timeout,
    ));
    info!("Inference mode: {}", predictions.mode().as_str());

    let state = AppState { predictions, store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

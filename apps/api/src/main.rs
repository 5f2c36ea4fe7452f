mod advice;
mod auth;
mod config;
mod db;
mod errors;
mod extractors;
mod interview;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
mod storage;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::ProviderAuth;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::resume::extract::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{PgStorage, ResumeArchive};
use crate::templates::PromptLoader;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 archive (optional)
    let archive = match &config.s3 {
        Some(s3) => {
            let archive = ResumeArchive::connect(s3).await;
            info!("S3 archive initialized (bucket: {})", s3.bucket);
            Some(archive)
        }
        None => {
            info!("S3_BUCKET not set, uploaded PDFs will not be archived");
            None
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(&config.llm)?;
    info!(
        "LLM client initialized (model: {}, max in-flight: {})",
        llm.model(),
        config.llm.max_concurrency
    );

    // Initialize auth provider client
    let auth_http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let auth = ProviderAuth::new(
        auth_http,
        config.auth_url.clone(),
        config.auth_api_key.clone(),
    );

    let prompts = PromptLoader::new(config.prompts_dir.clone());
    info!("Prompt templates read from {}", config.prompts_dir.display());

    // Build app state
    let state = AppState {
        storage: Arc::new(PgStorage::new(db)),
        auth: Arc::new(auth),
        llm: Arc::new(llm),
        extractor: Arc::new(PdfTextExtractor),
        prompts,
        archive,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

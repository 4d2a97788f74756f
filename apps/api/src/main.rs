use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use companion::completion::CompletionClient;
use companion::config::Config;
use companion::db::create_pool;
use companion::records::postgres::PgRecordSource;
use companion::routes::build_router;
use companion::state::AppState;

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

    info!("Starting Companion API v{}", env!("CARGO_PKG_VERSION"));

    // Record warehouse: one pool for the life of the process
    let db = create_pool(&config.database_url).await?;
    let records = Arc::new(PgRecordSource::new(db));

    // Completion service
    let completion = CompletionClient::new(
        config.completion_api_url.clone(),
        config.completion_api_token.clone(),
        config.completion_timeout,
    )?;
    info!("Completion client initialized (endpoint: {})", completion.endpoint());
    match config.max_prompt_chars {
        Some(limit) => info!("Prompt length guard: {limit} chars"),
        None => info!("Prompt length guard disabled"),
    }

    let state = AppState {
        records,
        completion,
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

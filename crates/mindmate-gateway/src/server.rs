//! HTTP server implementation using Axum.

use axum::response::Html;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use mindmate_core::config::MindmateConfig;
use mindmate_core::traits::Provider;
use mindmate_knowledge::{KnowledgeStore, Ranker, Retriever};
use mindmate_storage::MemStorage;

/// Shared state for the gateway server.
pub struct AppState {
    pub config: MindmateConfig,
    pub storage: MemStorage,
    pub retriever: Retriever,
    pub provider: Arc<dyn Provider>,
    pub start_time: std::time::Instant,
}

/// Serve the embedded chat page.
async fn chat_page() -> Html<&'static str> {
    Html(super::ui::chat_page_html())
}

/// Build the Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(chat_page))
        .route("/health", get(super::routes::health_check))
        .route("/api/chat/sessions", post(super::routes::create_session))
        .route("/api/chat/sessions", get(super::routes::list_sessions))
        .route(
            "/api/chat/sessions/{session_id}/messages",
            get(super::routes::list_messages),
        )
        .route(
            "/api/chat/sessions/{session_id}/messages",
            post(super::routes::send_message),
        )
        .route("/api/exercises", get(super::routes::list_exercises))
        .route("/api/exercises/{id}", get(super::routes::get_exercise))
        .route("/api/mood", post(super::routes::create_mood_entry))
        .route("/api/mood/{session_id}", get(super::routes::list_mood_entries))
        .route("/api/knowledge/search", get(super::routes::search_knowledge))
        .layer({
            let cors = CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(3600));

            // Restrict CORS origins in production via env var
            // Example: MINDMATE_CORS_ORIGINS=https://app.example.com
            if let Ok(origins_str) = std::env::var("MINDMATE_CORS_ORIGINS") {
                let origins: Vec<_> = origins_str
                    .split(',')
                    .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
                    .collect();
                cors.allow_origin(AllowOrigin::list(origins))
            } else {
                cors.allow_origin(Any)
            }
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn start(config: MindmateConfig) -> anyhow::Result<()> {
    let provider = mindmate_providers::create_provider(&config)?;
    match provider.health_check().await {
        Ok(true) => tracing::info!("Provider '{}' ready", provider.name()),
        _ => tracing::warn!(
            "Provider '{}' has no API key, chat replies will use the fallback message",
            provider.name()
        ),
    }

    let retriever = Retriever::new(
        KnowledgeStore::default(),
        Ranker::default(),
        config.chat.knowledge_top_k,
    );
    tracing::info!(
        "Knowledge base loaded: {} documents",
        retriever.store().len()
    );

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = Arc::new(AppState {
        config,
        storage: MemStorage::new(),
        retriever,
        provider: Arc::from(provider),
        start_time: std::time::Instant::now(),
    });

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

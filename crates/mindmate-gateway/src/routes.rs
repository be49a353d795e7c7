//! API route handlers for the gateway.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use mindmate_core::types::{NewChatSession, NewMessage, NewMoodEntry, Role};

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "mindmate-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Create a new chat session.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let title = body["title"].as_str().unwrap_or("").trim().to_string();
    if title.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid session data"})),
        );
    }

    match state.storage.create_session(NewChatSession { title }) {
        Ok(session) => (StatusCode::OK, Json(json!(session))),
        Err(e) => {
            tracing::error!("Session create failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to create session"})),
            )
        }
    }
}

/// List chat sessions.
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.storage.sessions() {
        Ok(sessions) => (StatusCode::OK, Json(json!(sessions))),
        Err(e) => {
            tracing::error!("Session list failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch sessions"})),
            )
        }
    }
}

/// Messages for a session, oldest first.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
) -> impl IntoResponse {
    match state.storage.messages_by_session(session_id) {
        Ok(messages) => (StatusCode::OK, Json(json!(messages))),
        Err(e) => {
            tracing::error!("Message list failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch messages"})),
            )
        }
    }
}

/// Send a message and get the companion's reply.
///
/// The flow is one sequential pass: persist the user message, collect the
/// trailing conversation history, retrieve knowledge context, call the
/// provider, persist the assistant message. A provider failure degrades
/// to the fixed fallback reply and the user still gets a 200.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let content = match body["content"].as_str() {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Message content is required"})),
            );
        }
    };

    let user_message = match state.storage.create_message(NewMessage {
        session_id,
        content: content.clone(),
        role: Role::User,
        sentiment_score: None,
    }) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("User message persist failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to process message"})),
            );
        }
    };

    // Trailing turns for prompt context, formatted as "role: content".
    let history: Vec<String> = state
        .storage
        .messages_by_session(session_id)
        .unwrap_or_default()
        .iter()
        .rev()
        .take(state.config.chat.history_turns)
        .rev()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect();

    let retrieval = state.retriever.retrieve(&content);

    let reply = match state
        .provider
        .chat(&content, &history, &retrieval.context)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("Provider call failed, using fallback reply: {e}");
            mindmate_providers::fallback_reply()
        }
    };

    let assistant_message = match state.storage.create_message(NewMessage {
        session_id,
        content: reply.message.clone(),
        role: Role::Assistant,
        sentiment_score: Some(reply.sentiment_score),
    }) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Assistant message persist failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to process message"})),
            );
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "userMessage": user_message,
            "assistantMessage": assistant_message,
            "sentimentScore": reply.sentiment_score,
            "suggestedExercises": reply.suggested_exercises,
            "concernLevel": reply.concern_level,
        })),
    )
}

/// List the exercise catalogue.
pub async fn list_exercises(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.storage.exercises() {
        Ok(exercises) => (StatusCode::OK, Json(json!(exercises))),
        Err(e) => {
            tracing::error!("Exercise list failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch exercises"})),
            )
        }
    }
}

/// Get one exercise by id.
pub async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.storage.exercise(id) {
        Ok(Some(exercise)) => (StatusCode::OK, Json(json!(exercise))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Exercise not found"})),
        ),
        Err(e) => {
            tracing::error!("Exercise fetch failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch exercise"})),
            )
        }
    }
}

/// Record a mood check-in.
pub async fn create_mood_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let entry: NewMoodEntry = match serde_json::from_value(body) {
        Ok(e) => e,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid mood entry data"})),
            );
        }
    };
    if !(1..=5).contains(&entry.mood) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid mood entry data"})),
        );
    }

    match state.storage.create_mood_entry(entry) {
        Ok(created) => (StatusCode::OK, Json(json!(created))),
        Err(e) => {
            tracing::error!("Mood entry persist failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to create mood entry"})),
            )
        }
    }
}

/// Mood entries for a session.
pub async fn list_mood_entries(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
) -> impl IntoResponse {
    match state.storage.mood_entries_by_session(session_id) {
        Ok(entries) => (StatusCode::OK, Json(json!(entries))),
        Err(e) => {
            tracing::error!("Mood entry list failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch mood entries"})),
            )
        }
    }
}

/// Search the knowledge base (coarse substring filter only).
pub async fn search_knowledge(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(q) = params.get("q").filter(|q| !q.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Search query is required"})),
        );
    };

    let results = state.retriever.store().search(q);
    (StatusCode::OK, Json(json!(results)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::response::Response;
    use mindmate_core::config::MindmateConfig;
    use mindmate_core::error::{MindmateError, Result as CoreResult};
    use mindmate_core::traits::Provider;
    use mindmate_core::types::{CompanionReply, ConcernLevel, SentimentRating};
    use mindmate_knowledge::{KnowledgeStore, Ranker, Retriever};
    use mindmate_storage::MemStorage;

    struct CannedProvider;

    #[async_trait]
    impl Provider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn chat(
            &self,
            _user_message: &str,
            _history: &[String],
            _knowledge_context: &[String],
        ) -> CoreResult<CompanionReply> {
            Ok(CompanionReply {
                message: "I hear you.".into(),
                sentiment_score: 2,
                suggested_exercises: vec!["4-7-8 Breathing".into()],
                concern_level: ConcernLevel::Medium,
            })
        }

        async fn analyze_sentiment(&self, _text: &str) -> CoreResult<SentimentRating> {
            Ok(SentimentRating { rating: 3, confidence: 0.5 })
        }

        async fn health_check(&self) -> CoreResult<bool> {
            Ok(true)
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl Provider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        async fn chat(
            &self,
            _user_message: &str,
            _history: &[String],
            _knowledge_context: &[String],
        ) -> CoreResult<CompanionReply> {
            Err(MindmateError::Provider("connection refused".into()))
        }

        async fn analyze_sentiment(&self, _text: &str) -> CoreResult<SentimentRating> {
            Err(MindmateError::Provider("connection refused".into()))
        }

        async fn health_check(&self) -> CoreResult<bool> {
            Ok(false)
        }
    }

    /// Records the prompt context size it was handed, then answers like
    /// [`CannedProvider`].
    #[derive(Default)]
    struct ContextCountingProvider {
        seen: std::sync::Mutex<Option<usize>>,
    }

    #[async_trait]
    impl Provider for ContextCountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        async fn chat(
            &self,
            _user_message: &str,
            _history: &[String],
            knowledge_context: &[String],
        ) -> CoreResult<CompanionReply> {
            *self.seen.lock().unwrap() = Some(knowledge_context.len());
            Ok(CompanionReply {
                message: "I hear you.".into(),
                sentiment_score: 3,
                suggested_exercises: Vec::new(),
                concern_level: ConcernLevel::Low,
            })
        }

        async fn analyze_sentiment(&self, _text: &str) -> CoreResult<SentimentRating> {
            Ok(SentimentRating { rating: 3, confidence: 0.5 })
        }

        async fn health_check(&self) -> CoreResult<bool> {
            Ok(true)
        }
    }

    fn state_with_config(provider: Arc<dyn Provider>, config: MindmateConfig) -> Arc<AppState> {
        let retriever = Retriever::new(
            KnowledgeStore::default(),
            Ranker::default(),
            config.chat.knowledge_top_k,
        );
        Arc::new(AppState {
            config,
            storage: MemStorage::new(),
            retriever,
            provider,
            start_time: std::time::Instant::now(),
        })
    }

    fn state_with(provider: Arc<dyn Provider>) -> Arc<AppState> {
        state_with_config(provider, MindmateConfig::default())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_session_rejects_missing_title() {
        let state = state_with(Arc::new(CannedProvider));
        let response = create_session(State(state), Json(json!({})))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_and_list_sessions() {
        let state = state_with(Arc::new(CannedProvider));
        let response = create_session(State(state.clone()), Json(json!({"title": "Check-in"})))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let session = body_json(response).await;
        assert_eq!(session["id"], 1);
        assert_eq!(session["title"], "Check-in");

        let response = list_sessions(State(state)).await.into_response();
        let sessions = body_json(response).await;
        assert_eq!(sessions.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_message_full_flow() {
        let state = state_with(Arc::new(CannedProvider));
        let response = send_message(
            State(state.clone()),
            Path(1),
            Json(json!({"content": "I feel anxious and can't sleep"})),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let reply = body_json(response).await;
        assert_eq!(reply["userMessage"]["role"], "user");
        assert_eq!(reply["assistantMessage"]["role"], "assistant");
        assert_eq!(reply["assistantMessage"]["content"], "I hear you.");
        assert_eq!(reply["assistantMessage"]["sentimentScore"], 2);
        assert_eq!(reply["sentimentScore"], 2);
        assert_eq!(reply["concernLevel"], "medium");
        assert_eq!(reply["suggestedExercises"][0], "4-7-8 Breathing");

        // Both turns persisted.
        let messages = state.storage.messages_by_session(1).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn test_knowledge_top_k_limits_prompt_context() {
        let provider = Arc::new(ContextCountingProvider::default());
        let mut config = MindmateConfig::default();
        config.chat.knowledge_top_k = 1;
        let state = state_with_config(provider.clone(), config);

        let response = send_message(
            State(state),
            Path(1),
            Json(json!({"content": "stress"})),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        // "stress" passes the coarse filter for several corpus documents;
        // the configured limit caps what reaches the provider.
        assert_eq!(*provider.seen.lock().unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_send_message_requires_content() {
        let state = state_with(Arc::new(CannedProvider));
        let response = send_message(State(state), Path(1), Json(json!({})))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_send_message_falls_back_when_provider_fails() {
        let state = state_with(Arc::new(BrokenProvider));
        let response = send_message(
            State(state),
            Path(1),
            Json(json!({"content": "hello there"})),
        )
        .await
        .into_response();
        // Provider failure still yields a 200 with the fallback reply.
        assert_eq!(response.status(), StatusCode::OK);
        let reply = body_json(response).await;
        assert_eq!(reply["concernLevel"], "low");
        assert_eq!(reply["sentimentScore"], 3);
        assert!(
            reply["assistantMessage"]["content"]
                .as_str()
                .unwrap()
                .contains("your feelings are valid")
        );
    }

    #[tokio::test]
    async fn test_exercises_endpoints() {
        let state = state_with(Arc::new(CannedProvider));
        let response = list_exercises(State(state.clone())).await.into_response();
        let exercises = body_json(response).await;
        assert_eq!(exercises.as_array().unwrap().len(), 3);

        let response = get_exercise(State(state.clone()), Path(1)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let response = get_exercise(State(state), Path(99)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mood_endpoints() {
        let state = state_with(Arc::new(CannedProvider));
        let response = create_mood_entry(
            State(state.clone()),
            Json(json!({"sessionId": 1, "mood": 4, "note": "better today"})),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = create_mood_entry(
            State(state.clone()),
            Json(json!({"sessionId": 1, "mood": 9})),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = list_mood_entries(State(state), Path(1)).await.into_response();
        let entries = body_json(response).await;
        assert_eq!(entries.as_array().unwrap().len(), 1);
        assert_eq!(entries[0]["mood"], 4);
    }

    #[tokio::test]
    async fn test_knowledge_search_requires_query() {
        let state = state_with(Arc::new(CannedProvider));
        let response = search_knowledge(State(state.clone()), Query(HashMap::new()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mut params = HashMap::new();
        params.insert("q".to_string(), "burnout".to_string());
        let response = search_knowledge(State(state), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let results = body_json(response).await;
        assert!(!results.as_array().unwrap().is_empty());
    }
}

//! Provider trait, the seam between the gateway and any LLM backend.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompanionReply, SentimentRating};

/// An LLM backend that can produce structured companion replies.
///
/// `chat` receives the raw user utterance, the trailing conversation
/// history (already formatted as `"role: content"` lines), and the
/// retrieved knowledge context (already formatted as `"title: content"`
/// blocks). It performs exactly one request/response round, no
/// streaming, no retries.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name, e.g. "openai".
    fn name(&self) -> &str;

    /// Generate an empathetic structured reply.
    async fn chat(
        &self,
        user_message: &str,
        history: &[String],
        knowledge_context: &[String],
    ) -> Result<CompanionReply>;

    /// Rate the sentiment of a standalone piece of text.
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentRating>;

    /// Cheap readiness probe.
    async fn health_check(&self) -> Result<bool>;
}

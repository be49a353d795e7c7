//! Domain types shared across MindMate crates.
//!
//! Wire format note: the browser client expects camelCase field names
//! (`sessionId`, `createdAt`, ...), so every serialized type carries
//! `rename_all = "camelCase"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One message within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub session_id: i64,
    pub content: String,
    pub role: Role,
    /// User emotional state 1 (very negative) to 5 (very positive),
    /// assessed by the provider. Only set on assistant messages.
    pub sentiment_score: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// A self-reported mood check-in on the 1-5 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: Option<i64>,
    pub session_id: i64,
    pub mood: i64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A guided self-help exercise. The catalogue is seeded at startup and
/// read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// "breathing" | "journaling" | "grounding"
    pub kind: String,
    pub duration_minutes: i64,
    /// Free-form step/prompt structure rendered by the client.
    pub instructions: serde_json::Value,
    pub icon: String,
}

/// One entry of the static knowledge corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeDocument {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Severity label attached to every provider reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Structured reply from the companion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionReply {
    pub message: String,
    /// Clamped to 1..=5 during parsing.
    pub sentiment_score: i64,
    #[serde(default)]
    pub suggested_exercises: Vec<String>,
    pub concern_level: ConcernLevel,
}

/// Standalone sentiment assessment of a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRating {
    /// 1 (very negative) to 5 (very positive).
    pub rating: i64,
    /// 0.0 to 1.0.
    pub confidence: f64,
}

/// Payload for creating a chat session.
#[derive(Debug, Clone, Deserialize)]
pub struct NewChatSession {
    pub title: String,
}

/// Payload for appending a message to a session.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub session_id: i64,
    pub content: String,
    pub role: Role,
    pub sentiment_score: Option<i64>,
}

/// Payload for recording a mood check-in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMoodEntry {
    pub session_id: i64,
    pub mood: i64,
    #[serde(default)]
    pub note: Option<String>,
}

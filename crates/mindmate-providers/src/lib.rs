//! # MindMate Providers
//!
//! LLM provider implementations. All OpenAI-compatible endpoints are
//! handled by a single `OpenAiCompatibleProvider`; the gateway talks to
//! the `Provider` trait and never to a concrete backend.

pub mod openai_compatible;
pub mod prompt;

use mindmate_core::config::MindmateConfig;
use mindmate_core::error::Result;
use mindmate_core::traits::Provider;
use mindmate_core::types::{CompanionReply, ConcernLevel};

/// Create the provider from configuration.
pub fn create_provider(config: &MindmateConfig) -> Result<Box<dyn Provider>> {
    Ok(Box::new(
        openai_compatible::OpenAiCompatibleProvider::from_config(config)?,
    ))
}

/// Fixed empathetic reply used when the provider call fails. The chat
/// flow degrades to this instead of surfacing an error to the user.
pub fn fallback_reply() -> CompanionReply {
    CompanionReply {
        message: "I'm here to listen and support you. Sometimes I have trouble finding \
                  the right words, but I want you to know that your feelings are valid \
                  and you're not alone."
            .to_string(),
        sentiment_score: 3,
        suggested_exercises: Vec::new(),
        concern_level: ConcernLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_reply_is_neutral() {
        let reply = fallback_reply();
        assert_eq!(reply.sentiment_score, 3);
        assert_eq!(reply.concern_level, ConcernLevel::Low);
        assert!(reply.suggested_exercises.is_empty());
        assert!(!reply.message.is_empty());
    }
}

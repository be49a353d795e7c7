//! OpenAI-compatible companion provider.
//!
//! A single struct that handles chat completions for any OpenAI-compatible
//! API. The endpoint, model, and temperature come from config; the API key
//! resolves config-first with an env-var fallback. Replies are requested
//! in JSON mode and parsed into a structured [`CompanionReply`].

use async_trait::async_trait;
use serde_json::{Value, json};

use mindmate_core::config::MindmateConfig;
use mindmate_core::error::{MindmateError, Result};
use mindmate_core::traits::Provider;
use mindmate_core::types::{CompanionReply, ConcernLevel, SentimentRating};

use crate::prompt::build_system_prompt;

/// Default reply text when the model returns an empty message field.
const EMPTY_MESSAGE_DEFAULT: &str = "I'm here to listen and support you. How are you feeling?";

pub struct OpenAiCompatibleProvider {
    name: String,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    identity: mindmate_core::config::IdentityConfig,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    /// Create from configuration.
    ///
    /// API key resolution: `config.api_key` > `OPENAI_API_KEY` env > empty.
    pub fn from_config(config: &MindmateConfig) -> Result<Self> {
        let api_key = if !config.api_key.is_empty() {
            config.api_key.clone()
        } else {
            std::env::var("OPENAI_API_KEY").unwrap_or_default()
        };

        Ok(Self {
            name: "openai".to_string(),
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.default_model.clone(),
            temperature: config.default_temperature,
            max_tokens: config.chat.max_tokens,
            identity: config.identity.clone(),
            client: reqwest::Client::new(),
        })
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            req
        } else {
            req.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }

    async fn completion(&self, body: Value) -> Result<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);
        let req = self.apply_auth(req);

        let resp = req.send().await.map_err(|e| {
            MindmateError::Http(format!("{} connection failed ({}): {}", self.name, url, e))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(MindmateError::Provider(format!(
                "{} API error {}: {}",
                self.name, status, text
            )));
        }

        resp.json()
            .await
            .map_err(|e| MindmateError::Http(e.to_string()))
    }

    /// Pull the first choice's message content out of a completion
    /// response and parse it as JSON.
    fn first_choice_json(response: &Value) -> Result<Value> {
        let content = response["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| MindmateError::Provider("No choices in response".into()))?;
        serde_json::from_str(content)
            .map_err(|e| MindmateError::Provider(format!("Malformed model reply: {e}")))
    }
}

/// Parse the model's structured reply, tolerating missing fields.
/// Sentiment clamps to 1..=5, concern level defaults to low.
pub fn parse_companion_reply(value: &Value) -> CompanionReply {
    let message = value["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .unwrap_or(EMPTY_MESSAGE_DEFAULT)
        .to_string();

    let sentiment_score = value["sentimentScore"].as_i64().unwrap_or(3).clamp(1, 5);

    let suggested_exercises = value["suggestedExercises"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    let concern_level = match value["concernLevel"].as_str() {
        Some("high") => ConcernLevel::High,
        Some("medium") => ConcernLevel::Medium,
        _ => ConcernLevel::Low,
    };

    CompanionReply {
        message,
        sentiment_score,
        suggested_exercises,
        concern_level,
    }
}

#[async_trait]
impl Provider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn chat(
        &self,
        user_message: &str,
        history: &[String],
        knowledge_context: &[String],
    ) -> Result<CompanionReply> {
        if self.api_key.is_empty() {
            return Err(MindmateError::ApiKeyMissing(self.name.clone()));
        }

        let system_prompt = build_system_prompt(&self.identity, knowledge_context, history);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_message }
            ],
            "response_format": { "type": "json_object" },
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let response = self.completion(body).await?;
        let reply = parse_companion_reply(&Self::first_choice_json(&response)?);
        tracing::debug!(
            sentiment = reply.sentiment_score,
            concern = ?reply.concern_level,
            "companion reply generated"
        );
        Ok(reply)
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentRating> {
        if self.api_key.is_empty() {
            return Err(MindmateError::ApiKeyMissing(self.name.clone()));
        }

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a sentiment analysis expert. Analyze the sentiment of the text and provide a rating from 1 (very negative) to 5 (very positive) and a confidence score between 0 and 1. Respond with JSON in this format: { \"rating\": number, \"confidence\": number }"
                },
                { "role": "user", "content": text }
            ],
            "response_format": { "type": "json_object" },
        });

        let response = self.completion(body).await?;
        let value = Self::first_choice_json(&response)?;
        Ok(SentimentRating {
            rating: value["rating"]
                .as_f64()
                .map(|r| r.round() as i64)
                .unwrap_or(3)
                .clamp(1, 5),
            confidence: value["confidence"].as_f64().unwrap_or(0.5).clamp(0.0, 1.0),
        })
    }

    async fn health_check(&self) -> Result<bool> {
        // Cloud provider: readiness is having credentials.
        Ok(!self.api_key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reply() {
        let value = json!({
            "message": "That sounds really hard.",
            "sentimentScore": 2,
            "suggestedExercises": ["4-7-8 Breathing"],
            "concernLevel": "medium"
        });
        let reply = parse_companion_reply(&value);
        assert_eq!(reply.message, "That sounds really hard.");
        assert_eq!(reply.sentiment_score, 2);
        assert_eq!(reply.suggested_exercises, vec!["4-7-8 Breathing"]);
        assert_eq!(reply.concern_level, ConcernLevel::Medium);
    }

    #[test]
    fn test_parse_missing_fields_uses_defaults() {
        let reply = parse_companion_reply(&json!({}));
        assert_eq!(reply.message, EMPTY_MESSAGE_DEFAULT);
        assert_eq!(reply.sentiment_score, 3);
        assert!(reply.suggested_exercises.is_empty());
        assert_eq!(reply.concern_level, ConcernLevel::Low);
    }

    #[test]
    fn test_parse_clamps_sentiment() {
        let low = parse_companion_reply(&json!({ "sentimentScore": -4 }));
        let high = parse_companion_reply(&json!({ "sentimentScore": 99 }));
        assert_eq!(low.sentiment_score, 1);
        assert_eq!(high.sentiment_score, 5);
    }

    #[test]
    fn test_parse_unknown_concern_level_is_low() {
        let reply = parse_companion_reply(&json!({ "concernLevel": "critical" }));
        assert_eq!(reply.concern_level, ConcernLevel::Low);
    }
}

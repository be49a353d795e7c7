//! MindMate configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindmateConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

fn default_api_key() -> String { String::new() }
fn default_model() -> String { "gpt-4o".into() }
fn default_temperature() -> f32 { 0.7 }
fn default_api_base_url() -> String { "https://api.openai.com/v1".into() }

impl Default for MindmateConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            api_base_url: default_api_base_url(),
            gateway: GatewayConfig::default(),
            identity: IdentityConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl MindmateConfig {
    /// Load config from the default path (~/.mindmate/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::MindmateError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::MindmateError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::MindmateError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the MindMate home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mindmate")
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 { 3000 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Companion identity: name and persona wired into the system prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,
    #[serde(default = "default_persona")]
    pub persona: String,
}

fn default_identity_name() -> String { "MindMate".into() }
fn default_persona() -> String { "an empathetic AI mental health companion".into() }

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: default_identity_name(),
            persona: default_persona(),
        }
    }
}

/// Chat flow tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Trailing conversation turns passed to the provider.
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
    /// Knowledge documents injected into the prompt context.
    #[serde(default = "default_knowledge_top_k")]
    pub knowledge_top_k: usize,
    /// Completion token cap per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_history_turns() -> usize { 10 }
fn default_knowledge_top_k() -> usize { 3 }
fn default_max_tokens() -> u32 { 500 }

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_turns: default_history_turns(),
            knowledge_top_k: default_knowledge_top_k(),
            max_tokens: default_max_tokens(),
        }
    }
}

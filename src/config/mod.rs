// src/config/mod.rs
// Layered service configuration: CLI/env > config file > defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::llm::openai::DEFAULT_BASE_URL;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Value shipped in sample `.env` files; never a real credential
const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// One layer of optional settings (CLI/env or the TOML file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConfigLayer {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Chat model identifier
    pub openai_model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    pub openai_base_url: Option<String>,

    /// Bind host
    pub host: Option<String>,

    /// Bind port
    pub port: Option<u16>,
}

impl ConfigLayer {
    /// Load a TOML layer. A missing or unreadable file yields an empty layer.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(layer) => layer,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Fill the gaps in `self` from `lower`
    pub fn or(self, lower: ConfigLayer) -> Self {
        Self {
            openai_api_key: self.openai_api_key.or(lower.openai_api_key),
            openai_model: self.openai_model.or(lower.openai_model),
            openai_base_url: self.openai_base_url.or(lower.openai_base_url),
            host: self.host.or(lower.host),
            port: self.port.or(lower.port),
        }
    }

    /// Apply defaults. Empty or placeholder API keys count as absent.
    pub fn finish(self) -> ServiceConfig {
        let openai_api_key = self
            .openai_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        ServiceConfig {
            openai_api_key,
            openai_model: non_empty(self.openai_model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: non_empty(self.openai_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: non_empty(self.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolved configuration, captured once at startup
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ConfigLayer::default().finish()
    }
}

impl ServiceConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// API key safe for logs: first five characters, then a fixed mask
    pub fn masked_api_key(&self) -> String {
        match &self.openai_api_key {
            Some(key) => {
                let prefix: String = key.chars().take(5).collect();
                format!("{}...{}", prefix, "*".repeat(10))
            }
            None => "none".to_string(),
        }
    }
}

/// Default config file path (~/.illusion-note/config.toml)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".illusion-note")
        .join("config.toml")
}

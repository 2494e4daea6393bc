// src/llm/openai.rs
// OpenAI chat completions provider

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Instant;
use tracing::debug;

use super::{ChatMessage, LlmProvider, ProviderMetadata, ProviderResponse, SamplingOptions};
use crate::error::{LlmError, LlmResult};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiChatProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiChatProvider {
    /// `api_key = None` yields a provider that refuses every call with
    /// [`LlmError::NotConfigured`] without touching the network.
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiChatProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        system: String,
        options: SamplingOptions,
    ) -> LlmResult<ProviderResponse> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let start = Instant::now();

        let mut api_messages = Vec::with_capacity(messages.len() + 1);
        if !system.is_empty() {
            api_messages.push(json!({
                "role": "system",
                "content": system
            }));
        }
        for msg in messages {
            api_messages.push(json!({
                "role": msg.role,
                "content": msg.content
            }));
        }

        let body = json!({
            "model": self.model,
            "messages": api_messages,
            "temperature": options.temperature,
            "max_tokens": options.max_tokens,
        });

        debug!("OpenAI request: model={}, messages={}", self.model, api_messages.len());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(LlmError::Api { status, body });
        }

        let raw_response = response
            .json::<Value>()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        let latency_ms = start.elapsed().as_millis() as i64;

        let content = raw_response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| LlmError::MalformedResponse("응답 내용이 없습니다".to_string()))?
            .trim()
            .to_string();

        // Usage is optional on OpenAI-compatible servers
        let usage = &raw_response["usage"];
        let metadata = ProviderMetadata {
            model_version: raw_response["model"]
                .as_str()
                .unwrap_or(self.model.as_str())
                .to_string(),
            input_tokens: usage["prompt_tokens"].as_i64(),
            output_tokens: usage["completion_tokens"].as_i64(),
            total_tokens: usage["total_tokens"].as_i64(),
            latency_ms,
            finish_reason: raw_response["choices"][0]["finish_reason"]
                .as_str()
                .map(|s| s.to_string()),
        };

        Ok(ProviderResponse { content, metadata })
    }
}

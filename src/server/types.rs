//! Request/response bodies for the HTTP API

use serde::{Deserialize, Serialize};

use crate::analyzer::{EmotionScores, GenerateRequest};
use crate::emotion::{Mode, ResponseStyle};
use crate::llm::SamplingOptions;

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeBody {
    pub text: String,
    pub mood_id: String,
    /// Response style key: comfort, fact or advice
    pub mode: String,
}

/// Body of `POST /api/openai/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBody {
    pub text: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_mood_id")]
    pub mood_id: String,
    #[serde(default = "default_response_type")]
    pub response_type: String,
    #[serde(default)]
    pub context: String,
}

fn default_mode() -> String {
    Mode::Chat.as_str().to_string()
}

fn default_mood_id() -> String {
    "neutral".to_string()
}

fn default_response_type() -> String {
    ResponseStyle::Comfort.as_str().to_string()
}

impl From<GenerateBody> for GenerateRequest {
    fn from(body: GenerateBody) -> Self {
        GenerateRequest {
            text: body.text,
            mode: body.mode,
            mood_id: body.mood_id,
            response_type: body.response_type,
            context: body.context,
        }
    }
}

/// Body of `POST /api/emotion`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionBody {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResponse {
    pub emotions: EmotionScores,
}

/// Body of `POST /api/openai/completion`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionBody {
    pub prompt: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    SamplingOptions::default().temperature
}

fn default_max_tokens() -> u32 {
    SamplingOptions::default().max_tokens
}

impl CompletionBody {
    pub fn sampling(&self) -> SamplingOptions {
        SamplingOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub result: String,
}

// src/analyzer/generative.rs
// LLM-backed analyzer: prompt rendering, one completion call, decode-or-synthesize

use std::sync::Arc;
use tracing::{error, info, warn};

use super::prompts::{build_prompt, system_instruction};
use super::synthesis::{decode_structured, synthesize};
use super::AnalysisResult;
use crate::emotion::{EmotionLabel, Mode, ResponseStyle};
use crate::llm::{ChatMessage, LlmProvider, SamplingOptions};

const GENERATION_FAILED: &str = "응답 생성 중 오류가 발생했습니다.";

/// Fixed sampling for journal replies
pub const GENERATION_OPTIONS: SamplingOptions = SamplingOptions {
    temperature: 0.7,
    max_tokens: 500,
};

/// Raw request parameters, exactly as the client sent them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub text: String,
    pub mode: String,
    pub mood_id: String,
    pub response_type: String,
    pub context: String,
}

impl GenerateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: Mode::Chat.as_str().to_string(),
            mood_id: "neutral".to_string(),
            response_type: ResponseStyle::Comfort.as_str().to_string(),
            context: String::new(),
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn mood_id(mut self, mood_id: impl Into<String>) -> Self {
        self.mood_id = mood_id.into();
        self
    }

    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = response_type.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Result returned when the entry is empty
pub fn empty_text_result() -> AnalysisResult {
    AnalysisResult::new(
        EmotionLabel::Unknown,
        "텍스트가 입력되지 않았습니다.",
        "텍스트를 입력해주세요.",
    )
}

/// Result returned when the completion call fails
pub fn generation_failed_result(label: EmotionLabel, detail: &str) -> AnalysisResult {
    AnalysisResult::new(
        label,
        GENERATION_FAILED,
        format!("{}: {}", GENERATION_FAILED.trim_end_matches('.'), detail),
    )
}

pub struct GenerativeAnalyzer {
    provider: Arc<dyn LlmProvider>,
}

impl GenerativeAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Never fails: every error path still yields a populated result.
    pub async fn generate_response(&self, request: &GenerateRequest) -> AnalysisResult {
        info!(
            "Generation request: mode={}, mood_id={}, response_type={}",
            request.mode, request.mood_id, request.response_type
        );

        if request.text.is_empty() {
            warn!("Empty journal text, skipping generation");
            return empty_text_result();
        }

        let label = EmotionLabel::from_mood_word(&request.mood_id);
        let style = ResponseStyle::from_key_or_default(&request.response_type);
        let mode = Mode::from_key_or_default(&request.mode);

        let prompt = build_prompt(
            &request.text,
            mode,
            label,
            style,
            Some(request.context.as_str()),
        );
        let system = system_instruction(style).to_string();

        info!(
            "Calling {}: text_len={}, emotion={}, style={}",
            self.provider.name(),
            request.text.chars().count(),
            label,
            style.label()
        );

        let reply = match self
            .provider
            .chat(vec![ChatMessage::user(prompt)], system, GENERATION_OPTIONS)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_upstream() {
                    error!("{} generation failed: {}", self.provider.name(), e);
                } else {
                    warn!("Generation unavailable: {}", e);
                }
                return generation_failed_result(label, &e.to_string());
            }
        };

        info!(
            "Reply received: len={}, latency_ms={}",
            reply.content.chars().count(),
            reply.metadata.latency_ms
        );

        interpret_reply(&reply.content, mode, label)
    }
}

/// Structured decode first, heuristic synthesis second
pub fn interpret_reply(raw: &str, mode: Mode, label: EmotionLabel) -> AnalysisResult {
    match decode_structured(raw, label) {
        Some(result) => result,
        None => {
            warn!("Reply is not the expected JSON shape, synthesizing ({} mode)", mode);
            synthesize(raw.trim(), mode, label)
        }
    }
}

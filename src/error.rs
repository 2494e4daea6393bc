// src/error.rs
// Error types for the generation backend

use thiserror::Error;

/// Failure of a chat-completion call
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("OpenAI API 키가 설정되지 않았습니다. 환경 변수를 확인해주세요.")]
    NotConfigured,

    #[error("OpenAI 요청 전송에 실패했습니다: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API 오류 {status}: {body}")]
    Api { status: u16, body: String },

    #[error("OpenAI 응답 형식이 올바르지 않습니다: {0}")]
    MalformedResponse(String),
}

impl LlmError {
    /// Transport and upstream failures, as opposed to local misconfiguration
    pub fn is_upstream(&self) -> bool {
        !matches!(self, LlmError::NotConfigured)
    }
}

/// Convenience type alias for provider results
pub type LlmResult<T> = std::result::Result<T, LlmError>;

//! HTTP handlers for the analysis endpoints

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, error, info, warn};

use super::AppState;
use super::error::{ApiError, ApiResult};
use super::types::{
    AnalyzeBody, CompletionBody, CompletionResponse, EmotionBody, EmotionResponse, GenerateBody,
};
use crate::analyzer::{AnalysisResult, GenerateRequest, score_emotions};
use crate::emotion::EmotionLabel;
use crate::llm::ChatMessage;

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Hello World from Illusion Note Backend API"
    }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `POST /api/analyze`: rule-based pipeline
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeBody>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected /api/analyze body: {}", rejection.body_text());
        ApiError::unprocessable_entity(rejection.body_text())
    })?;

    let analyzer = state.rule_based.clone();
    let result = catch_unwind(AssertUnwindSafe(|| {
        analyzer.analyze(&body.text, &body.mood_id, &body.mode)
    }))
    .map_err(|panic| {
        let detail = panic_message(panic.as_ref());
        error!("Rule-based analyzer panicked: {}", detail);
        ApiError::internal(detail)
    })?;

    Ok(Json(result))
}

/// `POST /api/openai/generate`: generative pipeline. Always answers 200.
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBody>, JsonRejection>,
) -> Json<AnalysisResult> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected /api/openai/generate body: {}", rejection.body_text());
            return Json(request_failed_result(&rejection.body_text()));
        }
    };

    let request = GenerateRequest::from(body);
    let result = state.generative.generate_response(&request).await;
    info!("Generation response: emotion={}", result.detected_emotion);

    Json(result)
}

/// `POST /api/emotion`: keyword scores
pub async fn emotion_handler(
    payload: Result<Json<EmotionBody>, JsonRejection>,
) -> ApiResult<Json<EmotionResponse>> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::unprocessable_entity(rejection.body_text()))?;

    let emotions = score_emotions(&body.text);
    debug!("Keyword emotions matched: {:?}", emotions.matched());

    Ok(Json(EmotionResponse { emotions }))
}

/// `POST /api/openai/completion`: raw prompt passthrough
pub async fn completion_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompletionBody>, JsonRejection>,
) -> ApiResult<Json<CompletionResponse>> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::unprocessable_entity(rejection.body_text()))?;

    let reply = state
        .provider
        .chat(vec![ChatMessage::user(body.prompt.clone())], String::new(), body.sampling())
        .await
        .map_err(|e| {
            error!("Completion failed: {}", e);
            ApiError::internal(e.to_string())
        })?;

    Ok(Json(CompletionResponse {
        result: reply.content,
    }))
}

/// Reply for a generate request that could not be read at all
pub fn request_failed_result(detail: &str) -> AnalysisResult {
    AnalysisResult::new(
        EmotionLabel::Neutral,
        "처리 중 오류가 발생했습니다.",
        format!("죄송합니다. 요청을 처리하는 중 문제가 발생했습니다: {}", detail),
    )
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "analyzer failed".to_string()
    }
}

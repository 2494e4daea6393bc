// src/analyzer/synthesis.rs
// Turning raw model output into an AnalysisResult

use serde::Deserialize;

use super::AnalysisResult;
use crate::emotion::{EmotionLabel, Mode};

/// Characters kept in an `analyze`-mode summary before truncation
pub const SUMMARY_PREVIEW_CHARS: usize = 100;

const SUMMARIZED_ABOVE: &str = "위 내용으로 요약됩니다.";

/// Shape the prompts ask the model to answer with
#[derive(Debug, Clone, Deserialize)]
struct StructuredReply {
    #[allow(dead_code)] // required to be present, but the caller's mood wins
    detected_emotion: String,
    summary: String,
    response: String,
}

/// Try to read the reply as `{detected_emotion, summary, response}`.
///
/// All three keys must be present with string values; extra keys are
/// ignored. `detected_emotion` in the result is always `label`.
pub fn decode_structured(raw: &str, label: EmotionLabel) -> Option<AnalysisResult> {
    let reply: StructuredReply = serde_json::from_str(raw.trim()).ok()?;
    Some(AnalysisResult::new(label, reply.summary, reply.response))
}

/// Build a result heuristically from unstructured text
pub fn synthesize(raw: &str, mode: Mode, label: EmotionLabel) -> AnalysisResult {
    match mode {
        Mode::Analyze => {
            let summary = if raw.chars().count() > SUMMARY_PREVIEW_CHARS {
                let preview: String = raw.chars().take(SUMMARY_PREVIEW_CHARS).collect();
                format!("{}...", preview)
            } else {
                raw.to_string()
            };
            AnalysisResult::new(label, summary, raw)
        }
        Mode::Summarize => AnalysisResult::new(label, raw, SUMMARIZED_ABOVE),
        Mode::Chat => AnalysisResult::new(
            label,
            format!("당신의 감정은 '{}'으로 감지되었습니다.", label),
            raw,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_overrides_model_emotion() {
        let raw = r#"{"detected_emotion": "X", "summary": "요약", "response": "답변"}"#;
        let result = decode_structured(raw, EmotionLabel::Good).unwrap();
        assert_eq!(result.detected_emotion, EmotionLabel::Good);
        assert_eq!(result.summary, "요약");
        assert_eq!(result.response, "답변");
    }

    #[test]
    fn test_decode_ignores_extra_keys_and_whitespace() {
        let raw = "\n  {\"detected_emotion\": \"슬픔\", \"summary\": \"s\", \"response\": \"r\", \"tone\": 3}  ";
        let result = decode_structured(raw, EmotionLabel::Sad).unwrap();
        assert_eq!(result.summary, "s");
        assert_eq!(result.response, "r");
    }

    #[test]
    fn test_decode_rejects_missing_keys() {
        let raw = r#"{"detected_emotion": "보통", "summary": "only a summary"}"#;
        assert!(decode_structured(raw, EmotionLabel::Neutral).is_none());
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode_structured("그냥 평범한 답변입니다.", EmotionLabel::Neutral).is_none());
        assert!(decode_structured("", EmotionLabel::Neutral).is_none());
        assert!(decode_structured("[1, 2, 3]", EmotionLabel::Neutral).is_none());
    }

    #[test]
    fn test_decode_rejects_non_string_fields() {
        let raw = r#"{"detected_emotion": "보통", "summary": 42, "response": "r"}"#;
        assert!(decode_structured(raw, EmotionLabel::Neutral).is_none());
    }

    #[test]
    fn test_synthesize_analyze_short_text() {
        let result = synthesize("짧은 분석", Mode::Analyze, EmotionLabel::Tired);
        assert_eq!(result.summary, "짧은 분석");
        assert_eq!(result.response, "짧은 분석");
        assert_eq!(result.detected_emotion, EmotionLabel::Tired);
    }

    #[test]
    fn test_synthesize_analyze_truncates_by_characters() {
        let raw = "가".repeat(150);
        let result = synthesize(&raw, Mode::Analyze, EmotionLabel::Sad);
        assert_eq!(result.summary, format!("{}...", "가".repeat(100)));
        assert_eq!(result.response, raw);
    }

    #[test]
    fn test_synthesize_analyze_exactly_at_limit() {
        let raw = "a".repeat(SUMMARY_PREVIEW_CHARS);
        let result = synthesize(&raw, Mode::Analyze, EmotionLabel::Sad);
        assert_eq!(result.summary, raw);
    }

    #[test]
    fn test_synthesize_summarize() {
        let result = synthesize("오늘은 길었다", Mode::Summarize, EmotionLabel::Neutral);
        assert_eq!(result.summary, "오늘은 길었다");
        assert_eq!(result.response, SUMMARIZED_ABOVE);
    }

    #[test]
    fn test_synthesize_chat() {
        let result = synthesize("힘내세요!", Mode::Chat, EmotionLabel::Anxious);
        assert_eq!(result.summary, "당신의 감정은 '불안'으로 감지되었습니다.");
        assert_eq!(result.response, "힘내세요!");
    }
}

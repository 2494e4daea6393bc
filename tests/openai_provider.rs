// tests/openai_provider.rs
// OpenAI chat provider against a mock HTTP server

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use illusion_note::analyzer::{GenerateRequest, GenerativeAnalyzer};
use illusion_note::emotion::EmotionLabel;
use illusion_note::error::LlmError;
use illusion_note::llm::{ChatMessage, LlmProvider, OpenAiChatProvider, SamplingOptions};

fn provider_for(server: &MockServer, api_key: Option<&str>) -> OpenAiChatProvider {
    OpenAiChatProvider::new(
        api_key.map(String::from),
        "gpt-4o-mini".to_string(),
        format!("{}/v1", server.uri()),
    )
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49 }
    })
}

#[tokio::test]
async fn test_chat_sends_expected_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.7,
            "max_tokens": 500,
            "messages": [
                { "role": "system", "content": "be kind" },
                { "role": "user", "content": "hello" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  hi there \n")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Some("sk-test"));
    let response = provider
        .chat(
            vec![ChatMessage::user("hello")],
            "be kind".to_string(),
            SamplingOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(response.content, "hi there");
    assert_eq!(response.metadata.model_version, "gpt-4o-mini-2024-07-18");
    assert_eq!(response.metadata.input_tokens, Some(42));
    assert_eq!(response.metadata.output_tokens, Some(7));
    assert_eq!(response.metadata.total_tokens, Some(49));
    assert_eq!(response.metadata.finish_reason.as_deref(), Some("stop"));
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = provider_for(&server, Some("sk-bad"))
        .chat(vec![ChatMessage::user("x")], String::new(), SamplingOptions::default())
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_content_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider_for(&server, Some("sk-test"))
        .chat(vec![ChatMessage::user("x")], String::new(), SamplingOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unconfigured_provider_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("nope")))
        .expect(0)
        .mount(&server)
        .await;

    let analyzer = GenerativeAnalyzer::new(Arc::new(provider_for(&server, None)));
    let result = analyzer
        .generate_response(&GenerateRequest::new("오늘은 평온했다").mood_id("평온"))
        .await;

    assert_eq!(result.detected_emotion, EmotionLabel::Neutral);
    assert_eq!(result.summary, "응답 생성 중 오류가 발생했습니다.");
}

#[tokio::test]
async fn test_pipeline_over_http() {
    let server = MockServer::start().await;

    let reply = r#"{"detected_emotion": "기쁨", "summary": "승진 소식", "response": "축하해요!"}"#;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = GenerativeAnalyzer::new(Arc::new(provider_for(&server, Some("sk-test"))));
    let result = analyzer
        .generate_response(
            &GenerateRequest::new("승진했다!")
                .mood_id("happy")
                .response_type("fact"),
        )
        .await;

    assert_eq!(result.detected_emotion, EmotionLabel::Good);
    assert_eq!(result.summary, "승진 소식");
    assert_eq!(result.response, "축하해요!");
}

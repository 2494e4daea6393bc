// tests/analyze_api.rs
// Rule-based endpoint, keyword scoring and the plain routes


use axum::http::StatusCode;
use serde_json::json;

use illusion_note::analyzer::AnalysisResult;
use illusion_note::analyzer::rule_based::response_template;
use illusion_note::emotion::{EmotionLabel, MoodId, ResponseStyle};
use test_helpers::*;

#[tokio::test]
async fn test_analyze_returns_table_entries() {
    let app = create_test_app(MockProvider::replying("unused"));

    for style in ResponseStyle::ALL {
        for mood in MoodId::ALL {
            let response = post_json(
                &app,
                "/api/analyze",
                json!({ "text": "오늘의 일기", "mood_id": mood.as_str(), "mode": style.as_str() }),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);

            let result: AnalysisResult =
                serde_json::from_slice(&body_bytes(response).await).unwrap();
            assert_eq!(result.detected_emotion, mood.label());
            assert_eq!(result.response, response_template(style, mood));
        }
    }
}

#[tokio::test]
async fn test_analyze_unknown_mood_uses_sentinel() {
    let app = create_test_app(MockProvider::replying("unused"));

    let response = post_json(
        &app,
        "/api/analyze",
        json!({ "text": "t", "mood_id": "euphoric", "mode": "fact" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["detected_emotion"], EmotionLabel::Unknown.as_str());
    assert_eq!(body["response"], "응답을 생성할 수 없습니다.");
}

#[tokio::test]
async fn test_analyze_never_calls_provider() {
    let provider = MockProvider::replying("unused");
    let app = create_test_app(provider.clone());

    post_json(
        &app,
        "/api/analyze",
        json!({ "text": "t", "mood_id": "happy", "mode": "comfort" }),
    )
    .await;
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_analyze_malformed_body_is_422_with_cors() {
    let app = create_test_app(MockProvider::replying("unused"));

    let response = post_json(&app, "/api/analyze", json!({ "text": "missing fields" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert!(body["detail"].as_str().unwrap().contains("mood_id"));
}

#[tokio::test]
async fn test_emotion_keyword_endpoint() {
    let app = create_test_app(MockProvider::replying("unused"));

    let response = post_json(
        &app,
        "/api/emotion",
        json!({ "text": "I was so glad, then totally shocked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let emotions = &body["emotions"];
    assert!((emotions["happy"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    assert!((emotions["surprise"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    assert_eq!(emotions["sad"].as_f64().unwrap(), 0.0);
    assert_eq!(emotions["angry"].as_f64().unwrap(), 0.0);
    assert_eq!(emotions["fear"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_health_and_root() {
    let app = create_test_app(MockProvider::replying("unused"));

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "healthy" }));

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["message"].is_string());
}

//! HTTP server for the journal analysis API
//!
//! Endpoints:
//! - GET  /                       - Greeting
//! - GET  /health                 - Health check
//! - POST /api/analyze            - Rule-based analysis
//! - POST /api/openai/generate    - Generative analysis (never errors)
//! - POST /api/emotion            - Keyword emotion scores
//! - POST /api/openai/completion  - Raw completion passthrough

pub mod error;
pub mod handlers;
pub mod types;

use anyhow::Result;
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analyzer::{GenerativeAnalyzer, RuleBasedAnalyzer};
use crate::config::ServiceConfig;
use crate::llm::{LlmProvider, OpenAiChatProvider};

// ============================================================================
// Server State
// ============================================================================

/// Shared, read-only services handed to every request
#[derive(Clone)]
pub struct AppState {
    pub rule_based: Arc<RuleBasedAnalyzer>,
    pub generative: Arc<GenerativeAnalyzer>,
    pub provider: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Wire both analyzers around one provider
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            rule_based: Arc::new(RuleBasedAnalyzer::new()),
            generative: Arc::new(GenerativeAnalyzer::new(provider.clone())),
            provider,
        }
    }

    /// Build the OpenAI-backed state from resolved configuration
    pub fn from_config(config: &ServiceConfig) -> Self {
        let provider = OpenAiChatProvider::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_base_url.clone(),
        );
        info!(
            "Provider {}: model={}, configured={}",
            provider.name(),
            provider.model(),
            provider.is_configured()
        );
        Self::new(Arc::new(provider))
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/analyze", post(handlers::analyze_handler))
        .route("/api/openai/generate", post(handlers::generate_handler))
        .route("/api/openai/completion", post(handlers::completion_handler))
        .route("/api/emotion", post(handlers::emotion_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: ServiceConfig) -> Result<()> {
    let app = create_router(AppState::from_config(&config));
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// src/analyzer/mod.rs
// Journal analysis pipelines and their shared output type

pub mod generative;
pub mod keywords;
pub mod prompts;
pub mod rule_based;
pub mod synthesis;

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionLabel;

pub use generative::{GenerateRequest, GenerativeAnalyzer};
pub use keywords::{EmotionScores, score_emotions};
pub use rule_based::RuleBasedAnalyzer;
pub use synthesis::{decode_structured, synthesize};

/// Output triple returned by every pipeline. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detected_emotion: EmotionLabel,
    pub summary: String,
    pub response: String,
}

impl AnalysisResult {
    pub fn new(
        detected_emotion: EmotionLabel,
        summary: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            detected_emotion,
            summary: summary.into(),
            response: response.into(),
        }
    }
}

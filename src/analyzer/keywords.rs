//! Keyword-based emotion scoring.
//!
//! A fast, no-LLM pass over English text: every emotion whose vocabulary
//! appears anywhere in the lower-cased input is flagged with a fixed score.

use serde::{Deserialize, Serialize};

/// Score given to an emotion whose keywords were found
pub const MATCH_SCORE: f32 = 0.8;

// ── Keyword sets ───────────────────────────────────────────

const HAPPY_KW: &[&str] = &["happy", "joy", "glad", "delighted"];
const SAD_KW: &[&str] = &["sad", "unhappy", "depressed", "miserable"];
const ANGRY_KW: &[&str] = &["angry", "mad", "furious", "outraged"];
const FEAR_KW: &[&str] = &["afraid", "scared", "terrified", "fearful"];
const SURPRISE_KW: &[&str] = &["surprised", "shocked", "amazed", "astonished"];

/// Per-emotion scores, each either 0.0 or [`MATCH_SCORE`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub happy: f32,
    pub sad: f32,
    pub angry: f32,
    pub fear: f32,
    pub surprise: f32,
}

impl EmotionScores {
    /// Names of the emotions that matched, in field order
    pub fn matched(&self) -> Vec<&'static str> {
        [
            ("happy", self.happy),
            ("sad", self.sad),
            ("angry", self.angry),
            ("fear", self.fear),
            ("surprise", self.surprise),
        ]
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}

fn score(text: &str, keywords: &[&str]) -> f32 {
    if keywords.iter().any(|kw| text.contains(kw)) {
        MATCH_SCORE
    } else {
        0.0
    }
}

/// Substring match, so "unhappy" also counts toward `happy`.
pub fn score_emotions(text: &str) -> EmotionScores {
    let lower = text.to_lowercase();

    EmotionScores {
        happy: score(&lower, HAPPY_KW),
        sad: score(&lower, SAD_KW),
        angry: score(&lower, ANGRY_KW),
        fear: score(&lower, FEAR_KW),
        surprise: score(&lower, SURPRISE_KW),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_nothing() {
        let scores = score_emotions("I walked to the store and bought bread.");
        assert_eq!(scores, EmotionScores::default());
        assert!(scores.matched().is_empty());
    }

    #[test]
    fn test_each_category_is_detected() {
        assert_eq!(score_emotions("so much JOY today").happy, MATCH_SCORE);
        assert_eq!(score_emotions("feeling miserable").sad, MATCH_SCORE);
        assert_eq!(score_emotions("I was furious").angry, MATCH_SCORE);
        assert_eq!(score_emotions("kind of scared").fear, MATCH_SCORE);
        assert_eq!(score_emotions("Totally Amazed").surprise, MATCH_SCORE);
    }

    #[test]
    fn test_multiple_categories() {
        let scores = score_emotions("I was glad but also a little afraid");
        assert_eq!(scores.matched(), vec!["happy", "fear"]);
    }

    #[test]
    fn test_substring_matching() {
        // "unhappy" contains "happy"
        let scores = score_emotions("unhappy");
        assert_eq!(scores.matched(), vec!["happy", "sad"]);
    }
}

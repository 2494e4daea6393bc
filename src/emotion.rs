// src/emotion.rs
// Mood, response-style and mode vocabularies shared by both analyzers

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Coarse mood a user picks for a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodId {
    Happy,
    Neutral,
    Sad,
    Tired,
    Angry,
}

impl MoodId {
    pub const ALL: [MoodId; 5] = [
        MoodId::Happy,
        MoodId::Neutral,
        MoodId::Sad,
        MoodId::Tired,
        MoodId::Angry,
    ];

    /// Parse a canonical mood id ("happy", "sad", ...). Exact match only.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "happy" => Some(MoodId::Happy),
            "neutral" => Some(MoodId::Neutral),
            "sad" => Some(MoodId::Sad),
            "tired" => Some(MoodId::Tired),
            "angry" => Some(MoodId::Angry),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodId::Happy => "happy",
            MoodId::Neutral => "neutral",
            MoodId::Sad => "sad",
            MoodId::Tired => "tired",
            MoodId::Angry => "angry",
        }
    }

    pub fn label(&self) -> EmotionLabel {
        match self {
            MoodId::Happy => EmotionLabel::Good,
            MoodId::Neutral => EmotionLabel::Neutral,
            MoodId::Sad => EmotionLabel::Sad,
            MoodId::Tired => EmotionLabel::Tired,
            MoodId::Angry => EmotionLabel::Anxious,
        }
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized emotion label returned to the client.
///
/// Serialized as the Korean display string. `Unknown` is only produced for
/// moods the rule-based analyzer does not recognise and for empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionLabel {
    #[serde(rename = "좋음")]
    Good,
    #[serde(rename = "보통")]
    Neutral,
    #[serde(rename = "슬픔")]
    Sad,
    #[serde(rename = "지침")]
    Tired,
    #[serde(rename = "불안")]
    Anxious,
    #[serde(rename = "알 수 없음")]
    Unknown,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Good => "좋음",
            EmotionLabel::Neutral => "보통",
            EmotionLabel::Sad => "슬픔",
            EmotionLabel::Tired => "지침",
            EmotionLabel::Anxious => "불안",
            EmotionLabel::Unknown => "알 수 없음",
        }
    }

    /// Label for a canonical mood id, or `Unknown`.
    pub fn for_mood_key(key: &str) -> Self {
        MoodId::from_key(key)
            .map(|mood| mood.label())
            .unwrap_or(EmotionLabel::Unknown)
    }

    /// Label for a canonical id or free-text mood word, falling back to `Neutral`.
    pub fn from_mood_word(word: &str) -> Self {
        MOOD_SYNONYMS
            .get(word)
            .copied()
            .unwrap_or(EmotionLabel::Neutral)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Natural-language mood words accepted by the generative pipeline, on top of
// the five canonical ids.
static MOOD_SYNONYMS: Lazy<HashMap<&'static str, EmotionLabel>> = Lazy::new(|| {
    use EmotionLabel::*;

    HashMap::from([
        ("기쁨", Good),
        ("행복", Good),
        ("즐거움", Good),
        ("만족", Good),
        ("평온", Neutral),
        ("평범", Neutral),
        ("중립", Neutral),
        ("일상", Neutral),
        ("슬픔", Sad),
        ("우울", Sad),
        ("상실", Sad),
        ("외로움", Sad),
        ("피곤", Tired),
        ("지침", Tired),
        ("무기력", Tired),
        ("에너지 부족", Tired),
        ("불안", Anxious),
        ("걱정", Anxious),
        ("두려움", Anxious),
        ("화남", Anxious),
        ("happy", Good),
        ("neutral", Neutral),
        ("sad", Sad),
        ("tired", Tired),
        ("angry", Anxious),
    ])
});

/// Tone the user wants for the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    #[default]
    Comfort,
    Fact,
    Advice,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 3] = [
        ResponseStyle::Comfort,
        ResponseStyle::Fact,
        ResponseStyle::Advice,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "comfort" => Some(ResponseStyle::Comfort),
            "fact" => Some(ResponseStyle::Fact),
            "advice" => Some(ResponseStyle::Advice),
            _ => None,
        }
    }

    /// Like [`from_key`](Self::from_key) but unknown keys become `Comfort`.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStyle::Comfort => "comfort",
            ResponseStyle::Fact => "fact",
            ResponseStyle::Advice => "advice",
        }
    }

    /// Korean display label interpolated into prompts
    pub fn label(&self) -> &'static str {
        match self {
            ResponseStyle::Comfort => "위로",
            ResponseStyle::Fact => "팩트",
            ResponseStyle::Advice => "조언",
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-shaping mode of the generative pipeline.
///
/// Distinct from [`ResponseStyle`]: the rule-based endpoint also calls its
/// style parameter "mode", but it never selects one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Chat,
    Analyze,
    Summarize,
}

impl Mode {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "chat" => Some(Mode::Chat),
            "analyze" => Some(Mode::Analyze),
            "summarize" => Some(Mode::Summarize),
            _ => None,
        }
    }

    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::Analyze => "analyze",
            Mode::Summarize => "summarize",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

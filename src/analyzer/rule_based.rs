// src/analyzer/rule_based.rs
// Deterministic analyzer: mood label lookup plus canned replies

use tracing::debug;

use super::AnalysisResult;
use crate::emotion::{EmotionLabel, MoodId, ResponseStyle};

const NO_RESPONSE: &str = "응답을 생성할 수 없습니다.";

/// Canned reply for a (style, mood) pair
pub fn response_template(style: ResponseStyle, mood: MoodId) -> &'static str {
    use MoodId::*;
    use ResponseStyle::*;

    match (style, mood) {
        (Comfort, Happy) => {
            "당신의 기쁨을 함께 나눌 수 있어 저도 행복합니다. 이런 긍정적인 감정은 주변 사람들에게도 전달되어요. 오늘의 이 기분을 오래 간직하세요."
        }
        (Comfort, Neutral) => {
            "평온한 마음 상태도 중요한 감정이에요. 모든 날이 극적인 감정으로 가득 차있을 필요는 없습니다. 이런 균형 잡힌 감정은 당신의 안정을 보여줍니다."
        }
        (Comfort, Sad) => {
            "당신의 감정은 충분히 이해할 수 있어요. 마음이 아프고 힘든 것은 자연스러운 감정이에요. 이런 어려운 시간이 지나면 분명히 더 강해진 당신을 만나게 될 거예요."
        }
        (Comfort, Tired) => {
            "충분히 휴식을 취하는 것도 중요해요. 지치고 피곤한 것은 당신이 열심히 살아왔다는 증거이기도 합니다. 잠시 쉬어가도 괜찮아요."
        }
        (Comfort, Angry) => {
            "당신의 불안함은 자연스러운 감정이에요. 때로는 불안이 우리를 보호하기도 합니다. 이 감정을 인정하고 천천히 해결해 나가는 것이 중요해요."
        }
        (Fact, Happy) => {
            "긍정적 감정은 면역 체계를 강화시키고 스트레스 호르몬 수치를 낮춥니다. 연구에 따르면 행복한 사람들은 평균적으로 더 건강하고 더 오래 삽니다."
        }
        (Fact, Neutral) => {
            "감정의 균형은 심리적 안정의 핵심입니다. 연구에 따르면 감정 변동이 적은 사람들은 스트레스 관리 능력이 더 뛰어나며 정신적 회복력이 강합니다."
        }
        (Fact, Sad) => {
            "슬픔은 평균적으로 3-6개월 지속됩니다. 연구에 따르면 슬픔을 느낄 때 우리 뇌에서는 실제 물리적 고통과 비슷한 신경 반응이 일어납니다."
        }
        (Fact, Tired) => {
            "피로감은 체내 코르티솔 수치와 밀접한 관련이 있습니다. 적절한 휴식은 뇌 기능을 향상시키고 면역 체계를 강화하는 데 필수적입니다."
        }
        (Fact, Angry) => {
            "불안은 위험 상황에서 생존에 필요한 진화적 반응입니다. 단기적 불안은 주의력과 집중력을 높이지만, 만성적 불안은 심장 건강과 면역 체계에 부정적인 영향을 미칠 수 있습니다."
        }
        (Advice, Happy) => {
            "이 긍정적인 상태를 유지하기 위해 감사일기를 써보세요. 작은 성취감을 기록하고, 이런 기쁨을 주변 사람들과 나누는 것도 행복을 연장하는 좋은 방법입니다."
        }
        (Advice, Neutral) => {
            "균형 잡힌 감정 상태를 유지하기 위해 규칙적인 일상과 적절한 휴식을 취하세요. 가벼운 운동이나 명상은 이런 안정된 상태를 유지하는 데 도움이 됩니다."
        }
        (Advice, Sad) => {
            "자신을 돌보는 시간을 가지세요. 규칙적인 생활, 충분한 휴식, 건강한 식습관이 도움이 됩니다. 새로운 취미나 활동에 참여하는 것도 좋은 방법입니다."
        }
        (Advice, Tired) => {
            "에너지를 회복하기 위해 충분한 수면을 취하고, 적절한 영양 섭취를 하세요. 가능하다면 일정을 조정하여 휴식 시간을 확보하고, 가벼운 스트레칭이나 산책도 도움이 됩니다."
        }
        (Advice, Angry) => {
            "깊은 호흡과 마음 챙김 명상을 시도해보세요. 불안한 생각이 떠오를 때 그것을 기록하고 분석하는 것이 도움이 될 수 있습니다. 필요하다면 전문가의 도움을 구하는 것도 고려해보세요."
        }
    }
}

/// Rule-based analyzer. The entry text is accepted but not inspected.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `mode` here is a response-style key ("comfort", "fact", "advice").
    pub fn analyze(&self, text: &str, mood_id: &str, mode: &str) -> AnalysisResult {
        debug!(
            "Rule-based analysis: mood_id={}, mode={}, text_len={}",
            mood_id,
            mode,
            text.chars().count()
        );

        let detected_emotion = EmotionLabel::for_mood_key(mood_id);
        let summary = format!(
            "당신의 감정은 '{label}'이에요. 입력하신 내용에서 '{label}' 감정이 느껴집니다.",
            label = detected_emotion
        );

        let response = match (ResponseStyle::from_key(mode), MoodId::from_key(mood_id)) {
            (Some(style), Some(mood)) => response_template(style, mood),
            _ => NO_RESPONSE,
        };

        AnalysisResult::new(detected_emotion, summary, response)
    }
}

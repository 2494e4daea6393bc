// src/analyzer/prompts.rs
// Prompt templates and system instructions for the generative pipeline

use crate::emotion::{EmotionLabel, Mode, ResponseStyle};

const CHAT_TEMPLATE: &str = "다음은 사용자의 일기입니다: {text}\n\n사용자가 선택한 감정은 '{emotion}'이며, 응답 유형은 '{response_type}'입니다.\n\n위 내용에 대해 선택된 감정과 응답 유형에 맞게 공감하며 대화하듯이 응답해주세요. 다음 형식으로 JSON 응답을 생성해주세요: {\"detected_emotion\": \"{emotion}\", \"summary\": \"일기 내용 요약\", \"response\": \"공감하는 응답\"}";

const ANALYZE_TEMPLATE: &str = "다음은 사용자의 일기입니다: {text}\n\n사용자가 선택한 감정은 '{emotion}'이며, 응답 유형은 '{response_type}'입니다.\n\n이 글에서 느껴지는 감정과 심리상태를 분석해주세요. 그리고 사용자가 선택한 응답 유형({response_type})에 맞는 답변을 제공해주세요. 다음 형식으로 JSON 응답을 생성해주세요: {\"detected_emotion\": \"{emotion}\", \"summary\": \"분석 요약\", \"response\": \"상세 분석 내용\"}";

const SUMMARIZE_TEMPLATE: &str = "다음은 사용자의 일기입니다: {text}\n\n사용자가 선택한 감정은 '{emotion}'이며, 응답 유형은 '{response_type}'입니다.\n\n이 내용을 간결하게 요약해주세요. 그리고 사용자가 선택한 응답 유형({response_type})에 맞는 답변을 제공해주세요. 다음 형식으로 JSON 응답을 생성해주세요: {\"detected_emotion\": \"{emotion}\", \"summary\": \"일기 요약\", \"response\": \"요약에 대한 코멘트\"}";

const COMFORT_INSTRUCTION: &str = "당신은 일기장 앱을 사용하는 사용자와 대화하는 AI 비서입니다. 사용자의 감정에 공감하고 위로하는 응답을 제공합니다. 결론과 교훈을 강조하지 말고, 대신 사용자의 감정에 초점을 맞추고 공감을 표현하세요.";

const FACT_INSTRUCTION: &str = "당신은 일기장 앱을 사용하는 사용자와 대화하는 AI 비서입니다. 사용자의 상황과 감정에 대해 객관적인 사실과 정보를 제공합니다. 개인적인 조언보다는 심리학적 사실이나 통계 정보에 기반한 정보를 제공하세요.";

const ADVICE_INSTRUCTION: &str = "당신은 일기장 앱을 사용하는 사용자와 대화하는 AI 비서입니다. 사용자의 상황과 감정에 기반하여 실용적인 조언과 해결책을 제공합니다. 공감도 중요하지만, 주로 사용자가 상황을 개선할 수 있는 구체적인 조언에 집중하세요.";

/// Placeholders recognised by [`PromptTemplate::render`]
const PLACEHOLDERS: [&str; 3] = ["{text}", "{emotion}", "{response_type}"];

/// A user-prompt template for one [`Mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    source: &'static str,
}

impl PromptTemplate {
    pub fn for_mode(mode: Mode) -> Self {
        let source = match mode {
            Mode::Chat => CHAT_TEMPLATE,
            Mode::Analyze => ANALYZE_TEMPLATE,
            Mode::Summarize => SUMMARIZE_TEMPLATE,
        };
        Self { source }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Fill the placeholders in a single left-to-right pass.
    ///
    /// Substituted values are never rescanned, so an entry that happens to
    /// contain `{emotion}` is passed through as written.
    pub fn render(&self, text: &str, emotion: EmotionLabel, style: ResponseStyle) -> String {
        let mut out = String::with_capacity(self.source.len() + text.len());
        let mut rest = self.source;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            match PLACEHOLDERS.iter().find(|p| tail.starts_with(**p)) {
                Some(placeholder) => {
                    match *placeholder {
                        "{text}" => out.push_str(text),
                        "{emotion}" => out.push_str(emotion.as_str()),
                        _ => out.push_str(style.label()),
                    }
                    rest = &tail[placeholder.len()..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// System instruction framing the reply for a response style
pub fn system_instruction(style: ResponseStyle) -> &'static str {
    match style {
        ResponseStyle::Comfort => COMFORT_INSTRUCTION,
        ResponseStyle::Fact => FACT_INSTRUCTION,
        ResponseStyle::Advice => ADVICE_INSTRUCTION,
    }
}

/// Render the user prompt, appending the optional context line
pub fn build_prompt(
    text: &str,
    mode: Mode,
    emotion: EmotionLabel,
    style: ResponseStyle,
    context: Option<&str>,
) -> String {
    let mut prompt = PromptTemplate::for_mode(mode).render(text, emotion, style);

    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str("\n추가 컨텍스트: ");
        prompt.push_str(context);
    }

    prompt
}

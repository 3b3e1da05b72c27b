use serde::{Deserialize, Serialize};

/// Platform-neutral reply handed back to the voice adapter for envelope wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_content: Option<String>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Final speech; the session closes.
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt_speech: None,
            card_title: None,
            card_content: None,
            should_end_session: true,
        }
    }

    pub fn tell_with_card(
        speech: impl Into<String>,
        card_title: impl Into<String>,
        card_content: impl Into<String>,
    ) -> Self {
        Self {
            card_title: Some(card_title.into()),
            card_content: Some(card_content.into()),
            ..Self::tell(speech)
        }
    }

    /// Prompt plus reprompt; the session stays open for the next intent.
    pub fn ask(speech: impl Into<String>, reprompt_speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt_speech: Some(reprompt_speech.into()),
            card_title: None,
            card_content: None,
            should_end_session: false,
        }
    }
}

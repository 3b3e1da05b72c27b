use pokedex_core::response::SkillResponse;
use serde::Serialize;
use serde_json::{Map, Value};

pub const RESPONSE_VERSION: &str = "1.0";

/// Speech is always sent verbatim as plain text, never interpreted as markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// Acknowledgement with no speech, used for session-end and ignored requests.
    pub fn empty(session_attributes: Map<String, Value>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_owned(),
            session_attributes,
            response: ResponseBody::default(),
        }
    }

    pub fn from_response(response: &SkillResponse, session_attributes: Map<String, Value>) -> Self {
        ResponseBuilder::new(&response.speech)
            .reprompt(response.reprompt_speech.as_deref())
            .card(response.card_title.as_deref(), response.card_content.as_deref())
            .end_session(response.should_end_session)
            .build(session_attributes)
    }
}

pub struct ResponseBuilder {
    body: ResponseBody,
}

impl ResponseBuilder {
    pub fn new(speech: &str) -> Self {
        Self {
            body: ResponseBody {
                output_speech: Some(OutputSpeech::plain(speech)),
                ..ResponseBody::default()
            },
        }
    }

    pub fn reprompt(mut self, speech: Option<&str>) -> Self {
        self.body.reprompt =
            speech.map(|speech| Reprompt { output_speech: OutputSpeech::plain(speech) });
        self
    }

    /// A card is rendered when either field is present; a missing half renders empty.
    pub fn card(mut self, title: Option<&str>, content: Option<&str>) -> Self {
        if title.is_some() || content.is_some() {
            self.body.card = Some(Card::Simple {
                title: title.unwrap_or_default().to_owned(),
                content: content.unwrap_or_default().to_owned(),
            });
        }
        self
    }

    pub fn end_session(mut self, should_end_session: bool) -> Self {
        self.body.should_end_session = Some(should_end_session);
        self
    }

    pub fn build(self, session_attributes: Map<String, Value>) -> ResponseEnvelope {
        ResponseEnvelope {
            version: RESPONSE_VERSION.to_owned(),
            session_attributes,
            response: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use pokedex_core::response::SkillResponse;
    use serde_json::{json, Map};

    use super::{OutputSpeech, ResponseEnvelope};

    #[test]
    fn tell_with_card_renders_simple_card_and_ends_session() {
        let response = SkillResponse::tell_with_card(
            "Pikachu is an Electric-type Pokémon.",
            "Information for pikachu",
            "Pikachu is an Electric-type Pokémon.",
        );

        let rendered = serde_json::to_value(ResponseEnvelope::from_response(&response, Map::new()))
            .expect("serialize");

        assert_eq!(
            rendered,
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "PlainText", "text": "Pikachu is an Electric-type Pokémon." },
                    "card": {
                        "type": "Simple",
                        "title": "Information for pikachu",
                        "content": "Pikachu is an Electric-type Pokémon."
                    },
                    "shouldEndSession": true
                }
            })
        );
    }

    #[test]
    fn ask_renders_reprompt_and_echoes_attributes() {
        let mut attributes = Map::new();
        attributes.insert("visits".to_owned(), json!(2));

        let rendered = serde_json::to_value(ResponseEnvelope::from_response(
            &SkillResponse::ask("prompt", "reprompt"),
            attributes,
        ))
        .expect("serialize");

        assert_eq!(rendered["sessionAttributes"]["visits"], 2);
        assert_eq!(rendered["response"]["reprompt"]["outputSpeech"]["text"], "reprompt");
        assert_eq!(rendered["response"]["shouldEndSession"], false);
        assert!(rendered["response"].get("card").is_none());
    }

    #[test]
    fn empty_envelope_has_no_response_fields() {
        let rendered = serde_json::to_value(ResponseEnvelope::empty(Map::new())).expect("serialize");
        assert_eq!(rendered["response"], json!({}));
    }

    #[test]
    fn speak_markup_in_descriptions_stays_plain_text() {
        let response = SkillResponse::tell("<speak>Hello</speak>");

        let rendered = serde_json::to_value(ResponseEnvelope::from_response(&response, Map::new()))
            .expect("serialize");

        assert_eq!(
            rendered["response"]["outputSpeech"],
            json!({ "type": "PlainText", "text": "<speak>Hello</speak>" })
        );
        assert_eq!(
            ResponseEnvelope::from_response(&response, Map::new()).response.output_speech,
            Some(OutputSpeech::plain("<speak>Hello</speak>"))
        );
    }
}

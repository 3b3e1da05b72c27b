use std::collections::BTreeMap;

use pokedex_core::errors::ApplicationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::events::{EventContext, SkillEvent};

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub session: Session,
    pub request: Request,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "new", default)]
    pub is_new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, Slot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), slots: BTreeMap::new() }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        let name = name.into();
        self.slots
            .insert(name.clone(), Slot { name, value: value.map(str::to_owned) });
        self
    }

    /// Value of the named slot; `None` when the slot or its value is absent.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

/// A validated request, ready for routing.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundEvent {
    pub context: EventContext,
    pub event: SkillEvent,
    pub session_attributes: Map<String, Value>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("request body is not a valid request envelope: {0}")]
    Parse(String),
    #[error("{INTENT_REQUEST} `{request_id}` is missing the `intent` field")]
    MissingIntent { request_id: String },
    #[error("application id `{actual}` does not match the configured application id")]
    ApplicationIdMismatch { expected: String, actual: String },
}

impl From<EnvelopeError> for ApplicationError {
    fn from(value: EnvelopeError) -> Self {
        match value {
            EnvelopeError::Parse(_) | EnvelopeError::MissingIntent { .. } => {
                Self::MalformedRequest(value.to_string())
            }
            EnvelopeError::ApplicationIdMismatch { .. } => Self::Unauthorized(value.to_string()),
        }
    }
}

impl RequestEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self, EnvelopeError> {
        serde_json::from_slice(body).map_err(|error| EnvelopeError::Parse(error.to_string()))
    }

    /// Checks the addressed application and classifies the request type.
    pub fn into_event(
        self,
        expected_application_id: Option<&str>,
    ) -> Result<InboundEvent, EnvelopeError> {
        if let Some(expected) = expected_application_id {
            let actual = &self.session.application.application_id;
            if actual != expected {
                return Err(EnvelopeError::ApplicationIdMismatch {
                    expected: expected.to_owned(),
                    actual: actual.clone(),
                });
            }
        }

        let context = EventContext {
            correlation_id: self.request.request_id.clone(),
            session_id: self.session.session_id.clone(),
            new_session: self.session.is_new,
            locale: self.request.locale.clone(),
        };

        let event = match self.request.request_type.as_str() {
            LAUNCH_REQUEST => SkillEvent::Launch,
            INTENT_REQUEST => {
                let intent = self.request.intent.ok_or_else(|| EnvelopeError::MissingIntent {
                    request_id: self.request.request_id.clone(),
                })?;
                SkillEvent::Intent(intent)
            }
            SESSION_ENDED_REQUEST => SkillEvent::SessionEnded { reason: self.request.reason },
            other => SkillEvent::Unsupported { request_type: other.to_owned() },
        };

        Ok(InboundEvent { context, event, session_attributes: self.session.attributes })
    }
}

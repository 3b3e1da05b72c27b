use pokedex_core::response::SkillResponse;
use tracing::{info, warn};

use crate::{
    envelope::{EnvelopeError, InboundEvent, Intent, RequestEnvelope},
    speech::ResponseEnvelope,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkillEvent {
    Launch,
    Intent(Intent),
    SessionEnded { reason: Option<String> },
    Unsupported { request_type: String },
}

impl SkillEvent {
    pub fn label(&self) -> &str {
        match self {
            Self::Launch => "launch",
            Self::Intent(intent) => &intent.name,
            Self::SessionEnded { .. } => "session_ended",
            Self::Unsupported { request_type } => request_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    pub correlation_id: String,
    pub session_id: String,
    pub new_session: bool,
    pub locale: Option<String>,
}

impl Default for EventContext {
    fn default() -> Self {
        Self {
            correlation_id: "unknown-correlation-id".to_owned(),
            session_id: "unknown-session-id".to_owned(),
            new_session: true,
            locale: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerResult {
    Responded(SkillResponse),
    Processed,
    Ignored,
}

/// Capability interface a skill provides to the router.
pub trait Skill: Send + Sync {
    fn handle_launch(&self, ctx: &EventContext) -> SkillResponse;

    fn handle_intent(&self, intent: &Intent, ctx: &EventContext) -> SkillResponse;

    fn handle_session_end(&self, _reason: Option<&str>, _ctx: &EventContext) {}
}

pub struct SkillRouter<S> {
    skill: S,
}

impl<S> SkillRouter<S>
where
    S: Skill,
{
    pub fn new(skill: S) -> Self {
        Self { skill }
    }

    pub fn skill(&self) -> &S {
        &self.skill
    }

    pub fn route(&self, event: &SkillEvent, ctx: &EventContext) -> HandlerResult {
        match event {
            SkillEvent::Launch => HandlerResult::Responded(self.skill.handle_launch(ctx)),
            SkillEvent::Intent(intent) => {
                HandlerResult::Responded(self.skill.handle_intent(intent, ctx))
            }
            SkillEvent::SessionEnded { reason } => {
                self.skill.handle_session_end(reason.as_deref(), ctx);
                HandlerResult::Processed
            }
            SkillEvent::Unsupported { request_type } => {
                warn!(
                    event_name = "skill.event.unsupported",
                    correlation_id = %ctx.correlation_id,
                    session_id = %ctx.session_id,
                    request_type = %request_type,
                    "ignoring unsupported request type"
                );
                HandlerResult::Ignored
            }
        }
    }
}

/// Request envelope in, response envelope out.
pub struct SkillAdapter<S> {
    router: SkillRouter<S>,
    application_id: Option<String>,
}

impl<S> SkillAdapter<S>
where
    S: Skill,
{
    pub fn new(skill: S, application_id: Option<String>) -> Self {
        Self { router: SkillRouter::new(skill), application_id }
    }

    pub fn router(&self) -> &SkillRouter<S> {
        &self.router
    }

    pub fn handle_slice(&self, body: &[u8]) -> Result<ResponseEnvelope, EnvelopeError> {
        self.handle_envelope(RequestEnvelope::from_slice(body)?)
    }

    pub fn handle_envelope(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<ResponseEnvelope, EnvelopeError> {
        let InboundEvent { context, event, session_attributes } =
            envelope.into_event(self.application_id.as_deref())?;

        info!(
            event_name = "skill.event.received",
            correlation_id = %context.correlation_id,
            session_id = %context.session_id,
            new_session = context.new_session,
            locale = context.locale.as_deref().unwrap_or("unspecified"),
            event = %event.label(),
            "skill event received"
        );

        let envelope = match self.router.route(&event, &context) {
            HandlerResult::Responded(response) => {
                info!(
                    event_name = "skill.event.responded",
                    correlation_id = %context.correlation_id,
                    session_id = %context.session_id,
                    should_end_session = response.should_end_session,
                    "skill response produced"
                );
                ResponseEnvelope::from_response(&response, session_attributes)
            }
            HandlerResult::Processed | HandlerResult::Ignored => {
                ResponseEnvelope::empty(session_attributes)
            }
        };

        Ok(envelope)
    }
}

use std::sync::Arc;

use pokedex_core::{
    dictionary::MonsterDictionary,
    lookup::{LookupResolver, FOLLOW_UP_PROMPT},
    response::SkillResponse,
};
use tracing::{info, warn};

use crate::{
    envelope::Intent,
    events::{EventContext, Skill},
};

pub const MONSTER_INTENT: &str = "MonsterIntent";
pub const MONSTER_SLOT: &str = "Item";

pub const WELCOME_SPEECH: &str =
    "Welcome to the Alexadex. You can ask a question like, tell me about Pikachu.";
pub const WELCOME_REPROMPT: &str = "For instructions on what you can say, please say help me.";
pub const HELP_SPEECH: &str = "You can ask questions such as, tell me about Pikachu.";
pub const HELP_REPROMPT: &str = "You can say things like, tell me about Pikachu";
pub const FAREWELL_SPEECH: &str = "Goodbye";
pub const UNKNOWN_INTENT_SPEECH: &str =
    "Sorry, I didn't understand that request. What else can I help with?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PokedexIntent {
    Monster { item: Option<String> },
    Stop,
    Cancel,
    Help,
    Unknown { name: String },
}

pub fn classify_intent(intent: &Intent) -> PokedexIntent {
    match intent.name.as_str() {
        MONSTER_INTENT => {
            PokedexIntent::Monster { item: intent.slot_value(MONSTER_SLOT).map(str::to_owned) }
        }
        "AMAZON.StopIntent" | "Stop" => PokedexIntent::Stop,
        "AMAZON.CancelIntent" | "Cancel" => PokedexIntent::Cancel,
        "AMAZON.HelpIntent" | "Help" => PokedexIntent::Help,
        other => PokedexIntent::Unknown { name: other.to_owned() },
    }
}

pub fn welcome_response() -> SkillResponse {
    SkillResponse::ask(WELCOME_SPEECH, WELCOME_REPROMPT)
}

pub fn help_response() -> SkillResponse {
    SkillResponse::ask(HELP_SPEECH, HELP_REPROMPT)
}

pub fn farewell_response() -> SkillResponse {
    SkillResponse::tell(FAREWELL_SPEECH)
}

pub fn unknown_intent_response() -> SkillResponse {
    SkillResponse::ask(UNKNOWN_INTENT_SPEECH, FOLLOW_UP_PROMPT)
}

pub struct PokedexSkill {
    resolver: LookupResolver,
}

impl PokedexSkill {
    pub fn new(dictionary: Arc<MonsterDictionary>) -> Self {
        Self { resolver: LookupResolver::new(dictionary) }
    }

    fn lookup(&self, item: Option<&str>, ctx: &EventContext) -> SkillResponse {
        let outcome = self.resolver.resolve(item);
        info!(
            event_name = "skill.lookup.resolved",
            correlation_id = %ctx.correlation_id,
            session_id = %ctx.session_id,
            found = outcome.is_found(),
            "monster lookup resolved"
        );
        outcome.into_response()
    }
}

impl Skill for PokedexSkill {
    fn handle_launch(&self, _ctx: &EventContext) -> SkillResponse {
        welcome_response()
    }

    fn handle_intent(&self, intent: &Intent, ctx: &EventContext) -> SkillResponse {
        match classify_intent(intent) {
            PokedexIntent::Monster { item } => self.lookup(item.as_deref(), ctx),
            PokedexIntent::Stop | PokedexIntent::Cancel => farewell_response(),
            PokedexIntent::Help => help_response(),
            PokedexIntent::Unknown { name } => {
                warn!(
                    event_name = "skill.intent.unhandled",
                    correlation_id = %ctx.correlation_id,
                    session_id = %ctx.session_id,
                    intent = %name,
                    "no handler for intent"
                );
                unknown_intent_response()
            }
        }
    }

    fn handle_session_end(&self, reason: Option<&str>, ctx: &EventContext) {
        info!(
            event_name = "skill.session.ended",
            correlation_id = %ctx.correlation_id,
            session_id = %ctx.session_id,
            reason = reason.unwrap_or("unspecified"),
            "session ended"
        );
    }
}

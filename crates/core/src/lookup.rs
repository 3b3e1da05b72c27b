use std::sync::Arc;

use tracing::debug;

use crate::{dictionary::MonsterDictionary, response::SkillResponse};

pub const FOLLOW_UP_PROMPT: &str = "What else can I help with?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { name: String, description: String },
    Unknown { name: String },
    Missing,
}

impl LookupOutcome {
    pub fn into_response(self) -> SkillResponse {
        match self {
            Self::Found { name, description } => SkillResponse::tell_with_card(
                description.clone(),
                format!("Information for {name}"),
                description,
            ),
            Self::Unknown { name } => SkillResponse::ask(
                format!(
                    "I'm sorry, I currently do not know the Pokemon named {name}. {FOLLOW_UP_PROMPT}"
                ),
                FOLLOW_UP_PROMPT,
            ),
            Self::Missing => SkillResponse::ask(
                format!("I'm sorry, I currently do not know that Pokemon. {FOLLOW_UP_PROMPT}"),
                FOLLOW_UP_PROMPT,
            ),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Candidate dictionary key for a slot value, or `None` when the slot is absent or empty.
/// Matching is exact apart from case, so surrounding whitespace is kept.
pub fn normalize_monster_name(slot_value: Option<&str>) -> Option<String> {
    let value = slot_value?;
    if value.is_empty() {
        return None;
    }
    Some(value.to_lowercase())
}

#[derive(Clone, Debug)]
pub struct LookupResolver {
    dictionary: Arc<MonsterDictionary>,
}

impl LookupResolver {
    pub fn new(dictionary: Arc<MonsterDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn resolve(&self, slot_value: Option<&str>) -> LookupOutcome {
        let Some(name) = normalize_monster_name(slot_value) else {
            debug!(event_name = "lookup.missing_slot", "monster slot absent or empty");
            return LookupOutcome::Missing;
        };

        match self.dictionary.get(&name) {
            Some(description) => {
                LookupOutcome::Found { description: description.to_owned(), name }
            }
            None => {
                debug!(event_name = "lookup.unknown", monster = %name, "monster not in dictionary");
                LookupOutcome::Unknown { name }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{normalize_monster_name, LookupOutcome, LookupResolver};
    use crate::dictionary::MonsterDictionary;

    const PIKACHU: &str = "Pikachu is an Electric-type Pokémon.";

    fn resolver() -> LookupResolver {
        let dictionary =
            MonsterDictionary::from_entries([("pikachu", PIKACHU)]).expect("dictionary");
        LookupResolver::new(Arc::new(dictionary))
    }

    #[test]
    fn found_lookup_is_case_insensitive() {
        let resolver = resolver();

        for variant in ["pikachu", "PIKACHU", "PiKaChU"] {
            let response = resolver.resolve(Some(variant)).into_response();
            assert_eq!(response.speech, PIKACHU);
            assert_eq!(response.card_title.as_deref(), Some("Information for pikachu"));
            assert_eq!(response.card_content.as_deref(), Some(PIKACHU));
            assert!(response.should_end_session);
        }
    }

    #[test]
    fn unknown_monster_keeps_session_open_and_names_it() {
        let response = resolver().resolve(Some("bulbasaur")).into_response();

        assert_eq!(
            response.speech,
            "I'm sorry, I currently do not know the Pokemon named bulbasaur. What else can I help with?"
        );
        assert_eq!(response.reprompt_speech.as_deref(), Some("What else can I help with?"));
        assert!(!response.should_end_session);
        assert!(response.card_title.is_none());
    }

    #[test]
    fn unknown_monster_speech_uses_lowercased_name() {
        let response = resolver().resolve(Some("MissingNo")).into_response();
        assert!(response.speech.contains("named missingno."));
    }

    #[test]
    fn missing_or_empty_slot_yields_generic_apology() {
        let resolver = resolver();

        for slot in [None, Some("")] {
            let outcome = resolver.resolve(slot);
            assert_eq!(outcome, LookupOutcome::Missing);

            let response = outcome.into_response();
            assert_eq!(
                response.speech,
                "I'm sorry, I currently do not know that Pokemon. What else can I help with?"
            );
            assert!(!response.should_end_session);
        }
    }

    #[test]
    fn normalization_lowercases_without_trimming() {
        assert_eq!(normalize_monster_name(Some("Mr. Mime")).as_deref(), Some("mr. mime"));
        assert_eq!(normalize_monster_name(Some(" Pikachu ")).as_deref(), Some(" pikachu "));
        assert_eq!(normalize_monster_name(Some("   ")).as_deref(), Some("   "));
        assert_eq!(normalize_monster_name(Some("")), None);
        assert_eq!(normalize_monster_name(None), None);
    }

    #[test]
    fn padded_name_is_unknown_and_echoed_in_apology() {
        let resolver = resolver();

        let outcome = resolver.resolve(Some(" Pikachu "));
        assert_eq!(outcome, LookupOutcome::Unknown { name: " pikachu ".to_owned() });
        let response = outcome.into_response();
        assert_eq!(
            response.speech,
            "I'm sorry, I currently do not know the Pokemon named  pikachu . What else can I help with?"
        );
        assert!(!response.should_end_session);

        let response = resolver.resolve(Some("   ")).into_response();
        assert_eq!(
            response.speech,
            "I'm sorry, I currently do not know the Pokemon named    . What else can I help with?"
        );
        assert!(!response.should_end_session);
    }

    #[test]
    fn bundled_dictionary_resolves_multi_word_names() {
        let resolver = LookupResolver::new(Arc::new(
            MonsterDictionary::bundled().expect("bundled dictionary"),
        ));
        assert!(resolver.resolve(Some("Mr. Mime")).is_found());
    }
}

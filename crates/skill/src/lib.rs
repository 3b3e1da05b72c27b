//! Voice platform adapter and the Pokedex skill.
//!
//! - **Envelope** (`envelope`) - inbound request envelope parsing and validation
//! - **Events** (`events`) - the `Skill` capability trait, `SkillRouter`, and `SkillAdapter`
//! - **Intents** (`intents`) - intent classification and the Pokedex handlers
//! - **Speech** (`speech`) - outbound response envelope rendering
//!
//! # Architecture
//!
//! ```text
//! Request JSON → RequestEnvelope → SkillEvent → SkillRouter → PokedexSkill → LookupResolver
//!                                                    ↓
//!                        ResponseEnvelope ← SkillResponse
//! ```

pub mod envelope;
pub mod events;
pub mod intents;
pub mod speech;

pub use envelope::{EnvelopeError, InboundEvent, Intent, RequestEnvelope, Slot};
pub use events::{EventContext, HandlerResult, Skill, SkillAdapter, SkillEvent, SkillRouter};
pub use intents::{classify_intent, PokedexIntent, PokedexSkill};
pub use speech::{Card, OutputSpeech, ResponseEnvelope};

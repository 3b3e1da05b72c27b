pub mod config;
pub mod dictionary;
pub mod errors;
pub mod lookup;
pub mod response;

pub use dictionary::{DictionaryError, MonsterDictionary};
pub use errors::{ApplicationError, InterfaceError};
pub use lookup::{normalize_monster_name, LookupOutcome, LookupResolver};
pub use response::SkillResponse;

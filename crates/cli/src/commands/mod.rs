pub mod config;
pub mod doctor;
pub mod invoke;
pub mod lookup;

use pokedex_core::config::{AppConfig, LoadOptions};
use pokedex_core::dictionary::MonsterDictionary;
use serde::Serialize;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_DICTIONARY: u8 = 3;
pub const EXIT_IO: u8 = 4;
pub const EXIT_INVALID_REQUEST: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Pretty JSON of `value` on success; a `serialization` failure otherwise.
    pub fn json<T: Serialize>(command: &str, value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }
}

/// Loads config and dictionary, mapping failures to the shared exit codes.
pub(crate) fn load_runtime(command: &str) -> Result<(AppConfig, MonsterDictionary), CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(command, "config_validation", error.to_string(), EXIT_CONFIG)
    })?;
    let dictionary = config.skill.load_dictionary().map_err(|error| {
        CommandResult::failure(command, "dictionary_load", error.to_string(), EXIT_DICTIONARY)
    })?;
    Ok((config, dictionary))
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

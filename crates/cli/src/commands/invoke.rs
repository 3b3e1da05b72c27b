use std::fs;
use std::path::Path;
use std::sync::Arc;

use pokedex_skill::{PokedexSkill, SkillAdapter};

use crate::commands::{load_runtime, CommandResult, EXIT_INVALID_REQUEST, EXIT_IO};

pub fn run(path: &Path) -> CommandResult {
    let body = match fs::read(path) {
        Ok(body) => body,
        Err(error) => {
            return CommandResult::failure(
                "invoke",
                "io",
                format!("could not read `{}`: {error}", path.display()),
                EXIT_IO,
            )
        }
    };

    let (config, dictionary) = match load_runtime("invoke") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let adapter =
        SkillAdapter::new(PokedexSkill::new(Arc::new(dictionary)), config.skill.application_id);
    match adapter.handle_slice(&body) {
        Ok(envelope) => CommandResult::json("invoke", &envelope),
        Err(error) => CommandResult::failure(
            "invoke",
            "invalid_request",
            error.to_string(),
            EXIT_INVALID_REQUEST,
        ),
    }
}

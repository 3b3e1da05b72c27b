use pokedex_core::lookup::LookupResolver;
use std::sync::Arc;

use crate::commands::{load_runtime, CommandResult};

pub fn run(name: &str) -> CommandResult {
    let (_, dictionary) = match load_runtime("lookup") {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let response = LookupResolver::new(Arc::new(dictionary)).resolve(Some(name)).into_response();
    CommandResult::json("lookup", &response)
}

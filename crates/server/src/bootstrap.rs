use std::sync::Arc;

use pokedex_core::config::AppConfig;
use pokedex_core::dictionary::{DictionaryError, MonsterDictionary};
use pokedex_skill::{PokedexSkill, SkillAdapter};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub dictionary: Arc<MonsterDictionary>,
    pub adapter: Arc<SkillAdapter<PokedexSkill>>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("dictionary load failed: {0}")]
    Dictionary(#[from] DictionaryError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let dictionary = Arc::new(config.skill.load_dictionary()?);
    let source = match &config.skill.dictionary_path {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    };
    info!(
        event_name = "system.bootstrap.dictionary_loaded",
        correlation_id = "bootstrap",
        entries = dictionary.len(),
        source = %source,
        "monster dictionary loaded"
    );

    let adapter = Arc::new(SkillAdapter::new(
        PokedexSkill::new(Arc::clone(&dictionary)),
        config.skill.application_id.clone(),
    ));

    Ok(Application { config, dictionary, adapter })
}

use std::env;
use std::fs;
use std::path::Path;

use pokedex_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG};

struct Field {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                error.to_string(),
                EXIT_CONFIG,
            )
        }
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, &field.value, source));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

fn fields(config: &AppConfig) -> Vec<Field> {
    vec![
        Field {
            key_path: "server.bind_address",
            env_keys: &["POKEDEX_SERVER_BIND_ADDRESS"],
            value: config.server.bind_address.clone(),
        },
        Field {
            key_path: "server.port",
            env_keys: &["POKEDEX_SERVER_PORT"],
            value: config.server.port.to_string(),
        },
        Field {
            key_path: "server.graceful_shutdown_secs",
            env_keys: &["POKEDEX_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: config.server.graceful_shutdown_secs.to_string(),
        },
        Field {
            key_path: "skill.application_id",
            env_keys: &["POKEDEX_SKILL_APPLICATION_ID"],
            value: config.skill.application_id.clone().unwrap_or_else(|| "<any>".to_string()),
        },
        Field {
            key_path: "skill.dictionary_path",
            env_keys: &["POKEDEX_SKILL_DICTIONARY_PATH"],
            value: config
                .skill
                .dictionary_path
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<bundled>".to_string()),
        },
        Field {
            key_path: "logging.level",
            env_keys: &["POKEDEX_LOGGING_LEVEL", "POKEDEX_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Field {
            key_path: "logging.format",
            env_keys: &["POKEDEX_LOGGING_FORMAT", "POKEDEX_LOG_FORMAT"],
            value: format!("{:?}", config.logging.format),
        },
    ]
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use super::{contains_path, render_line};

    #[test]
    fn contains_path_walks_nested_tables() {
        let doc = "[skill]\napplication_id = \"amzn1.ask.skill.x\"\n"
            .parse::<toml::Value>()
            .expect("toml");

        assert!(contains_path(&doc, "skill.application_id"));
        assert!(!contains_path(&doc, "skill.dictionary_path"));
        assert!(!contains_path(&doc, "server.port"));
    }

    #[test]
    fn render_line_includes_source() {
        assert_eq!(
            render_line("server.port", "8080", "default".to_string()),
            "- server.port = 8080 (source: default)"
        );
    }
}

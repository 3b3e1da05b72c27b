use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const BUNDLED_MONSTERS: &str = include_str!("../data/monsters.toml");
const BUNDLED_SOURCE: &str = "<bundled monsters.toml>";

/// Read-only mapping from lowercase monster name to its spoken description.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterDictionary {
    entries: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse dictionary `{source_name}`: {message}")]
    Parse { source_name: String, message: String },
    #[error("dictionary contains an entry with an empty name")]
    EmptyName,
    #[error("dictionary entry `{name}` has an empty description")]
    EmptyDescription { name: String },
    #[error("dictionary entry `{name}` collides with an existing entry after lowercasing")]
    DuplicateName { name: String },
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    monsters: BTreeMap<String, String>,
}

impl MonsterDictionary {
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut normalized = BTreeMap::new();
        for (name, description) in entries {
            let key = name.as_ref().trim().to_lowercase();
            if key.is_empty() {
                return Err(DictionaryError::EmptyName);
            }

            let description = description.into();
            if description.trim().is_empty() {
                return Err(DictionaryError::EmptyDescription { name: key });
            }

            if normalized.contains_key(&key) {
                return Err(DictionaryError::DuplicateName { name: key });
            }
            normalized.insert(key, description);
        }

        Ok(Self { entries: normalized })
    }

    /// Dictionary compiled into the binary from `data/monsters.toml`.
    pub fn bundled() -> Result<Self, DictionaryError> {
        parse_toml(BUNDLED_MONSTERS, BUNDLED_SOURCE)
    }

    /// Loads a replacement dictionary. `.json` files hold a flat object of name to
    /// description; anything else is TOML with a `[monsters]` table.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| DictionaryError::ReadFile { path: path.to_path_buf(), source })?;
        let source_name = path.display().to_string();

        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        if is_json {
            parse_json(&raw, &source_name)
        } else {
            parse_toml(&raw, &source_name)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn parse_toml(raw: &str, source_name: &str) -> Result<MonsterDictionary, DictionaryError> {
    let file = toml::from_str::<DictionaryFile>(raw).map_err(|error| DictionaryError::Parse {
        source_name: source_name.to_owned(),
        message: error.to_string(),
    })?;
    MonsterDictionary::from_entries(file.monsters)
}

fn parse_json(raw: &str, source_name: &str) -> Result<MonsterDictionary, DictionaryError> {
    let entries = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw)
        .map_err(|error| DictionaryError::Parse {
            source_name: source_name.to_owned(),
            message: error.to_string(),
        })?;

    let mut pairs = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let serde_json::Value::String(description) = value else {
            return Err(DictionaryError::Parse {
                source_name: source_name.to_owned(),
                message: format!("entry `{name}` must be a string"),
            });
        };
        pairs.push((name, description));
    }

    MonsterDictionary::from_entries(pairs)
}

//! Message catalogs and translation.
//!
//! Catalogs are flat JSON objects mapping a source string to its
//! translation, one file per language (`messages-<lang>.json`). English and
//! Polish ship embedded in the binary; more can be loaded from a directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/messages-en.json")),
    ("pl", include_str!("../../i18n/messages-pl.json")),
];

pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors raised while loading catalogs or switching language.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog for '{language}': {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No catalog loaded for language '{language}'")]
    UnknownLanguage { language: String },
}

/// Looks up the display string for a message key.
pub trait Translator: Send + Sync {
    fn tr(&self, key: &str) -> String;
}

type Catalog = HashMap<String, String>;

/// Per-language catalogs plus the active language.
///
/// Unknown keys translate to themselves, so a missing entry degrades to the
/// English source string instead of failing.
#[derive(Debug, Clone)]
pub struct I18nManager {
    catalogs: HashMap<String, Catalog>,
    language: String,
}

impl I18nManager {
    /// Manager with the embedded catalogs, set to `language`.
    pub fn builtin(language: &str) -> Result<Self, I18nError> {
        let mut manager = Self {
            catalogs: HashMap::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        };
        for (lang, json) in BUILTIN_CATALOGS {
            manager.add_catalog(lang, json)?;
        }
        manager.set_language(language)?;
        Ok(manager)
    }

    /// Parse `json` and register it for `language`, replacing any earlier
    /// catalog for that language.
    pub fn add_catalog(&mut self, language: &str, json: &str) -> Result<(), I18nError> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|e| I18nError::Parse {
            language: language.to_string(),
            source: e,
        })?;
        tracing::debug!(language, entries = catalog.len(), "Loaded message catalog");
        self.catalogs.insert(language.to_string(), catalog);
        Ok(())
    }

    /// Load every `messages-<lang>.json` in `dir`. Returns how many were loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, I18nError> {
        let read_err = |e| I18nError::Read {
            path: dir.to_path_buf(),
            source: e,
        };

        let mut loaded = 0;
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            let Some(language) = catalog_language(&path) else {
                continue;
            };
            let json = fs::read_to_string(&path).map_err(|e| I18nError::Read {
                path: path.clone(),
                source: e,
            })?;
            self.add_catalog(&language, &json)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn set_language(&mut self, language: &str) -> Result<(), I18nError> {
        if !self.catalogs.contains_key(language) {
            return Err(I18nError::UnknownLanguage {
                language: language.to_string(),
            });
        }
        self.language = language.to_string();
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Languages with a loaded catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }
}

impl Translator for I18nManager {
    fn tr(&self, key: &str) -> String {
        self.catalogs
            .get(&self.language)
            .and_then(|catalog| catalog.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// `messages-pl.json` -> `pl`.
fn catalog_language(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let language = name.strip_prefix("messages-")?.strip_suffix(".json")?;
    (!language.is_empty()).then(|| language.to_string())
}

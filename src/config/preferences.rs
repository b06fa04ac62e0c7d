//! The one value kept between sessions: the UI language.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{ConfigError, Result};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "lang")]
    pub language: Option<Language>,
}

/// JSON-backed preference file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; a missing file means no preferences yet
    pub fn load(&self) -> Result<Preferences> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(source) => return Err(ConfigError::Io { path: self.path.clone(), source }),
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let content = serde_json::to_string_pretty(prefs).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Saved language, else the OS locale. Read failures are logged and
    /// fall back to the locale.
    pub fn preferred_language(&self) -> Language {
        match self.load() {
            Ok(Preferences { language: Some(lang) }) => lang,
            Ok(_) => Language::detect_from_env(),
            Err(err) => {
                log::warn!("ignoring preferences: {err}");
                Language::detect_from_env()
            }
        }
    }

    /// Persist the language; failures are logged and otherwise ignored
    pub fn remember_language(&self, language: Language) {
        let prefs = Preferences { language: Some(language) };
        if let Err(err) = self.save(&prefs) {
            log::warn!("could not save language preference: {err}");
        }
    }
}

//! String localization
//!
//! Hardcoded strings double as their own lookup keys; a missing translation
//! returns the key, so `localize` never fails.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::{defaults, demo, paths};

/// Total lookup from (key, language) to display text
pub trait Localizer {
    fn localize(&self, key: &str, language: &str) -> String;
}

/// language → key → text
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    tables: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translations shipped with the binary for the hardcoded strings
    pub fn builtin() -> Self {
        let mut table = Self::new();
        let entries: [(&str, &str, &str); 8] = [
            ("en", defaults::MAIN_HEADER, "Your device requires a security update"),
            ("en", demo::MAIN_HEADER, "Your device requires a security update (Demo Mode)"),
            ("fr", defaults::MAIN_HEADER, "Votre appareil nécessite une mise à jour de sécurité"),
            (
                "fr",
                demo::MAIN_HEADER,
                "Votre appareil nécessite une mise à jour de sécurité (Mode démo)",
            ),
            ("de", defaults::MAIN_HEADER, "Ihr Gerät benötigt ein Sicherheitsupdate"),
            ("de", demo::MAIN_HEADER, "Ihr Gerät benötigt ein Sicherheitsupdate (Demomodus)"),
            ("es", defaults::MAIN_HEADER, "Tu dispositivo requiere una actualización de seguridad"),
            (
                "es",
                demo::MAIN_HEADER,
                "Tu dispositivo requiere una actualización de seguridad (modo de demostración)",
            ),
        ];
        for (language, key, text) in entries {
            table.insert(language, key, text);
        }
        table
    }

    /// Default location of an optional user string table
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(paths::APP_DIR);
        path.push(paths::STRINGS_FILENAME);
        path
    }

    pub fn insert(&mut self, language: &str, key: &str, text: &str) {
        self.tables
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    /// Layer a JSON table (`{"fr": {"key": "text"}}`) over the current entries
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read string table from {:?}", path))?;

        let extra: HashMap<String, HashMap<String, String>> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse string table {:?}", path))?;

        let languages = extra.len();
        for (language, entries) in extra {
            self.tables.entry(language).or_default().extend(entries);
        }

        info!(path = %path.display(), languages = languages, "Merged string table");
        Ok(())
    }
}

impl Localizer for StringTable {
    fn localize(&self, key: &str, language: &str) -> String {
        match self.tables.get(language).and_then(|t| t.get(key)) {
            Some(text) => text.clone(),
            None => {
                debug!(key = key, language = language, "No translation, using key");
                key.to_string()
            }
        }
    }
}

//! Translation lookup for user-facing labels.
//!
//! Lookups never fail: a missing locale or key degrades to the key itself,
//! so untranslated sites still render readable labels.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Resolves a label key to its translated text.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// Translator that echoes every key back unchanged.
///
/// Useful as a default for sites without a translations file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Locale -> key -> text lookup table, loaded from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationTable {
    /// Load the table from a JSON file shaped like
    /// `{"fr": {"News": "Actualités"}}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid translations file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse translations JSON")
    }

    /// View of the table bound to one locale.
    pub fn for_locale<'a>(&'a self, locale: &'a str) -> LocaleTranslator<'a> {
        LocaleTranslator {
            table: self,
            locale,
        }
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.entries.get(locale)?.get(key).map(String::as_str)
    }
}

/// `Translator` over one locale of a `TranslationTable`.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTranslator<'a> {
    table: &'a TranslationTable,
    locale: &'a str,
}

impl Translator for LocaleTranslator<'_> {
    fn translate(&self, key: &str) -> String {
        match self.table.lookup(self.locale, key) {
            Some(text) => text.to_string(),
            None => {
                debug!("No {} translation for {:?}, echoing key", self.locale, key);
                key.to_string()
            }
        }
    }
}

/// Uppercase the first letter of `s`, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

use crate::pages::PageRoute;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Runtime configuration for the server binary, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub settings_file: String,
    pub translations_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            settings_file: std::env::var("SITE_SETTINGS_FILE")
                .context("SITE_SETTINGS_FILE not set")?,

            translations_file: std::env::var("TRANSLATIONS_FILE").ok(),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }
}

/// Raised when loaded site settings violate a structural invariant.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no locales configured; at least one locale is required")]
    NoLocales,
}

/// Per-locale settings. The first entry in `SiteSettings::locales` is the
/// main locale; `status` controls whether the locale is publicly enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleSettings {
    pub code: String,

    #[serde(default = "default_true")]
    pub status: bool,

    #[serde(default)]
    pub website_title: Option<String>,

    #[serde(default)]
    pub website_baseline: Option<String>,
}

/// Site-wide settings, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_locale_code")]
    pub default_locale: String,

    #[serde(default = "default_locale_code")]
    pub fallback_locale: String,

    /// Force the locale prefix into the home URL even for the main locale.
    #[serde(default)]
    pub main_locale_in_url: bool,

    /// Whether the public locale chooser is shown.
    #[serde(default)]
    pub locale_chooser: bool,

    /// First path segment of the back-office area.
    #[serde(default = "default_admin_segment")]
    pub admin_segment: String,

    /// Root directory holding page view templates.
    #[serde(default = "default_views_root")]
    pub views_root: String,

    /// Subdirectory of `views_root` holding selectable page templates.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Secondary template directory used when the primary one is missing.
    #[serde(default)]
    pub template_fallback_dir: Option<String>,

    /// Logo image filename, when the site has one.
    #[serde(default)]
    pub image: Option<String>,

    /// Ordered locale list; must not be empty.
    pub locales: Vec<LocaleSettings>,

    /// Module name -> capability tags (see `crate::modules`).
    #[serde(default)]
    pub modules: BTreeMap<String, Vec<String>>,

    /// Module name -> permission names, for the back-office permission UI.
    #[serde(default)]
    pub permissions: BTreeMap<String, Vec<String>>,

    /// Pages linked to modules, built externally and loaded as data.
    #[serde(default)]
    pub pages: Vec<PageRoute>,
}

impl SiteSettings {
    /// Load and validate settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid settings file {}", path.display()))
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(raw).context("Failed to parse site settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check structural invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.locales.is_empty() {
            return Err(SettingsError::NoLocales);
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_locale_code() -> String {
    "en".to_string()
}

fn default_admin_segment() -> String {
    "admin".to_string()
}

fn default_views_root() -> String {
    "resources/views".to_string()
}

fn default_template_dir() -> String {
    "public".to_string()
}

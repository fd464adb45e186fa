//! Locale registry: ordered view of the locales a site serves.
//!
//! The registry is built once from `SiteSettings` and stays immutable for
//! the life of the process. Order matters: the first configured locale is
//! the main locale of the site.

use crate::config::SiteSettings;

/// Configuration for a single site locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Short locale code (e.g. "en", "fr").
    pub code: String,

    /// Whether the locale is publicly enabled.
    pub status: bool,

    /// Website title shown for this locale, when set.
    pub website_title: Option<String>,

    /// Website baseline (tagline) shown for this locale, when set.
    pub website_baseline: Option<String>,
}

/// Ordered, read-only collection of the site's locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

impl LocaleRegistry {
    /// Build the registry from loaded site settings, preserving order.
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            locales: settings
                .locales
                .iter()
                .map(|locale| LocaleConfig {
                    code: locale.code.clone(),
                    status: locale.status,
                    website_title: locale.website_title.clone(),
                    website_baseline: locale.website_baseline.clone(),
                })
                .collect(),
        }
    }

    /// The main locale: first in the configured list.
    ///
    /// The main locale is usable even when its status flag is off.
    ///
    /// # Panics
    /// Panics if the registry is empty. `SiteSettings` validation rejects
    /// empty locale lists, so this indicates a configuration error.
    pub fn main_locale(&self) -> &str {
        &self
            .locales
            .first()
            .expect("locale registry must not be empty")
            .code
    }

    /// Get a locale configuration by its code.
    pub fn get(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in configured order, including disabled ones.
    pub fn all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Codes of all enabled locales, in configured order.
    pub fn enabled_locales(&self) -> Vec<&str> {
        self.locales
            .iter()
            .filter(|locale| locale.status)
            .map(|locale| locale.code.as_str())
            .collect()
    }

    /// Whether `code` is one of the enabled locales.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.enabled_locales().contains(&code)
    }

    /// Website title for `code`, when configured.
    pub fn website_title(&self, code: &str) -> Option<&str> {
        self.get(code)?.website_title.as_deref()
    }

    /// Website baseline for `code`, when configured.
    pub fn website_baseline(&self, code: &str) -> Option<&str> {
        self.get(code)?.website_baseline.as_deref()
    }
}

//! Internationalization (i18n) module for multi-locale sites.
//!
//! This module provides the locale-related building blocks of the crate:
//! which locales a site serves, which of them are publicly enabled, and how
//! user-facing labels are translated.
//!
//! # Architecture
//!
//! - `registry`: ordered locale list built from site settings, with status
//!   and per-locale website metadata
//! - `translate`: translation lookup (trait + JSON-backed table) and label
//!   helpers
//!
//! Locales are plain short codes ("en", "fr"); the registry is an explicit
//! value passed to whoever needs it rather than ambient global state.

mod registry;
mod translate;

pub use registry::{LocaleConfig, LocaleRegistry};
pub use translate::{capitalize, LocaleTranslator, NoTranslations, TranslationTable, Translator};

//! Module capability listings and site identity helpers.
//!
//! Modules are configuration entries (name -> capability tags); nothing
//! here is discovered at runtime. Capability tags are plain strings so
//! settings files stay readable.

use crate::i18n::capitalize;
use crate::links::Site;
use crate::routing::feed_route_name;
use serde::Serialize;
use std::collections::BTreeMap;

/// Capability tag: the module can be linked to a content page.
pub const LINKABLE_TO_PAGE: &str = "linkable_to_page";

/// Capability tag: the module publishes a feed.
pub const HAS_FEED: &str = "has_feed";

/// A feed link, ready for a `<link rel="alternate">` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub url: String,
    pub title: String,
}

impl Site<'_> {
    /// All configured modules with their capability tags, key-sorted.
    pub fn modules_sorted(&self) -> &BTreeMap<String, Vec<String>> {
        &self.settings.modules
    }

    /// Select options for "link a page to a module": only modules carrying
    /// [`LINKABLE_TO_PAGE`], labeled through the translator and sorted by
    /// label, with a leading empty option.
    pub fn modules_for_select(&self) -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = self
            .settings
            .modules
            .iter()
            .filter(|(_, capabilities)| capabilities.iter().any(|c| c == LINKABLE_TO_PAGE))
            .map(|(module, _)| {
                (
                    module.clone(),
                    self.translator.translate(&capitalize(module)),
                )
            })
            .collect();
        options.sort_by(|a, b| a.1.cmp(&b.1));

        let mut select = Vec::with_capacity(options.len() + 1);
        select.push((String::new(), String::new()));
        select.extend(options);
        select
    }

    /// Permission lists keyed by translated module label, sorted by label.
    pub fn permissions(&self) -> BTreeMap<String, Vec<String>> {
        self.settings
            .permissions
            .iter()
            .map(|(module, perms)| {
                (
                    self.translator.translate(&capitalize(module)),
                    perms.clone(),
                )
            })
            .collect()
    }

    /// Whether the site has a logo image configured.
    pub fn has_logo(&self) -> bool {
        self.settings
            .image
            .as_deref()
            .map_or(false, |image| !image.is_empty())
    }

    /// Website title for `locale`, defaulting to the active locale.
    pub fn title(&self, locale: Option<&str>) -> Option<&str> {
        self.locales
            .website_title(locale.unwrap_or(self.active_locale))
    }

    /// Website baseline for `locale`, defaulting to the active locale.
    pub fn baseline(&self, locale: Option<&str>) -> Option<&str> {
        self.locales
            .website_baseline(locale.unwrap_or(self.active_locale))
    }

    /// Feed links of the active locale: one entry per feed-capable module
    /// whose feed route exists. Modules without a registered feed route are
    /// silently skipped.
    pub fn feeds(&self) -> Vec<Feed> {
        self.settings
            .modules
            .iter()
            .filter(|(_, capabilities)| capabilities.iter().any(|c| c == HAS_FEED))
            .filter_map(|(module, _)| {
                let url = self
                    .router
                    .resolve(&feed_route_name(self.active_locale, module))?;
                let label = self
                    .translator
                    .translate(&format!("{} feed", capitalize(module)));
                let title = match self.title(None) {
                    Some(site_title) => format!("{} – {}", label, site_title),
                    None => label,
                };
                Some(Feed { url, title })
            })
            .collect()
    }
}

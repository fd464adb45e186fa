//! Locale-aware link resolution.
//!
//! [`Site`] is the request-scoped view gluing the pieces together: site
//! settings, locale registry, page table, translation lookup, the current
//! request's router, and at most one bound content entity. Further
//! operations (module listings, template discovery) live in their own
//! modules as additional `impl Site` blocks.
//!
//! All URL computations degrade to a locale-root path rather than erroring
//! when a route is unknown.

use crate::config::SiteSettings;
use crate::i18n::{LocaleRegistry, Translator};
use crate::menu::{render_languages_menu, MenuEntry};
use crate::pages::{PageRoute, PageTable};
use crate::routing::{public_route_name, swap_locale_segment, Router};
use tracing::debug;

/// Content entity a link-building call can be contextualized to.
pub trait Linkable {
    /// Whether the entity has a persisted identity. Entities without one
    /// have no stable URL and are ignored during link resolution.
    fn has_identity(&self) -> bool;

    /// Public URL of the entity in the given locale.
    fn localized_url(&self, locale: &str) -> String;

    /// Back-office edit URL of the entity.
    fn admin_edit_url(&self) -> String;

    /// Back-office listing URL of the entity's module.
    fn admin_index_url(&self) -> String;
}

/// Request-scoped site helper.
///
/// Cheap to construct: everything is borrowed from process-wide state
/// except the optional entity binding, which lasts for this value's
/// lifetime only.
#[derive(Clone, Copy)]
pub struct Site<'a> {
    pub(crate) settings: &'a SiteSettings,
    pub(crate) locales: &'a LocaleRegistry,
    pub(crate) pages: &'a PageTable,
    pub(crate) router: &'a dyn Router,
    pub(crate) translator: &'a dyn Translator,
    pub(crate) active_locale: &'a str,
    entity: Option<&'a dyn Linkable>,
}

impl<'a> Site<'a> {
    pub fn new(
        settings: &'a SiteSettings,
        locales: &'a LocaleRegistry,
        pages: &'a PageTable,
        router: &'a dyn Router,
        translator: &'a dyn Translator,
        active_locale: &'a str,
    ) -> Self {
        Self {
            settings,
            locales,
            pages,
            router,
            translator,
            active_locale,
            entity: None,
        }
    }

    /// Bind a content entity for the duration of this resolver.
    pub fn with_entity(mut self, entity: &'a dyn Linkable) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn settings(&self) -> &SiteSettings {
        self.settings
    }

    pub fn locales(&self) -> &LocaleRegistry {
        self.locales
    }

    pub fn active_locale(&self) -> &str {
        self.active_locale
    }

    /// The bound entity, when it has a persisted identity.
    pub(crate) fn bound_entity(&self) -> Option<&dyn Linkable> {
        self.entity.filter(|entity| entity.has_identity())
    }

    /// URL of the site home.
    ///
    /// The main locale is appended when settings force the locale into the
    /// URL, or when the main locale differs from the application default.
    pub fn home_url(&self) -> String {
        let main = self.locales.main_locale();
        if self.settings.main_locale_in_url || main != self.settings.default_locale {
            format!("/{}", main)
        } else {
            "/".to_string()
        }
    }

    /// URL of the current content in `locale`.
    ///
    /// A bound entity resolves through its own localized URL. Otherwise the
    /// current route name is rewritten to `locale` and resolved; anything
    /// unresolvable falls back to the locale root.
    pub fn resolve_localized_url(&self, locale: &str) -> String {
        if let Some(entity) = self.bound_entity() {
            return entity.localized_url(locale);
        }

        if self.router.current_route_path() != "/" {
            if let Some(name) = self.router.current_route_name() {
                let swapped = swap_locale_segment(name, locale);
                if swapped == locale {
                    return format!("/{}", locale);
                }
                if let Some(url) = self.router.resolve(&swapped) {
                    return url;
                }
                debug!(
                    "No {:?} counterpart for route {:?}, falling back to locale root",
                    locale, name
                );
            }
        }

        format!("/{}", locale)
    }

    /// URL of the public counterpart of the current (typically back-office)
    /// route, in the active locale.
    pub fn current_public_url(&self) -> String {
        let name = self.router.current_route_name().unwrap_or("");
        let target = public_route_name(name, self.active_locale);
        if let Some(url) = self.router.resolve(&target) {
            return url;
        }

        let plain_root = self.bound_entity().is_none()
            && !self.settings.locale_chooser
            && self.active_locale == self.settings.fallback_locale
            && !self.settings.main_locale_in_url;
        if plain_root {
            "/".to_string()
        } else {
            format!("/{}", self.active_locale)
        }
    }

    /// Languages menu for all enabled locales, rendered as HTML.
    pub fn languages_menu(&self, attributes: &[(&str, &str)]) -> String {
        let entries: Vec<MenuEntry> = self
            .locales
            .enabled_locales()
            .into_iter()
            .map(|locale| MenuEntry {
                locale: locale.to_string(),
                url: self.resolve_localized_url(locale),
                active: locale == self.active_locale,
            })
            .collect();
        render_languages_menu(&entries, attributes)
    }

    /// Whether the current request is inside the back-office area.
    pub fn is_admin_context(&self) -> bool {
        first_path_segment(self.router.current_route_path()) == self.settings.admin_segment
    }

    /// All pages linked to `module` (case-insensitive), in table order.
    pub fn pages_for_module(&self, module: &str) -> Vec<&PageRoute> {
        self.pages.pages_for_module(module)
    }

    /// First page linked to `module`, if any.
    pub fn page_for_module(&self, module: &str) -> Option<&PageRoute> {
        self.pages.page_for_module(module)
    }

    /// Back-office edit URL of the bound entity, when one is bound.
    pub fn admin_edit_url(&self) -> Option<String> {
        self.bound_entity().map(|entity| entity.admin_edit_url())
    }

    /// Back-office listing URL of the bound entity's module, when one is
    /// bound.
    pub fn admin_index_url(&self) -> Option<String> {
        self.bound_entity().map(|entity| entity.admin_index_url())
    }
}

fn first_path_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

//! Named-route lookup and locale-aware route-name rewriting.
//!
//! Route names are dotted, locale-first: `en.news.index` names the news
//! index page in English. The last segment is the action. Link building
//! works by rewriting these names (`swap_locale_segment`,
//! `public_route_name`) and resolving the result through a [`Router`].

use crate::config::SiteSettings;
use std::collections::BTreeMap;
use tracing::debug;

/// Named-route lookup as seen from one request.
pub trait Router {
    /// Name of the route serving the current request, when it has one.
    fn current_route_name(&self) -> Option<&str>;

    /// Path of the current request.
    fn current_route_path(&self) -> &str;

    /// Whether a route with this name exists.
    fn has(&self, name: &str) -> bool;

    /// URL of the named route, when it exists.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// In-memory route table: dotted route name -> public path.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: BTreeMap<String, String>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from site settings: one `{locale}.{module}.index`
    /// route per linked page, plus `{locale}.{module}.feed` routes for
    /// feed-capable modules in every enabled locale.
    ///
    /// Pages whose path does not start with a configured locale segment are
    /// skipped.
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let mut map = Self::new();

        for page in &settings.pages {
            let first_segment = page.path.trim_start_matches('/').split('/').next();
            let locale = match first_segment {
                Some(segment) if settings.locales.iter().any(|l| l.code == segment) => segment,
                _ => {
                    debug!("Skipping page {:?}: no locale segment", page.path);
                    continue;
                }
            };
            map.insert(
                format!("{}.{}.index", locale, page.module.to_lowercase()),
                page.path.clone(),
            );
        }

        for locale in settings.locales.iter().filter(|l| l.status) {
            for (module, capabilities) in &settings.modules {
                if capabilities.iter().any(|c| c == crate::modules::HAS_FEED) {
                    map.insert(
                        feed_route_name(&locale.code, module),
                        format!("/{}/{}/feed", locale.code, module),
                    );
                }
            }
        }

        map
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn path(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Reverse lookup: name of the route serving `path`, if any.
    pub fn name_for_path(&self, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(_, route_path)| route_path.as_str() == path)
            .map(|(name, _)| name.as_str())
    }

    /// View of the table scoped to one request.
    pub fn for_request<'a>(&'a self, path: &str) -> RequestRoutes<'a> {
        RequestRoutes {
            map: self,
            current_name: self.name_for_path(path).map(str::to_string),
            current_path: path.to_string(),
        }
    }
}

/// Request-scoped [`Router`] over a shared [`RouteMap`].
#[derive(Debug, Clone)]
pub struct RequestRoutes<'a> {
    map: &'a RouteMap,
    current_name: Option<String>,
    current_path: String,
}

impl Router for RequestRoutes<'_> {
    fn current_route_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    fn current_route_path(&self) -> &str {
        &self.current_path
    }

    fn has(&self, name: &str) -> bool {
        self.map.has(name)
    }

    fn resolve(&self, name: &str) -> Option<String> {
        let path = self.map.path(name);
        if path.is_none() {
            debug!("No route named {:?}", name);
        }
        path.map(str::to_string)
    }
}

/// Replace the locale segment (everything before the first '.') of a route
/// name. A name with no separator is replaced wholesale.
pub fn swap_locale_segment(name: &str, locale: &str) -> String {
    match name.split_once('.') {
        Some((_, rest)) => format!("{}.{}", locale, rest),
        None => locale.to_string(),
    }
}

/// Route name of the public counterpart of `name` in `locale`: the locale
/// segment is swapped and the trailing action segment dropped.
pub fn public_route_name(name: &str, locale: &str) -> String {
    let swapped = swap_locale_segment(name, locale);
    match swapped.rsplit_once('.') {
        Some((head, _)) => head.to_string(),
        None => String::new(),
    }
}

/// Name of the feed route for `module` in `locale`.
pub fn feed_route_name(locale: &str, module: &str) -> String {
    format!("{}.{}.feed", locale, module)
}

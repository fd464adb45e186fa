//! Integration tests for the CMS link helper crate.
//!
//! These tests wire the public pieces together the way the server binary
//! does (settings JSON in, registry/page table/route map built from it)
//! and verify end-to-end link building behavior.

use proptest::prelude::*;
use tempfile::TempDir;

use cms_link_helpers::config::SiteSettings;
use cms_link_helpers::i18n::{LocaleRegistry, NoTranslations, TranslationTable};
use cms_link_helpers::links::Site;
use cms_link_helpers::pages::PageTable;
use cms_link_helpers::routing::RouteMap;
use cms_link_helpers::templates::DiskLister;

// ==================== Test Helpers ====================

struct SiteFixture {
    settings: SiteSettings,
    locales: LocaleRegistry,
    pages: PageTable,
    routes: RouteMap,
}

impl SiteFixture {
    fn from_json(json: &str) -> Self {
        let settings = SiteSettings::from_json(json).expect("settings should parse");
        let locales = LocaleRegistry::from_settings(&settings);
        let pages = PageTable::new(settings.pages.clone());
        let routes = RouteMap::from_settings(&settings);
        Self {
            settings,
            locales,
            pages,
            routes,
        }
    }
}

/// Settings for a typical two-locale site with a news module.
fn news_site_json() -> &'static str {
    r#"{
        "default_locale": "en",
        "fallback_locale": "en",
        "locales": [
            {"code": "en", "website_title": "My site"},
            {"code": "fr", "website_title": "Mon site"}
        ],
        "modules": {
            "news": ["linkable_to_page", "has_feed"],
            "pages": ["linkable_to_page"]
        },
        "pages": [
            {"module": "news", "path": "/en/news"},
            {"module": "news", "path": "/fr/actualites"}
        ]
    }"#
}

// ==================== Locale Filtering Scenarios ====================

#[test]
fn test_disabled_locale_is_filtered_out() {
    let fixture = SiteFixture::from_json(
        r#"{"locales": [{"code": "en"}, {"code": "fr", "status": false}]}"#,
    );

    assert_eq!(fixture.locales.enabled_locales(), vec!["en"]);
    assert!(!fixture.locales.is_enabled("fr"));
}

// ==================== Home URL Scenarios ====================

#[test]
fn test_home_url_is_plain_root_for_default_main_locale() {
    let fixture = SiteFixture::from_json(news_site_json());
    let request = fixture.routes.for_request("/");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(site.home_url(), "/");
}

proptest! {
    /// With the locale forced into URLs, the home URL always carries the
    /// main locale, whatever the rest of the settings say.
    #[test]
    fn prop_home_url_with_forced_locale_always_prefixed(
        main in "[a-z]{2}",
        other in "[a-z]{2}",
        default_locale in "[a-z]{2}",
        chooser in any::<bool>(),
    ) {
        let json = format!(
            r#"{{
                "default_locale": "{}",
                "main_locale_in_url": true,
                "locale_chooser": {},
                "locales": [{{"code": "{}"}}, {{"code": "{}"}}]
            }}"#,
            default_locale, chooser, main, other
        );
        let fixture = SiteFixture::from_json(&json);
        let request = fixture.routes.for_request("/");
        let site = Site::new(
            &fixture.settings,
            &fixture.locales,
            &fixture.pages,
            &request,
            &NoTranslations,
            &main,
        );

        prop_assert_eq!(site.home_url(), format!("/{}", main));
    }
}

// ==================== Module Select Scenarios ====================

#[test]
fn test_modules_for_select_contains_only_linkable_modules() {
    let fixture = SiteFixture::from_json(
        r#"{
            "locales": [{"code": "en"}],
            "modules": {"pages": ["linkable_to_page"], "news": []}
        }"#,
    );
    let request = fixture.routes.for_request("/");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(
        site.modules_for_select(),
        vec![
            (String::new(), String::new()),
            ("pages".to_string(), "Pages".to_string()),
        ]
    );
}

// ==================== Localized URL Scenarios ====================

#[test]
fn test_switching_locale_resolves_the_localized_route() {
    let fixture = SiteFixture::from_json(news_site_json());

    // Current request is the English news page; the French counterpart is
    // registered, so switching locales resolves to its URL.
    let request = fixture.routes.for_request("/en/news");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(site.resolve_localized_url("fr"), "/fr/actualites");
    assert_eq!(site.resolve_localized_url("en"), "/en/news");
}

#[test]
fn test_switching_locale_without_counterpart_falls_back_to_locale_root() {
    let fixture = SiteFixture::from_json(
        r#"{
            "locales": [{"code": "en"}, {"code": "de"}],
            "modules": {"news": ["linkable_to_page"]},
            "pages": [{"module": "news", "path": "/en/news"}]
        }"#,
    );
    let request = fixture.routes.for_request("/en/news");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(site.resolve_localized_url("de"), "/de");
}

// ==================== Languages Menu Scenarios ====================

#[test]
fn test_languages_menu_end_to_end() {
    let fixture = SiteFixture::from_json(news_site_json());
    let request = fixture.routes.for_request("/en/news");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    let html = site.languages_menu(&[("class", "nav")]);
    assert_eq!(
        html,
        "<ul class=\"nav\"><li class=\"active\"><a href=\"/en/news\">EN</a></li>\
         <li><a href=\"/fr/actualites\">FR</a></li></ul>"
    );
}

// ==================== Feed Scenarios ====================

#[test]
fn test_feeds_resolve_through_generated_routes() {
    let fixture = SiteFixture::from_json(news_site_json());
    let request = fixture.routes.for_request("/");
    let table = TranslationTable::from_json(
        r#"{"fr": {"News feed": "Flux d'actualités"}}"#,
    )
    .unwrap();
    let translator = table.for_locale("fr");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &translator,
        "fr",
    );

    let feeds = site.feeds();
    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].url, "/fr/news/feed");
    assert_eq!(feeds[0].title, "Flux d'actualités – Mon site");
}

// ==================== Page Table Scenarios ====================

#[test]
fn test_page_lookup_is_case_insensitive_end_to_end() {
    let fixture = SiteFixture::from_json(news_site_json());
    let request = fixture.routes.for_request("/");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(site.pages_for_module("News").len(), 2);
    assert_eq!(site.page_for_module("NEWS").unwrap().path, "/en/news");
}

// ==================== Template Discovery Scenarios ====================

#[test]
fn test_template_discovery_with_fallback_directory() {
    let root = TempDir::new().expect("Failed to create temp dir");
    let fallback = root.path().join("vendor");
    std::fs::create_dir(&fallback).unwrap();
    std::fs::write(fallback.join("standard.html"), "").unwrap();
    std::fs::write(fallback.join("_partial.html"), "").unwrap();
    std::fs::write(fallback.join("master.html"), "").unwrap();

    let fixture = SiteFixture::from_json(&format!(
        r#"{{
            "views_root": "{}",
            "template_fallback_dir": "{}",
            "locales": [{{"code": "en"}}]
        }}"#,
        root.path().join("missing").display(),
        fallback.display()
    ));
    let request = fixture.routes.for_request("/");
    let site = Site::new(
        &fixture.settings,
        &fixture.locales,
        &fixture.pages,
        &request,
        &NoTranslations,
        "en",
    );

    assert_eq!(
        site.templates(&DiskLister, None),
        vec![
            (String::new(), "Default".to_string()),
            ("standard".to_string(), "Standard".to_string()),
        ]
    );
}

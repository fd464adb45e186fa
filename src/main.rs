use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Json;
use tower_http::trace::TraceLayer;
use tracing::info;

use cms_link_helpers::config::{Config, SiteSettings};
use cms_link_helpers::i18n::{LocaleRegistry, TranslationTable};
use cms_link_helpers::links::Site;
use cms_link_helpers::modules::Feed;
use cms_link_helpers::pages::PageTable;
use cms_link_helpers::routing::RouteMap;
use cms_link_helpers::templates::DiskLister;

/// Process-wide read-only state; per-request views are built on top.
struct AppState {
    settings: SiteSettings,
    locales: LocaleRegistry,
    pages: PageTable,
    routes: RouteMap,
    translations: TranslationTable,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cms_link_helpers=info".parse()?),
        )
        .init();

    info!("Starting CMS link helper service");

    let config = Config::from_env()?;
    let settings = SiteSettings::from_json_file(&config.settings_file)?;
    let translations = match &config.translations_file {
        Some(path) => TranslationTable::from_json_file(path)?,
        None => TranslationTable::default(),
    };

    let locales = LocaleRegistry::from_settings(&settings);
    let pages = PageTable::new(settings.pages.clone());
    let routes = RouteMap::from_settings(&settings);

    info!(
        "Serving {} locales and {} modules",
        locales.all().len(),
        settings.modules.len()
    );

    let state = Arc::new(AppState {
        settings,
        locales,
        pages,
        routes,
        translations,
    });

    let app = axum::Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .route("/:locale/menu", get(languages_menu))
        .route("/api/modules", get(module_options))
        .route("/api/templates", get(template_options))
        .route("/api/feeds", get(feed_links))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

/// Redirect to the locale-aware home URL.
async fn home(State(state): State<Arc<AppState>>) -> Redirect {
    let locale = state.settings.default_locale.clone();
    let translator = state.translations.for_locale(&locale);
    let request = state.routes.for_request("/");
    let site = Site::new(
        &state.settings,
        &state.locales,
        &state.pages,
        &request,
        &translator,
        &locale,
    );
    Redirect::temporary(&site.home_url())
}

/// Languages menu for the given locale, as an HTML fragment.
async fn languages_menu(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, StatusCode> {
    if !state.locales.is_enabled(&locale) {
        return Err(StatusCode::NOT_FOUND);
    }

    let translator = state.translations.for_locale(&locale);
    let path = format!("/{}", locale);
    let request = state.routes.for_request(&path);
    let site = Site::new(
        &state.settings,
        &state.locales,
        &state.pages,
        &request,
        &translator,
        &locale,
    );
    Ok(Html(site.languages_menu(&[("class", "nav nav-lang")])))
}

/// Modules a page can be linked to, as select options.
async fn module_options(State(state): State<Arc<AppState>>) -> Json<Vec<(String, String)>> {
    let locale = state.settings.default_locale.clone();
    let translator = state.translations.for_locale(&locale);
    let request = state.routes.for_request("/");
    let site = Site::new(
        &state.settings,
        &state.locales,
        &state.pages,
        &request,
        &translator,
        &locale,
    );
    Json(site.modules_for_select())
}

/// Selectable page templates.
async fn template_options(State(state): State<Arc<AppState>>) -> Json<Vec<(String, String)>> {
    let locale = state.settings.default_locale.clone();
    let translator = state.translations.for_locale(&locale);
    let request = state.routes.for_request("/");
    let site = Site::new(
        &state.settings,
        &state.locales,
        &state.pages,
        &request,
        &translator,
        &locale,
    );
    Json(site.templates(&DiskLister, None))
}

/// Feed links of the default locale.
async fn feed_links(State(state): State<Arc<AppState>>) -> Json<Vec<Feed>> {
    let locale = state.settings.default_locale.clone();
    let translator = state.translations.for_locale(&locale);
    let request = state.routes.for_request("/");
    let site = Site::new(
        &state.settings,
        &state.locales,
        &state.pages,
        &request,
        &translator,
        &locale,
    );
    Json(site.feeds())
}

use axum::{Router, routing::get};
use rand::Rng;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::Key;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::warn;

use crate::config::Config;
use crate::db::Store;

pub mod auth;
mod error;
pub mod flash;
mod movies;
mod pages;
mod settings;
pub(crate) mod templates;
pub mod validation;

pub use error::{WebError, redirect};

use templates::PageContext;
use tower_sessions::Session;

pub struct AppState {
    store: Store,
    config: Config,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState { store, config }))
}

pub fn router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config().server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            state.config().server.session_minutes,
        )))
        .with_signed(session_key(state.config())?);

    let static_path = state.config().general.static_path.clone();

    Ok(Router::new()
        .route("/", get(movies::index).post(movies::create))
        .route(
            "/movie/edit/{id}",
            get(movies::edit_form).post(movies::update),
        )
        .route(
            "/movie/delete/{id}",
            get(movies::delete).post(movies::delete),
        )
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/setting", get(settings::settings_form).post(settings::update))
        .route("/hello", get(pages::hello))
        .route("/home", get(pages::hello))
        .route("/user/{name}", get(pages::user_page))
        .nest_service("/static", ServeDir::new(static_path))
        .fallback(pages::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn session_key(config: &Config) -> anyhow::Result<Key> {
    let secret = &config.security.session_secret;
    if secret.is_empty() {
        warn!("No session secret configured; sessions will not survive a restart");
        let bytes: [u8; 64] = rand::rng().random();
        Ok(Key::from(&bytes))
    } else {
        Key::try_from(secret.as_bytes())
            .map_err(|e| anyhow::anyhow!("Invalid session secret: {e}"))
    }
}

/// Build the context every rendered page receives. Consumes pending flash
/// messages, so call it once per rendered response.
pub(crate) async fn page_context(
    state: &AppState,
    session: &Session,
) -> Result<PageContext, WebError> {
    let logged_in = auth::current_user(state, session).await?.is_some();
    let owner = state
        .store()
        .sole_user()
        .await?
        .map_or_else(|| "Watchlist".to_string(), |u| u.name);
    let flashes = flash::take(session).await?;

    Ok(PageContext {
        owner,
        logged_in,
        flashes,
    })
}

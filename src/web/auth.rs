use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::templates::{self, LoginTemplate};
use super::{AppState, WebError, flash, page_context, redirect};
use crate::db::User;

const USER_ID_KEY: &str = "user_id";

// ============================================================================
// Guard
// ============================================================================

/// Resolve the session to a user, if the session holds an identity that
/// still exists in the store.
pub async fn current_user(
    state: &AppState,
    session: &Session,
) -> Result<Option<User>, WebError> {
    let Some(id) = session.get::<i32>(USER_ID_KEY).await? else {
        return Ok(None);
    };

    Ok(state.store().get_user(id).await?)
}

/// Guard for routes requiring authentication. Called before any validation
/// or write; the resulting `AuthRequired` renders as a redirect to the login
/// page and the route's effect never runs.
pub async fn require_user(state: &AppState, session: &Session) -> Result<User, WebError> {
    current_user(state, session)
        .await?
        .ok_or(WebError::AuthRequired)
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn login_form(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let ctx = page_context(&state, &session).await?;
    templates::page(&LoginTemplate { ctx })
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    if form.username.is_empty() || form.password.is_empty() {
        flash::push(&session, "Invalid input.").await?;
        return Ok(redirect("/login"));
    }

    match state
        .store()
        .verify_credentials(&form.username, &form.password)
        .await?
    {
        Some(user) => {
            session.insert(USER_ID_KEY, user.id).await?;
            tracing::info!("User {} logged in", user.name);
            flash::push(&session, "Login success.").await?;
            Ok(redirect("/"))
        }
        None => {
            // One generic message; never reveal which field was wrong
            flash::push(&session, "Invalid username or password.").await?;
            Ok(redirect("/login"))
        }
    }
}

/// GET /logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let user = require_user(&state, &session).await?;

    session.remove::<i32>(USER_ID_KEY).await?;
    tracing::info!("User {} logged out", user.name);
    flash::push(&session, "Goodbye.").await?;
    Ok(redirect("/"))
}

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::templates::{self, SettingsTemplate};
use super::validation::validate_username;
use super::{AppState, WebError, auth, flash, page_context, redirect};

#[derive(Deserialize)]
pub struct SettingsForm {
    pub name: String,
}

/// GET /setting
pub async fn settings_form(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let user = auth::require_user(&state, &session).await?;

    let ctx = page_context(&state, &session).await?;
    templates::page(&SettingsTemplate {
        ctx,
        name: user.name,
    })
}

/// POST /setting
pub async fn update(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<SettingsForm>,
) -> Result<Response, WebError> {
    let user = auth::require_user(&state, &session).await?;

    if let Err(reason) = validate_username(&form.name) {
        flash::push(&session, reason).await?;
        return Ok(redirect("/setting"));
    }

    state.store().update_username(user.id, &form.name).await?;
    flash::push(&session, "Settings updated.").await?;
    Ok(redirect("/"))
}

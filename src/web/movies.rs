use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::templates::{self, EditTemplate, IndexTemplate};
use super::validation::validate_movie;
use super::{AppState, WebError, auth, flash, page_context, redirect};

#[derive(Deserialize)]
pub struct MovieForm {
    pub title: String,
    pub year: String,
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let ctx = page_context(&state, &session).await?;
    let movies = state.store().list_movies().await?;
    templates::page(&IndexTemplate { ctx, movies })
}

/// POST /
pub async fn create(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<MovieForm>,
) -> Result<Response, WebError> {
    auth::require_user(&state, &session).await?;

    if let Err(reason) = validate_movie(&form.title, &form.year) {
        flash::push(&session, reason).await?;
        return Ok(redirect("/"));
    }

    state.store().add_movie(&form.title, &form.year).await?;
    flash::push(&session, "Item created.").await?;
    Ok(redirect("/"))
}

/// GET /movie/edit/{id}
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    auth::require_user(&state, &session).await?;

    let movie = state.store().get_movie(id).await?.ok_or(WebError::NotFound)?;

    let ctx = page_context(&state, &session).await?;
    templates::page(&EditTemplate { ctx, movie })
}

/// POST /movie/edit/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<MovieForm>,
) -> Result<Response, WebError> {
    auth::require_user(&state, &session).await?;

    // Existence first: a missing row is a 404, not a form error
    state.store().get_movie(id).await?.ok_or(WebError::NotFound)?;

    if let Err(reason) = validate_movie(&form.title, &form.year) {
        flash::push(&session, reason).await?;
        return Ok(redirect(&format!("/movie/edit/{id}")));
    }

    if !state.store().update_movie(id, &form.title, &form.year).await? {
        return Err(WebError::NotFound);
    }
    flash::push(&session, "Item updated.").await?;
    Ok(redirect("/"))
}

/// GET|POST /movie/delete/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    auth::require_user(&state, &session).await?;

    if !state.store().remove_movie(id).await? {
        return Err(WebError::NotFound);
    }
    flash::push(&session, "Item deleted.").await?;
    Ok(redirect("/"))
}

use askama::Template;
use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use super::templates::{NotFoundTemplate, PageContext};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Referenced entity or route does not exist
    #[error("not found")]
    NotFound,

    /// Guarded route hit without a valid session
    #[error("authentication required")]
    AuthRequired,

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                let page = NotFoundTemplate {
                    ctx: PageContext::anonymous(),
                };
                match page.render() {
                    Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
                    Err(e) => {
                        tracing::error!("Failed to render 404 page: {}", e);
                        (StatusCode::NOT_FOUND, "404 Not Found").into_response()
                    }
                }
            }
            Self::AuthRequired => redirect("/login"),
            Self::Session(e) => {
                tracing::error!("Session error: {}", e);
                internal_error()
            }
            Self::Template(e) => {
                tracing::error!("Template error: {}", e);
                internal_error()
            }
            Self::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred",
    )
        .into_response()
}

/// `302 Found` redirect. `axum::response::Redirect::to` emits 303, and this
/// surface's observable contract is 302.
pub fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}

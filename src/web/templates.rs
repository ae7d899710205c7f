use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use super::error::WebError;
use crate::db::Movie;

/// Data every rendered page receives explicitly; there are no ambient
/// template globals.
pub struct PageContext {
    /// Name of the sole account, shown in the page header
    pub owner: String,
    pub logged_in: bool,
    pub flashes: Vec<String>,
}

impl PageContext {
    /// Context for pages rendered without store access (the 404 error path)
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            owner: "Watchlist".to_string(),
            logged_in: false,
            flashes: Vec::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub movies: Vec<Movie>,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub ctx: PageContext,
    pub movie: Movie,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub name: String,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

pub fn page<T: Template>(template: &T) -> Result<Response, WebError> {
    Ok(Html(template.render()?).into_response())
}

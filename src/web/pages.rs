use axum::{extract::Path, response::Html};

use super::WebError;

/// GET /hello, GET /home
pub async fn hello() -> Html<&'static str> {
    Html("<h1>Hello Totoro!</h1><img src=\"http://helloflask.com/totoro.gif\">")
}

/// GET /user/{name} — echo the name, HTML-escaped
pub async fn user_page(Path(name): Path<String>) -> Html<String> {
    Html(format!("user: {}", html_escape::encode_text(&name)))
}

/// Fallback for unmatched routes; renders the 404 page
pub async fn not_found() -> WebError {
    WebError::NotFound
}

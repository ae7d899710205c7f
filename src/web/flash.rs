//! One-shot feedback messages carried in the session across a redirect.

use tower_sessions::Session;

const FLASH_KEY: &str = "_flashes";

pub async fn push(
    session: &Session,
    message: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    let mut messages: Vec<String> = session.get(FLASH_KEY).await?.unwrap_or_default();
    messages.push(message.into());
    session.insert(FLASH_KEY, &messages).await
}

/// Remove and return all pending messages; each is shown exactly once.
pub async fn take(session: &Session) -> Result<Vec<String>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<String>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}

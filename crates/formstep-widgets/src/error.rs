//! Widget error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown access level: {0}")]
    UnknownAccess(String),

    #[error("Unknown publication state: {0}")]
    UnknownState(String),

    #[error("CSRF token is not set")]
    MissingCsrfToken,

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

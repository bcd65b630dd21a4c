use crate::error::ProverbsError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by JSON handlers, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("proverb not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProverbsError> for WebError {
    fn from(err: ProverbsError) -> Self {
        match err {
            ProverbsError::NotFound(id) => WebError::NotFound(id),
            other => WebError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if let WebError::Internal(message) = &self {
            error!(%message, "request failed");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Same errors for HTML pages: a short message instead of JSON, and no
/// internals leaked to the browser.
#[derive(Debug)]
pub struct PageError(pub WebError);

impl From<WebError> for PageError {
    fn from(err: WebError) -> Self {
        PageError(err)
    }
}

impl From<ProverbsError> for PageError {
    fn from(err: ProverbsError) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = match &self.0 {
            WebError::NotFound(_) => "<h1>404 Not Found</h1><p><a href=\"/\">Back to all proverbs</a></p>",
            WebError::Internal(message) => {
                error!(%message, "page rendering failed");
                "<h1>500 Internal Server Error</h1>"
            }
        };
        (status, Html(body)).into_response()
    }
}

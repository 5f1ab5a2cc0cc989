//! HTTP request handlers.

use crate::error::ListingError;
use crate::responses::XML_CONTENT_TYPE;
use crate::server::AppState;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;
use tokio::task::JoinError;

/// Body returned for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, Nothing at this URL.";

/// Handle GET / endpoint.
pub async fn handle_index() -> &'static str {
    "Hello World!"
}

/// Handle GET /query_version endpoint.
///
/// Lists the static directory for both channels and returns the XML document.
///
/// # Errors
///
/// Returns `AppError` if the static directory cannot be listed.
pub async fn handle_query_version(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    tracing::debug!(
        "Handling version query for {}",
        state.static_dir().display()
    );

    let document = tokio::task::spawn_blocking(move || state.versions_document()).await??;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        document.to_string(),
    )
        .into_response())
}

/// Handle any unmatched route.
pub async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Turn a handler panic into a 500 response.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {message}");
    internal_error(&message)
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Sorry, unexpected error: {message}"),
    )
        .into_response()
}

/// Application-level error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Static directory listing failed (500)
    Listing(ListingError),
    /// Blocking listing task failed (500)
    Task(JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Listing(err) => err.to_string(),
            Self::Task(err) => err.to_string(),
        };

        tracing::error!("Version query failed: {message}");
        internal_error(&message)
    }
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        Self::Listing(err)
    }
}

impl From<JoinError> for AppError {
    fn from(err: JoinError) -> Self {
        Self::Task(err)
    }
}

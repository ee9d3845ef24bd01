//! Response conversion and the handler's error boundary.
//!
//! # Design Decisions
//! - Renderer output goes on the wire untouched: status line and HTML body
//! - `HandlerError` is the only place a failure becomes a response; it maps
//!   everything to the plain 500 a bare framework would produce

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::render::{PageResponse, RenderError};

/// Failures that escape the page handler.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("renderer returned status {0}, which is not an HTTP status code")]
    InvalidStatus(u16),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Page handler failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Put a rendered page on the wire as-is.
///
/// 1xx codes cannot end a response, so they are rejected along with
/// anything outside the status code range.
pub fn page_response(page: PageResponse) -> Result<Response, HandlerError> {
    let status = StatusCode::from_u16(page.status)
        .ok()
        .filter(|status| !status.is_informational())
        .ok_or(HandlerError::InvalidStatus(page.status))?;
    Ok((status, Html(page.html)).into_response())
}

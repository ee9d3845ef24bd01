//! Documentation page route handler.

use axum::{
    extract::{Path, Request, State},
    response::Response,
};

use crate::http::response::{page_response, HandlerError};
use crate::http::server::AppState;
use crate::observability::request_log::log_request;
use crate::render::PageRequest;

/// `GET /{lang}/{cat}/{doc}`.
///
/// Hands the three path segments to the renderer and returns its page
/// unchanged. Renderer failures are returned as-is.
pub async fn page_handler(
    State(state): State<AppState>,
    Path(page): Path<PageRequest>,
    request: Request,
) -> Result<Response, HandlerError> {
    if state.log_requests {
        let (parts, _body) = request.into_parts();
        log_request(&parts, &page);
    }

    let rendered = state.renderer.render(&page)?;
    page_response(rendered)
}

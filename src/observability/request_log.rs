//! Diagnostic dump of inbound page requests.

use axum::http::request::Parts;

use crate::render::PageRequest;

/// Target for request dumps; filter with `docs_site::request=debug`.
pub const REQUEST_LOG_TARGET: &str = "docs_site::request";

/// Emit the whole request head plus the extracted page identifier.
///
/// Borrows only; nothing here can influence the response.
pub fn log_request(parts: &Parts, page: &PageRequest) {
    tracing::debug!(
        target: REQUEST_LOG_TARGET,
        method = %parts.method,
        uri = %parts.uri,
        version = ?parts.version,
        headers = ?parts.headers,
        lang = %page.lang,
        cat = %page.cat,
        doc = %page.doc,
        "Inbound page request"
    );
}

//! Page rendering boundary.
//!
//! # Data Flow
//! ```text
//! GET /{lang}/{cat}/{doc}
//!     → http::handler (builds PageRequest)
//!     → Renderer::render (opaque collaborator)
//!     → PageResponse { status, html } returned verbatim
//! ```
//!
//! # Design Decisions
//! - The handler knows nothing about how pages are produced; it only sees
//!   this trait
//! - A missing document is a page (usually 404), not an error
//! - `RenderError` covers failures the renderer cannot turn into a page

pub mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use file::FileRenderer;

/// Identifies one documentation page, copied verbatim from the URL path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    /// Language segment (e.g. "en").
    pub lang: String,

    /// Category segment (e.g. "getting-started").
    pub cat: String,

    /// Document segment (e.g. "introduction").
    pub doc: String,
}

impl PageRequest {
    pub fn new(lang: impl Into<String>, cat: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            cat: cat.into(),
            doc: doc.into(),
        }
    }
}

/// Rendered page: status code and HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageResponse {
    pub status: u16,
    pub html: String,
}

impl PageResponse {
    pub fn new(status: u16, html: impl Into<String>) -> Self {
        Self {
            status,
            html: html.into(),
        }
    }
}

/// Failures a renderer could not express as a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render failed: {0}")]
    Failed(String),
}

/// Turns a page identifier into an HTML page.
pub trait Renderer: Send + Sync {
    fn render(&self, page: &PageRequest) -> Result<PageResponse, RenderError>;
}

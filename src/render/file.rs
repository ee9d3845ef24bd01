//! Renderer backed by pre-rendered HTML fragments on disk.
//!
//! # Layout
//! ```text
//! <content_dir>/<lang>/<cat>/<doc>.html
//! ```
//!
//! # Design Decisions
//! - Fragments are wrapped in a minimal page shell; no templating
//! - Identifiers that are not a single plain path segment never touch the
//!   filesystem and render as not found
//! - Only unexpected I/O failures are errors

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::render::{PageRequest, PageResponse, RenderError, Renderer};

/// Serves documentation pages from a content directory.
#[derive(Debug, Clone)]
pub struct FileRenderer {
    root: PathBuf,
}

impl FileRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of the fragment for `page`, or `None` if any segment is unsafe.
    pub fn fragment_path(&self, page: &PageRequest) -> Option<PathBuf> {
        let segments = [&page.lang, &page.cat, &page.doc];
        if !segments.iter().all(|s| is_plain_segment(s)) {
            return None;
        }
        Some(
            self.root
                .join(&page.lang)
                .join(&page.cat)
                .join(format!("{}.html", page.doc)),
        )
    }
}

impl Renderer for FileRenderer {
    fn render(&self, page: &PageRequest) -> Result<PageResponse, RenderError> {
        let Some(path) = self.fragment_path(page) else {
            tracing::debug!(?page, "Rejected page identifier");
            return Ok(not_found(page));
        };

        match fs::read_to_string(&path) {
            Ok(fragment) => {
                let html = page_shell(page, &title_for(&page.doc), &fragment);
                Ok(PageResponse::new(200, html))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Document not found");
                Ok(not_found(page))
            }
            Err(source) => Err(RenderError::Io { path, source }),
        }
    }
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}

fn not_found(page: &PageRequest) -> PageResponse {
    let body = format!(
        "<h1>Not found</h1>\n<p>No document <code>{}</code> in <code>{}</code>.</p>\n",
        escape_html(&page.doc),
        escape_html(&page.cat)
    );
    PageResponse::new(404, page_shell(page, "Not found", &body))
}

/// "getting-started" -> "Getting started"
fn title_for(doc: &str) -> String {
    let spaced = doc.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn page_shell(page: &PageRequest, title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n",
            "<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n",
            "<body>\n{}</body>\n</html>\n",
        ),
        escape_html(&page.lang),
        escape_html(title),
        body
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

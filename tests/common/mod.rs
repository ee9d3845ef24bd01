//! Shared renderers and helpers for integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use docs_site::{PageRequest, PageResponse, RenderError, Renderer};

/// Records every page it is asked for and answers with a fixed page.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Mutex<Vec<PageRequest>>,
    pub reply: Option<PageResponse>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn replying(reply: PageResponse) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Some(reply),
        })
    }

    pub fn calls(&self) -> Vec<PageRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, page: &PageRequest) -> Result<PageResponse, RenderError> {
        self.calls.lock().unwrap().push(page.clone());
        Ok(self.reply.clone().unwrap_or_else(|| {
            PageResponse::new(
                200,
                format!("<p>{}/{}/{}</p>", page.lang, page.cat, page.doc),
            )
        }))
    }
}

/// Always fails, counting how often it was called.
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingRenderer {
    pub calls: Mutex<usize>,
}

impl Renderer for FailingRenderer {
    fn render(&self, _page: &PageRequest) -> Result<PageResponse, RenderError> {
        *self.calls.lock().unwrap() += 1;
        Err(RenderError::Failed("content store unavailable".into()))
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collects formatted log output for one test.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    /// Subscriber writing events that pass `filter` into this capture.
    pub fn subscriber(&self, filter: &str) -> impl tracing::Subscriber + Send + Sync {
        let capture = self.clone();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(move || capture.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Route handler behaviour, driven in-process through the full router.

use std::sync::Arc;

use axum::http::StatusCode;
use docs_site::{build_router, PageRequest, PageResponse, SiteConfig};
use tower::ServiceExt;

mod common;

use common::{body_text, get, FailingRenderer, LogCapture, RecordingRenderer};

#[tokio::test]
async fn test_introduction_path_reaches_renderer() {
    let renderer = Arc::new(RecordingRenderer::default());
    let app = build_router(&SiteConfig::default(), renderer.clone());

    let response = app
        .oneshot(get("/en/getting-started/introduction"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        renderer.calls(),
        vec![PageRequest::new("en", "getting-started", "introduction")]
    );
}

#[tokio::test]
async fn test_segments_are_passed_unmodified_and_in_order() {
    let cases = [
        ("/de/api/client", ("de", "api", "client")),
        ("/x/y/z", ("x", "y", "z")),
        ("/EN/Getting_Started/Intro.v2", ("EN", "Getting_Started", "Intro.v2")),
        ("/pt-BR/faq/what%20is%20this", ("pt-BR", "faq", "what is this")),
    ];

    for (uri, (lang, cat, doc)) in cases {
        let renderer = Arc::new(RecordingRenderer::default());
        let app = build_router(&SiteConfig::default(), renderer.clone());

        let response = app.oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(renderer.calls(), vec![PageRequest::new(lang, cat, doc)], "{uri}");
    }
}

#[tokio::test]
async fn test_renderer_output_is_returned_verbatim() {
    let html = "<!DOCTYPE html><title>x</title>\n  <p>untouched &amp; raw</p>";
    let renderer = RecordingRenderer::replying(PageResponse::new(404, html));
    let app = build_router(&SiteConfig::default(), renderer);

    let response = app.oneshot(get("/en/guide/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );
    assert_eq!(body_text(response).await, html);
}

#[tokio::test]
async fn test_unusual_status_passes_through() {
    let renderer = RecordingRenderer::replying(PageResponse::new(299, "<p>odd</p>"));
    let app = build_router(&SiteConfig::default(), renderer);

    let response = app.oneshot(get("/en/a/b")).await.unwrap();

    assert_eq!(response.status().as_u16(), 299);
    assert_eq!(body_text(response).await, "<p>odd</p>");
}

#[tokio::test]
async fn test_informational_status_hits_error_boundary() {
    let renderer = RecordingRenderer::replying(PageResponse::new(103, "<p>early</p>"));
    let app = build_router(&SiteConfig::default(), renderer.clone());

    let response = app.oneshot(get("/en/a/b")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal Server Error");
    assert_eq!(renderer.calls().len(), 1);
}

#[tokio::test]
async fn test_renderer_error_is_not_swallowed() {
    let renderer = Arc::new(FailingRenderer::default());
    let app = build_router(&SiteConfig::default(), renderer.clone());

    let response = app
        .oneshot(get("/en/getting-started/introduction"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(*renderer.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_response_is_identical_with_and_without_request_logging() {
    let mut quiet = SiteConfig::default();
    quiet.observability.log_requests = false;
    let mut chatty = SiteConfig::default();
    chatty.observability.log_requests = true;

    let reply = PageResponse::new(201, "<main>same either way</main>");
    let mut observed = Vec::new();
    let mut logs = Vec::new();

    for config in [quiet, chatty] {
        let capture = LogCapture::default();
        let _guard =
            tracing::subscriber::set_default(capture.subscriber("docs_site::request=debug"));

        let renderer = RecordingRenderer::replying(reply.clone());
        let app = build_router(&config, renderer.clone());

        let response = app.oneshot(get("/fr/docs/index")).await.unwrap();
        let status = response.status();
        let content_type = response.headers()["content-type"].clone();
        observed.push((status, content_type, body_text(response).await, renderer.calls()));
        logs.push(capture.contents());
    }

    assert_eq!(observed[0], observed[1]);

    assert!(logs[0].is_empty(), "quiet run logged: {}", logs[0]);
    assert!(logs[1].contains("Inbound page request"), "{}", logs[1]);
    assert!(logs[1].contains("lang=fr"), "{}", logs[1]);
    assert!(logs[1].contains("cat=docs"), "{}", logs[1]);
    assert!(logs[1].contains("doc=index"), "{}", logs[1]);
    assert!(logs[1].contains("/fr/docs/index"), "{}", logs[1]);
}

#[tokio::test]
async fn test_other_shapes_do_not_reach_renderer() {
    for uri in ["/", "/en", "/en/getting-started", "/en/a/b/c", "/en//intro"] {
        let renderer = Arc::new(RecordingRenderer::default());
        let app = build_router(&SiteConfig::default(), renderer.clone());

        let response = app.oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(renderer.calls().is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn test_request_id_is_generated_or_propagated() {
    let app = build_router(&SiteConfig::default(), Arc::new(RecordingRenderer::default()));

    let response = app.clone().oneshot(get("/en/a/b")).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let request = axum::http::Request::builder()
        .uri("/en/a/b")
        .header("x-request-id", "trace-me")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

// tests/fetch_images.rs
//
// Page fetch + <img> extraction against a local HTTP server.

mod common;

use common::FakeTransport;
use img_scrape::config::options::NetOptions;
use img_scrape::core::HttpClient;
use img_scrape::error::{NetError, ScrapeError};
use img_scrape::scrape::{downloaded_count, fetch_images, run};
use img_scrape::types::{ImageReference, ScrapeRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GALLERY: &str = r#"<!doctype html>
<html><head><title>Gallery</title></head>
<body>
  <img src="/img/a.png" alt="first">
  <p>text <img src="thumbs/b.jpg"></p>
  <img src="https://cdn.example.net/c.gif">
  <img alt="no source">
  <img src="/img/a.png">
</body></html>"#;

async fn serve(server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

/// reqwest's blocking client must not run on the async executor threads.
async fn fetch_blocking(url: String) -> Result<Vec<ImageReference>, ScrapeError> {
    tokio::task::spawn_blocking(move || {
        let client = HttpClient::new(&NetOptions::default())?;
        fetch_images(&client, &url)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_images_in_document_order() {
    let server = MockServer::start().await;
    serve(&server, "/gallery/index.html", 200, GALLERY).await;

    let refs = fetch_blocking(format!("{}/gallery/index.html", server.uri())).await.unwrap();

    let urls: Vec<String> = refs.iter().map(|r| r.absolute_url.to_string()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/img/a.png", server.uri()),
            format!("{}/gallery/thumbs/b.jpg", server.uri()),
            "https://cdn.example.net/c.gif".to_string(),
            format!("{}/img/a.png", server.uri()),
        ]
    );
    assert_eq!(refs[1].suggested_filename, "b.jpg");
}

#[tokio::test(flavor = "multi_thread")]
async fn page_without_images_is_not_an_error() {
    let server = MockServer::start().await;
    serve(&server, "/plain", 200, "<html><body><p>Nothing to see</p></body></html>").await;

    let refs = fetch_blocking(format!("{}/plain", server.uri())).await.unwrap();
    assert!(refs.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_a_network_error() {
    let server = MockServer::start().await;
    serve(&server, "/missing", 404, "not here").await;

    let err = fetch_blocking(format!("{}/missing", server.uri())).await.unwrap_err();
    assert!(
        matches!(err, ScrapeError::Network(NetError::Status { status: 404, .. })),
        "{err:?}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_body_is_a_parse_error() {
    let server = MockServer::start().await;
    serve(&server, "/empty", 200, "  \n ").await;

    let err = fetch_blocking(format!("{}/empty", server.uri())).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Parse(_)), "{err:?}");
}

#[test]
fn unreachable_host_downloads_nothing() {
    let dest = tempfile::tempdir().unwrap();
    let client = HttpClient::new(&NetOptions::default()).unwrap();
    let request = ScrapeRequest::new("http://127.0.0.1:1/", dest.path().join("out"));

    let outcome = run(&client, &request, None);

    assert!(matches!(outcome, Err(ScrapeError::Network(_))), "{outcome:?}");
    assert_eq!(downloaded_count(&outcome), 0);
    // fetch failed, so the folder was never created
    assert!(!dest.path().join("out").exists());
}

#[test]
fn invalid_input_never_reaches_the_network() {
    let fake = FakeTransport::new();

    for input in ["", "   ", "example.com/page", "ftp://example.com/", "https://"] {
        let err = fetch_images(&fake, input).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl { .. }), "{input:?} → {err:?}");
    }
    assert_eq!(fake.calls(), 0);
}

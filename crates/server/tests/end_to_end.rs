//! End-to-end tests for the recommendation flow.
//!
//! These tests load artifacts from disk, rank against a query title, and
//! resolve poster art from a stub service, exactly as the CLI does.

use catalog::MovieIndex;
use server::RecommendationOrchestrator;
use std::fs;
use std::sync::Arc;
use tmdb::{Severity, TmdbClient, PLACEHOLDER_POSTER_URL};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Write a three-movie catalog and similarity matrix to a temp dir and load it
fn load_test_index() -> (tempfile::TempDir, Arc<MovieIndex>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let catalog_json = r#"[
        {"movie_id": 1, "title": "Movie A"},
        {"movie_id": 2, "title": "Movie B"},
        {"movie_id": 3, "title": "Movie C"}
    ]"#;
    let similarity_json = r#"[
        [1.0, 0.9, 0.2],
        [0.9, 1.0, 0.3],
        [0.2, 0.3, 1.0]
    ]"#;

    fs::write(dir.path().join("catalog.json"), catalog_json)
        .expect("Failed to write catalog artifact");
    fs::write(dir.path().join("similarity.json"), similarity_json)
        .expect("Failed to write similarity artifact");

    let index = MovieIndex::load_from_files(dir.path()).expect("Failed to load artifacts");
    (dir, Arc::new(index))
}

/// Start a stub poster service that derives poster paths from movie ids
async fn start_stub_poster_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub poster service");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);

                let movie_id = head
                    .split_whitespace()
                    .nth(1)
                    .and_then(|path| path.strip_prefix("/movie/"))
                    .and_then(|rest| rest.split('?').next())
                    .unwrap_or("0")
                    .to_string();

                let body = format!("{{\"poster_path\": \"/poster{}.jpg\"}}", movie_id);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Bind a port and immediately release it, leaving nothing listening
async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get probe address");
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_full_flow_from_artifacts_to_posters() {
    let (_dir, index) = load_test_index();
    let api_url = start_stub_poster_service().await;

    let tmdb_client = TmdbClient::new("test_key")
        .with_api_url(api_url)
        .with_image_url("http://cdn.test");
    let orchestrator = RecommendationOrchestrator::new(index, tmdb_client);

    let recommendations = orchestrator
        .recommend("Movie A", 5)
        .await
        .expect("Full flow should succeed");

    assert_eq!(recommendations.len(), 2);

    assert_eq!(recommendations[0].title, "Movie B");
    assert_eq!(recommendations[0].movie_id, 2);
    assert!((recommendations[0].score - 0.9).abs() < 1e-6);
    assert_eq!(recommendations[0].poster_url, "http://cdn.test/w500/poster2.jpg");

    assert_eq!(recommendations[1].title, "Movie C");
    assert_eq!(recommendations[1].movie_id, 3);
    assert!((recommendations[1].score - 0.2).abs() < 1e-6);
    assert_eq!(recommendations[1].poster_url, "http://cdn.test/w500/poster3.jpg");

    assert!(recommendations
        .iter()
        .all(|rec| rec.poster_diagnostic.is_none()));
}

#[tokio::test]
async fn test_poster_outage_degrades_every_pick() {
    let (_dir, index) = load_test_index();
    let api_url = unreachable_url().await;

    let tmdb_client = TmdbClient::new("test_key").with_api_url(api_url);
    let orchestrator = RecommendationOrchestrator::new(index, tmdb_client);

    let recommendations = orchestrator
        .recommend("Movie A", 5)
        .await
        .expect("A poster outage must not fail the query");

    // The full grid still renders, every pick on the placeholder
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].title, "Movie B");
    assert_eq!(recommendations[1].title, "Movie C");

    for rec in &recommendations {
        assert_eq!(rec.poster_url, PLACEHOLDER_POSTER_URL);
        let diagnostic = rec
            .poster_diagnostic
            .as_ref()
            .expect("Outage must carry a diagnostic");
        assert_eq!(diagnostic.severity(), Severity::Warning);
    }
}

#[tokio::test]
async fn test_unknown_title_reports_not_found() {
    let (_dir, index) = load_test_index();
    let api_url = start_stub_poster_service().await;

    let tmdb_client = TmdbClient::new("test_key").with_api_url(api_url);
    let orchestrator = RecommendationOrchestrator::new(index, tmdb_client);

    let result = orchestrator.recommend("Nonexistent Movie", 5).await;

    let err = result.expect_err("Unknown titles must fail the query");
    assert!(err.to_string().contains("Nonexistent Movie"));
}

//! Tests for temp staging and staged-file cleanup.

use tempfile::TempDir;
use vasari_error::{IngestErrorKind, VasariErrorKind};
use vasari_ingest::TempStaging;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_stage_buffer_writes_under_key() {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path().join("cache/tmp"));

    let staged = staging.stage_buffer(b"ten bytes!", "abc123").await.unwrap();

    assert_eq!(staged.path(), staging.staged_path("abc123"));
    let contents = tokio::fs::read(staged.path()).await.unwrap();
    assert_eq!(contents, b"ten bytes!");
}

#[tokio::test]
async fn test_scratch_dir_created_on_demand() {
    let dir = TempDir::new().unwrap();
    let scratch = dir.path().join("deeply/nested/cache/tmp");
    let staging = TempStaging::new(&scratch);
    assert!(!scratch.exists());

    let staged = staging.stage_buffer(b"bytes", "key").await.unwrap();

    assert!(scratch.is_dir());
    staged.release().await;
}

#[tokio::test]
async fn test_release_removes_staged_file() {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let staged = staging.stage_buffer(b"bytes", "key").await.unwrap();
    let path = staged.path().to_path_buf();
    assert!(path.exists());

    staged.release().await;
    assert!(!path.exists());
}

#[tokio::test]
async fn test_release_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let staged = staging.stage_buffer(b"bytes", "key").await.unwrap();
    tokio::fs::remove_file(staged.path()).await.unwrap();

    // Must not panic or error
    staged.release().await;
}

#[tokio::test]
async fn test_drop_removes_unreleased_staged_file() {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let staged = staging.stage_buffer(b"bytes", "key").await.unwrap();
    let path = staged.path().to_path_buf();

    drop(staged);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_staged_files_are_isolated_per_key() {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let first = staging.stage_buffer(b"first", "key-a").await.unwrap();
    let second = staging.stage_buffer(b"second", "key-b").await.unwrap();

    assert_ne!(first.path(), second.path());
    assert_eq!(tokio::fs::read(first.path()).await.unwrap(), b"first");
    assert_eq!(tokio::fs::read(second.path()).await.unwrap(), b"second");
}

#[tokio::test]
async fn test_stage_url_streams_body() {
    let server = MockServer::start().await;
    let body = vec![7u8; 64 * 1024];

    Mock::given(method("GET"))
        .and(path("/media/photo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let staged = staging
        .stage_url(&format!("{}/media/photo.png", server.uri()), "dl-key")
        .await
        .unwrap();

    let contents = tokio::fs::read(staged.path()).await.unwrap();
    assert_eq!(contents, body);
}

#[tokio::test]
async fn test_stage_url_error_status_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let err = staging
        .stage_url(&format!("{}/missing.png", server.uri()), "dl-key")
        .await
        .unwrap_err();
    match err.kind() {
        VasariErrorKind::Ingest(ingest_err) => {
            assert!(matches!(ingest_err.kind, IngestErrorKind::Fetch(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }

    // No staged leftover for the failed download
    assert!(!staging.staged_path("dl-key").exists());
}

#[tokio::test]
async fn test_stage_url_unreachable_server_fails() {
    // Take a port, then free it so the connection is refused
    let link = {
        let server = MockServer::start().await;
        format!("{}/gone.png", server.uri())
    };

    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path());

    let err = staging.stage_url(&link, "dl-key").await.unwrap_err();
    match err.kind() {
        VasariErrorKind::Ingest(ingest_err) => {
            assert!(matches!(ingest_err.kind, IngestErrorKind::Fetch(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }

    assert!(!staging.staged_path("dl-key").exists());
}

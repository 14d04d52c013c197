//! Tests for the HTTP object-store transport backend.

use tempfile::TempDir;
use vasari_core::AssetRecord;
use vasari_error::{TransportErrorKind, VasariErrorKind};
use vasari_transport::{HttpTransport, HttpTransportConfig, TransportBackend};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn keyed_record() -> AssetRecord {
    let mut record = AssetRecord::new();
    record.ensure_hash();
    record
}

async fn staged_source(dir: &TempDir, contents: &[u8]) -> std::path::PathBuf {
    let source = dir.path().join("staged");
    tokio::fs::write(&source, contents).await.unwrap();
    source
}

#[tokio::test]
async fn test_push_puts_object_bytes() {
    let server = MockServer::start().await;
    let record = keyed_record();
    let hash = record.hash().unwrap().to_string();

    Mock::given(method("PUT"))
        .and(path(format!("/{hash}")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let scratch = TempDir::new().unwrap();
    let source = staged_source(&scratch, b"remote bytes").await;

    let transport = HttpTransport::new(HttpTransportConfig::new(server.uri()));
    transport.push(&record, &source).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, b"remote bytes");
}

#[tokio::test]
async fn test_push_error_status_fails() {
    let server = MockServer::start().await;
    let record = keyed_record();

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scratch = TempDir::new().unwrap();
    let source = staged_source(&scratch, b"doomed").await;

    let transport = HttpTransport::new(HttpTransportConfig::new(server.uri()));
    let err = transport.push(&record, &source).await.unwrap_err();
    match err.kind() {
        VasariErrorKind::Transport(transport_err) => {
            assert!(matches!(transport_err.kind, TransportErrorKind::Write(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_push_missing_source_fails_without_request() {
    let server = MockServer::start().await;
    let record = keyed_record();

    let transport = HttpTransport::new(HttpTransportConfig::new(server.uri()));
    let missing = std::path::Path::new("/nonexistent/staged");

    assert!(transport.push(&record, missing).await.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_deletes_object() {
    let server = MockServer::start().await;
    let record = keyed_record();
    let hash = record.hash().unwrap().to_string();

    Mock::given(method("DELETE"))
        .and(path(format!("/{hash}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(HttpTransportConfig::new(server.uri()));
    transport.remove(&record).await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_object_is_not_found() {
    let server = MockServer::start().await;
    let record = keyed_record();
    let hash = record.hash().unwrap().to_string();

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(HttpTransportConfig::new(server.uri()));
    let err = transport.remove(&record).await.unwrap_err();
    match err.kind() {
        VasariErrorKind::Transport(transport_err) => {
            assert_eq!(transport_err.kind, TransportErrorKind::NotFound(hash));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_url_prefers_public_base() {
    let record = keyed_record();
    let hash = record.hash().unwrap().to_string();

    let transport = HttpTransport::new(
        HttpTransportConfig::new("http://store.internal:9000")
            .with_public_url("https://cdn.example/"),
    );
    assert_eq!(
        transport.url(&record).await,
        Some(format!("https://cdn.example/{hash}"))
    );

    let bare = HttpTransport::new(HttpTransportConfig::new("http://store.internal:9000"));
    assert_eq!(
        bare.url(&record).await,
        Some(format!("http://store.internal:9000/{hash}"))
    );
}

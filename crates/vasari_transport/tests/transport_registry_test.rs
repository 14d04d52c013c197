//! Tests for transport registration and resolution.

use std::sync::Arc;
use tempfile::TempDir;
use vasari_core::AssetRecord;
use vasari_error::{TransportErrorKind, VasariErrorKind};
use vasari_transport::{LocalTransport, TransportRegistry, DEFAULT_TRANSPORT};

fn local_backend(dir: &TempDir) -> Arc<LocalTransport> {
    Arc::new(LocalTransport::new(dir.path()).unwrap())
}

#[test]
fn test_resolve_registered_backend() {
    let dir = TempDir::new().unwrap();
    let mut registry = TransportRegistry::new(None);
    registry.register("local", local_backend(&dir));

    assert!(registry.resolve("local").is_ok());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_resolve_unknown_name_fails() {
    let registry = TransportRegistry::new(None);

    let err = registry.resolve("s3").unwrap_err();
    match err.kind() {
        VasariErrorKind::Transport(transport_err) => {
            assert_eq!(
                transport_err.kind,
                TransportErrorKind::Unknown("s3".to_string())
            );
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn test_default_name_falls_back_to_local() {
    let registry = TransportRegistry::new(None);
    assert_eq!(registry.default_name(), DEFAULT_TRANSPORT);
    assert_eq!(registry.default_name(), "local");
}

#[test]
fn test_default_name_honors_configuration() {
    let registry = TransportRegistry::new(Some("archive".to_string()));
    assert_eq!(registry.default_name(), "archive");
}

#[test]
fn test_name_for_prefers_pinned_transport() {
    let registry = TransportRegistry::new(Some("archive".to_string()));

    let mut pinned = AssetRecord::new();
    pinned.set_transport("local");
    assert_eq!(registry.name_for(&pinned), "local");

    let unpinned = AssetRecord::new();
    assert_eq!(registry.name_for(&unpinned), "archive");
}

#[test]
fn test_register_replaces_previous_backend() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let mut registry = TransportRegistry::new(None);
    assert!(registry.is_empty());

    registry.register("local", local_backend(&first_dir));
    registry.register("local", local_backend(&second_dir));

    assert_eq!(registry.len(), 1);
}

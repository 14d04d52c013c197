//! Tests for the in-memory record store.

use vasari_core::{AssetRecord, InMemoryRecordStore, RecordStore};
use vasari_error::{RecordErrorKind, VasariErrorKind};

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let store = InMemoryRecordStore::new();

    let mut first = AssetRecord::new();
    let mut second = AssetRecord::new();
    store.save(&mut first).await.unwrap();
    store.save(&mut second).await.unwrap();

    assert_eq!(first.id(), Some(1));
    assert_eq!(second.id(), Some(2));
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_first_save_stamps_both_timestamps() {
    let store = InMemoryRecordStore::new();

    let mut record = AssetRecord::new();
    store.save(&mut record).await.unwrap();

    let created = record.created_at().unwrap();
    let updated = record.updated_at().unwrap();
    assert_eq!(created, updated);
}

#[tokio::test]
async fn test_resave_keeps_id_and_created_at() {
    let store = InMemoryRecordStore::new();

    let mut record = AssetRecord::new();
    store.save(&mut record).await.unwrap();
    let id = record.id();
    let created = record.created_at();

    record.set_name("renamed.png");
    store.save(&mut record).await.unwrap();

    assert_eq!(record.id(), id);
    assert_eq!(record.created_at(), created);
    assert!(record.updated_at() >= created);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_load_returns_saved_record() {
    let store = InMemoryRecordStore::new();

    let mut record = AssetRecord::new();
    record.set_name("photo.png");
    store.save(&mut record).await.unwrap();

    let loaded = store.load(record.id().unwrap()).await.unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn test_load_unknown_id_fails() {
    let store = InMemoryRecordStore::new();

    let err = store.load(99).await.unwrap_err();
    match err.kind() {
        VasariErrorKind::Record(record_err) => {
            assert_eq!(record_err.kind, RecordErrorKind::NotFound(99));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_remove_deletes_record() {
    let store = InMemoryRecordStore::new();

    let mut record = AssetRecord::new();
    store.save(&mut record).await.unwrap();
    assert!(!store.is_empty().await);

    store.remove(&record).await.unwrap();
    assert!(store.is_empty().await);
    assert!(store.load(record.id().unwrap()).await.is_err());
}

#[tokio::test]
async fn test_remove_unsaved_record_fails() {
    let store = InMemoryRecordStore::new();

    let record = AssetRecord::new();
    let err = store.remove(&record).await.unwrap_err();
    match err.kind() {
        VasariErrorKind::Record(record_err) => {
            assert_eq!(record_err.kind, RecordErrorKind::NoId);
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_clear_resets_id_sequence() {
    let store = InMemoryRecordStore::new();

    let mut record = AssetRecord::new();
    store.save(&mut record).await.unwrap();
    store.clear().await;

    let mut fresh = AssetRecord::new();
    store.save(&mut fresh).await.unwrap();

    assert!(store.len().await == 1);
    assert_eq!(fresh.id(), Some(1));
}

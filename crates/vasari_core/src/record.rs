//! Asset records: identity and metadata for stored content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Metadata record for one stored asset.
///
/// A record starts empty and is populated by an ingestion entry point. The
/// identity fields follow a set-once discipline: `hash` is minted on first
/// use and never regenerated, `ext` is derived from the first name that
/// carries one, and `id` is assigned by the store on first save. Re-ingesting
/// bytes into an existing record refreshes content metadata (`size`, `name`)
/// without disturbing identity.
///
/// The `transport` field pins the record to the backend that holds its
/// bytes, so a later change to the configured default cannot strand
/// previously stored content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    id: Option<i64>,
    hash: Option<String>,
    ext: Option<String>,
    name: Option<String>,
    size: Option<u64>,
    transport: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl AssetRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persistence id, present after the first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Content key used to address the stored bytes.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Lowercase file extension without the leading dot.
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Size of the stored bytes.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Name of the transport holding the stored bytes.
    pub fn transport(&self) -> Option<&str> {
        self.transport.as_deref()
    }

    /// Time of the first save.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Time of the most recent save.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Return the content key, minting a fresh one on first use.
    ///
    /// The key is a v4 UUID. Once assigned it survives every later
    /// ingestion into this record.
    pub fn ensure_hash(&mut self) -> &str {
        self.hash
            .get_or_insert_with(|| Uuid::new_v4().to_string())
    }

    /// Derive the extension from `name` unless one is already set.
    ///
    /// The extension is stored lowercase without the leading dot. A name
    /// with no extension leaves the field untouched.
    pub fn ensure_ext(&mut self, name: &str) {
        if self.ext.is_none() {
            if let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) {
                self.ext = Some(ext.to_ascii_lowercase());
            }
        }
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Set the size of the stored bytes.
    pub fn set_size(&mut self, size: u64) {
        self.size = Some(size);
    }

    /// Pin the record to the transport holding its bytes.
    pub fn set_transport(&mut self, transport: impl Into<String>) {
        self.transport = Some(transport.into());
    }

    /// Derived display name: the hash and extension concatenated as-is.
    ///
    /// Used when an ingestion supplies no explicit name.
    pub fn fallback_name(&self) -> String {
        format!(
            "{}{}",
            self.hash.as_deref().unwrap_or(""),
            self.ext.as_deref().unwrap_or("")
        )
    }

    /// Assign the persistence id. The first assignment wins.
    pub fn assign_id(&mut self, id: i64) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    /// Stamp timestamps for a save.
    ///
    /// `created_at` is set only on the first call; `updated_at` moves on
    /// every call.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.created_at.get_or_insert(now);
        self.updated_at = Some(now);
    }
}

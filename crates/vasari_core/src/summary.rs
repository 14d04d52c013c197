//! External-safe record views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External-safe view of an asset record.
///
/// Carries the fields a host application may hand to clients. The `url`
/// field is resolved through the record's transport at export time, so a
/// summary is a snapshot, not a live reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Persistence id, present once the record has been saved.
    pub id: Option<i64>,
    /// Retrievable address, when the transport can produce one.
    pub url: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Content key.
    pub hash: Option<String>,
    /// Time of the first save.
    pub created: Option<DateTime<Utc>>,
    /// Time of the most recent save.
    pub updated: Option<DateTime<Utc>>,
}

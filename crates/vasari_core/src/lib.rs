//! Core types for the Vasari asset library.
//!
//! This crate provides the data model shared by every other Vasari crate:
//!
//! - [`AssetRecord`]: identity and metadata for one stored asset
//! - [`AssetSummary`]: the external-safe view of a record
//! - [`RecordStore`]: the persistence seam for records, with
//!   [`InMemoryRecordStore`] as the bundled implementation
//! - [`VasariConfig`]: workspace configuration with layered file loading
//!
//! # Examples
//!
//! ```
//! use vasari_core::AssetRecord;
//!
//! let mut record = AssetRecord::new();
//! let hash = record.ensure_hash().to_string();
//! record.ensure_ext("portrait.PNG");
//!
//! assert_eq!(record.hash(), Some(hash.as_str()));
//! assert_eq!(record.ext(), Some("png"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod record;
mod store;
mod summary;
mod telemetry;

pub use config::VasariConfig;
pub use record::AssetRecord;
pub use store::{InMemoryRecordStore, RecordStore};
pub use summary::AssetSummary;
pub use telemetry::init_tracing;

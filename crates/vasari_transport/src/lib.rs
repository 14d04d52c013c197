//! Pluggable storage backends for Vasari assets.
//!
//! This crate provides the transport abstraction that moves committed asset
//! bytes in and out of storage. Record metadata lives with the persistence
//! collaborator; transports only see content keys and files.
//!
//! # Features
//!
//! - **Pluggable backends**: Trait-based abstraction supports filesystem,
//!   HTTP object stores, and host-supplied backends
//! - **Pinned resolution**: Records carry the name of the backend that
//!   stored them, so changing the configured default never strands old
//!   assets
//! - **Atomic local writes**: The filesystem backend writes through a temp
//!   file + rename
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vasari_transport::{LocalTransport, TransportRegistry, DEFAULT_TRANSPORT};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = TransportRegistry::new(None);
//! registry.register(
//!     DEFAULT_TRANSPORT,
//!     Arc::new(LocalTransport::new("data/assets")?),
//! );
//!
//! assert_eq!(registry.default_name(), "local");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod local;
mod registry;
mod transport;

pub use http::{HttpTransport, HttpTransportConfig};
pub use local::LocalTransport;
pub use registry::{TransportRegistry, DEFAULT_TRANSPORT};
pub use transport::TransportBackend;
pub use vasari_error::{TransportError, TransportErrorKind};

// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Atelier Fetch
//!
//! Resource fetchers for the Atelier studio site backend.
//!
//! This crate translates the six logical resource queries (all projects,
//! project by id, projects by category, all services, service by title,
//! all team members) into HTTP calls against the site's REST endpoints,
//! normalizing failures into the fixed error messages page code matches on.
//!
//! ## Layers
//!
//! - [`ApiTransport`] - transport trait; one `GET path -> JSON` operation
//! - [`HttpTransport`] - reqwest-backed transport with request tracing
//! - [`InMemoryTransport`] - in-process transport serving a fixture
//!   dataset, used by tests and demos
//! - [`ResourceClient`] - the typed fetch operations on top of a transport
//!
//! ## Example
//!
//! ```ignore
//! use atelier_fetch::{ApiConfig, HttpTransport, ResourceClient};
//!
//! let transport = HttpTransport::new(ApiConfig::default());
//! let client = ResourceClient::new(transport);
//! let projects = client.projects_by_category("Branding").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod transport;

// Re-export key types at crate root
pub use client::ResourceClient;
pub use config::{ApiConfig, encode_segment, endpoints};
pub use error::{FetchError, TransportError};
pub use memory::InMemoryTransport;
pub use transport::{ApiTransport, HttpTransport};

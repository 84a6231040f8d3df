// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Atelier Store
//!
//! Cached resource queries for the Atelier studio site.
//!
//! Pages do not call the fetchers directly: they mount a query handle
//! per resource view, and the handle exposes the uniform
//! `{is_loading, error, data}` shape plus `refetch()`. Handles share a
//! process-wide [`ResourceCache`] owned by the composition root; cache
//! entries persist until teardown and are only ever overwritten by a
//! successful fetch.
//!
//! ## Query handles
//!
//! - [`ProjectsQuery`] - all projects, or one category's projects
//! - [`ProjectQuery`] - a single project by id
//! - [`ServicesQuery`] - all services
//! - [`ServiceQuery`] - a single service by title (case-insensitive)
//! - [`TeamQuery`] - all team members
//!
//! ## Usage
//!
//! ```ignore
//! use atelier_fetch::{ApiConfig, HttpTransport, ResourceClient};
//! use atelier_store::{ProjectsQuery, ResourceCache};
//! use std::sync::Arc;
//!
//! let client = Arc::new(ResourceClient::new(HttpTransport::new(ApiConfig::default())));
//! let cache = ResourceCache::new();
//!
//! let query = ProjectsQuery::with_category(client, cache, "Branding");
//! query.load().await;
//! let state = query.state().await;
//! ```

pub mod cache;
pub mod queries;
pub mod query;

pub use cache::ResourceCache;
pub use queries::{ProjectQuery, ProjectsQuery, ServiceQuery, ServicesQuery, TeamQuery};
pub use query::QueryState;

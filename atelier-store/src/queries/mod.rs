//! Query handles, one per resource kind and query shape.
//!
//! Each handle follows the same lifecycle:
//!
//! - `load()` - mount semantics: a cache hit (when caching is enabled)
//!   resolves synchronously; otherwise the fetcher runs with
//!   `is_loading` set, and a success populates both the state and (when
//!   caching is enabled) the cache. A failure never writes the cache.
//! - changing the key re-runs mount semantics for the new key; the old
//!   key's in-flight result is not reused.
//! - `refetch()` - always hits the network, keeps stale data visible
//!   while in flight, and overwrites the cache entry on success whether
//!   or not caching is enabled for this handle.
//!
//! Concurrent handles with the same uncached key each issue their own
//! request; the cache is written twice and the last resolution wins.
//! Writes are idempotent per key, so the race is accepted rather than
//! de-duplicated.

mod projects;
mod services;
mod team;

pub use projects::{ProjectQuery, ProjectsQuery};
pub use services::{ServiceQuery, ServicesQuery};
pub use team::TeamQuery;

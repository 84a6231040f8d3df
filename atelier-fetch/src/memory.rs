//! In-memory transport serving a fixture dataset.
//!
//! Routes the same paths the real backend serves, including
//! percent-decoding of dynamic segments and case-insensitive category
//! and title lookups, so the typed layer and the caching layer can be
//! exercised without a network. Every request is recorded, which lets
//! tests assert how many calls a cached query actually issued.

use async_trait::async_trait;
use atelier_core::{Project, Service, TeamMember};
use percent_encoding::percent_decode_str;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::transport::ApiTransport;

// ============================================================================
// In-Memory Transport
// ============================================================================

/// In-process [`ApiTransport`] over a fixed dataset.
///
/// Clones share the same dataset and request log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    projects: Mutex<Vec<Project>>,
    services: Vec<Service>,
    team: Vec<TeamMember>,
    offline: AtomicBool,
    requests: Mutex<Vec<String>>,
}

impl InMemoryTransport {
    /// Creates a transport serving the given dataset.
    pub fn new(projects: Vec<Project>, services: Vec<Service>, team: Vec<TeamMember>) -> Self {
        Self {
            inner: Arc::new(Inner {
                projects: Mutex::new(projects),
                services,
                team,
                offline: AtomicBool::new(false),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Simulates the backend being unreachable: every request fails with
    /// a network error instead of a response.
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.store(offline, Ordering::SeqCst);
    }

    /// Replaces the project dataset, simulating the backend changing
    /// between requests.
    ///
    /// # Panics
    ///
    /// Panics if the dataset mutex is poisoned.
    pub fn replace_projects(&self, projects: Vec<Project>) {
        *self.inner.projects.lock().unwrap() = projects;
    }

    /// Returns the paths requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the request log mutex is poisoned.
    pub fn requests(&self) -> Vec<String> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// Returns how many requests have been issued.
    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn not_found() -> TransportError {
        TransportError::Status(404)
    }

    fn route(&self, path: &str) -> Result<Value, TransportError> {
        let decoded: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| {
                percent_decode_str(segment)
                    .decode_utf8()
                    .map(|s| s.into_owned())
            })
            .collect::<Result<_, _>>()
            .map_err(|e| TransportError::Body(format!("Invalid path encoding: {e}")))?;
        let parts: Vec<&str> = decoded.iter().map(String::as_str).collect();

        let projects = self
            .inner
            .projects
            .lock()
            .map_err(|_| TransportError::Network("dataset lock poisoned".to_string()))?;

        match parts.as_slice() {
            ["api", "projects"] => Ok(json!(*projects)),
            ["api", "projects", "category", category] => {
                let matching: Vec<&Project> = projects
                    .iter()
                    .filter(|p| p.matches_category(category))
                    .collect();
                Ok(json!(matching))
            }
            ["api", "projects", id] => {
                let id: u64 = id.parse().map_err(|_| Self::not_found())?;
                projects
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| json!(p))
                    .ok_or_else(Self::not_found)
            }
            ["api", "services"] => Ok(json!(self.inner.services)),
            ["api", "services", title] => self
                .inner
                .services
                .iter()
                .find(|s| s.matches_title(title))
                .map(|s| json!(s))
                .ok_or_else(Self::not_found),
            ["api", "team"] => Ok(json!(self.inner.team)),
            _ => Err(Self::not_found()),
        }
    }
}

#[async_trait]
impl ApiTransport for InMemoryTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        if let Ok(mut requests) = self.inner.requests.lock() {
            requests.push(path.to_string());
        }

        if self.inner.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Network("connection refused".to_string()));
        }

        self.route(path)
    }
}

// ============================================================================
// Tests
// ============================================================================

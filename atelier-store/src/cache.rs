//! Process-wide resource cache.
//!
//! One explicit cache object per composition root, shared by every query
//! handle through cheap clones. Entries are keyed by resource identity -
//! numeric id for projects and team members, normalized (uppercased)
//! strings for categories and service titles - and are never invalidated
//! automatically: they live until [`clear`](ResourceCache::clear) or
//! process teardown, and only a successful fetch overwrites them.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use atelier_core::{Project, Service, TeamMember, key};

/// Internal cache state.
#[derive(Debug, Default)]
struct CacheInner {
    /// Full project collection snapshot.
    projects: Option<Vec<Project>>,
    /// Project lists keyed by normalized category.
    projects_by_category: HashMap<String, Vec<Project>>,
    /// Single projects keyed by id.
    project_by_id: HashMap<u64, Project>,
    /// Full service collection snapshot.
    services: Option<Vec<Service>>,
    /// Single services keyed by normalized title.
    service_by_title: HashMap<String, Service>,
    /// Full team collection snapshot.
    team: Option<Vec<TeamMember>>,
    /// Time of the most recent write, for staleness reporting.
    last_write: Option<DateTime<Utc>>,
}

/// Shared resource cache.
///
/// Clones share the same entries. All writes are idempotent per key
/// (same key, equivalent value), which is what makes the accepted
/// duplicate-fetch race harmless.
#[derive(Debug, Clone, Default)]
pub struct ResourceCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl ResourceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Gets the cached full project collection.
    pub async fn projects(&self) -> Option<Vec<Project>> {
        self.inner.read().await.projects.clone()
    }

    /// Stores the full project collection.
    pub async fn set_projects(&self, projects: Vec<Project>) {
        let mut inner = self.inner.write().await;
        inner.projects = Some(projects);
        inner.last_write = Some(Utc::now());
        debug!("Cached project collection");
    }

    /// Gets the cached project list for a category (any casing).
    pub async fn projects_by_category(&self, category: &str) -> Option<Vec<Project>> {
        self.inner
            .read()
            .await
            .projects_by_category
            .get(&key::normalize(category))
            .cloned()
    }

    /// Stores the project list for a category.
    pub async fn set_projects_by_category(&self, category: &str, projects: Vec<Project>) {
        let mut inner = self.inner.write().await;
        inner
            .projects_by_category
            .insert(key::normalize(category), projects);
        inner.last_write = Some(Utc::now());
        debug!(category, "Cached category projects");
    }

    /// Gets a cached project by id.
    pub async fn project(&self, id: u64) -> Option<Project> {
        self.inner.read().await.project_by_id.get(&id).cloned()
    }

    /// Stores a single project, keyed by its id.
    pub async fn set_project(&self, project: Project) {
        let mut inner = self.inner.write().await;
        inner.project_by_id.insert(project.id, project);
        inner.last_write = Some(Utc::now());
    }

    // ========================================================================
    // Services
    // ========================================================================

    /// Gets the cached full service collection.
    pub async fn services(&self) -> Option<Vec<Service>> {
        self.inner.read().await.services.clone()
    }

    /// Stores the full service collection.
    pub async fn set_services(&self, services: Vec<Service>) {
        let mut inner = self.inner.write().await;
        inner.services = Some(services);
        inner.last_write = Some(Utc::now());
        debug!("Cached service collection");
    }

    /// Gets a cached service by title (any casing).
    pub async fn service(&self, title: &str) -> Option<Service> {
        self.inner
            .read()
            .await
            .service_by_title
            .get(&key::normalize(title))
            .cloned()
    }

    /// Stores a single service, keyed by its normalized title.
    pub async fn set_service(&self, service: Service) {
        let mut inner = self.inner.write().await;
        inner.service_by_title.insert(service.cache_key(), service);
        inner.last_write = Some(Utc::now());
    }

    // ========================================================================
    // Team
    // ========================================================================

    /// Gets the cached team collection.
    pub async fn team(&self) -> Option<Vec<TeamMember>> {
        self.inner.read().await.team.clone()
    }

    /// Stores the team collection.
    pub async fn set_team(&self, team: Vec<TeamMember>) {
        let mut inner = self.inner.write().await;
        inner.team = Some(team);
        inner.last_write = Some(Utc::now());
        debug!("Cached team collection");
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Time of the most recent write, if any.
    pub async fn last_write(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_write
    }

    /// Wipes every entry. Intended for test teardown; production code
    /// never invalidates.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        *inner = CacheInner::default();
        debug!("Cache cleared");
    }
}

// ============================================================================
// Tests
// ============================================================================

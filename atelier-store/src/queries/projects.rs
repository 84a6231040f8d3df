//! Project query handles.

use atelier_core::Project;
use atelier_fetch::{ApiTransport, ResourceClient};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::cache::ResourceCache;
use crate::query::{QueryCore, QueryState};

// ============================================================================
// Projects (collection / by category)
// ============================================================================

/// Query handle for project lists.
///
/// Without a category it resolves the full collection; with one, the
/// category's (possibly empty) list. The two shapes cache separately:
/// the full snapshot as one entry, category lists keyed by normalized
/// category.
pub struct ProjectsQuery<T: ApiTransport> {
    client: Arc<ResourceClient<T>>,
    cache: ResourceCache,
    category: Option<String>,
    use_cache: bool,
    core: QueryCore<Vec<Project>>,
}

impl<T: ApiTransport> ProjectsQuery<T> {
    /// Creates a handle for the full project collection.
    pub fn new(client: Arc<ResourceClient<T>>, cache: ResourceCache) -> Self {
        Self {
            client,
            cache,
            category: None,
            use_cache: true,
            core: QueryCore::new(),
        }
    }

    /// Creates a handle filtered to one category.
    pub fn with_category(
        client: Arc<ResourceClient<T>>,
        cache: ResourceCache,
        category: impl Into<String>,
    ) -> Self {
        let mut query = Self::new(client, cache);
        query.category = Some(category.into());
        query
    }

    /// Disables (or re-enables) cache reads for this call site. Writes
    /// from `refetch()` still land in the shared cache.
    pub fn cached(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Runs mount semantics for the current category key.
    pub async fn load(&self) {
        if self.use_cache {
            let hit = match &self.category {
                None => self.cache.projects().await,
                Some(category) => self.cache.projects_by_category(category).await,
            };
            if let Some(projects) = hit {
                debug!(category = ?self.category, "Projects cache hit");
                self.core.resolve_cached(projects).await;
                return;
            }
        }
        self.fetch(self.use_cache).await;
    }

    /// Changes the category key and re-runs mount semantics. The
    /// previous key's result is not reused.
    pub async fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.core.reset().await;
        self.load().await;
    }

    /// Unconditionally re-hits the network, overwriting the cache entry
    /// on success. Previous data stays visible while in flight.
    pub async fn refetch(&self) {
        self.fetch(true).await;
    }

    async fn fetch(&self, write_cache: bool) {
        self.core.begin().await;
        let result = match &self.category {
            None => self.client.all_projects().await,
            Some(category) => self.client.projects_by_category(category).await,
        };
        match result {
            Ok(projects) => {
                if write_cache {
                    match &self.category {
                        None => self.cache.set_projects(projects.clone()).await,
                        Some(category) => {
                            self.cache
                                .set_projects_by_category(category, projects.clone())
                                .await;
                        }
                    }
                }
                self.core.succeed(projects).await;
            }
            Err(e) => self.core.fail(e).await,
        }
    }

    /// Snapshot of the current `{is_loading, error, data}` state.
    pub async fn state(&self) -> QueryState<Vec<Project>> {
        self.core.snapshot().await
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.core.subscribe()
    }
}

// ============================================================================
// Project (by id)
// ============================================================================

/// Query handle for a single project.
///
/// An absent id short-circuits to the idle state without a network
/// call - detail pages mount before routing has produced an id.
pub struct ProjectQuery<T: ApiTransport> {
    client: Arc<ResourceClient<T>>,
    cache: ResourceCache,
    id: Option<u64>,
    use_cache: bool,
    core: QueryCore<Project>,
}

impl<T: ApiTransport> ProjectQuery<T> {
    /// Creates a handle for the given project id, if any.
    pub fn new(client: Arc<ResourceClient<T>>, cache: ResourceCache, id: Option<u64>) -> Self {
        Self {
            client,
            cache,
            id,
            use_cache: true,
            core: QueryCore::new(),
        }
    }

    /// Disables (or re-enables) cache reads for this call site.
    pub fn cached(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Runs mount semantics for the current id.
    pub async fn load(&self) {
        let Some(id) = self.id else {
            self.core.reset().await;
            return;
        };
        if self.use_cache {
            if let Some(project) = self.cache.project(id).await {
                debug!(id, "Project cache hit");
                self.core.resolve_cached(project).await;
                return;
            }
        }
        self.fetch(id, self.use_cache).await;
    }

    /// Changes the id key (e.g. navigating from project 1 to project 2)
    /// and re-runs mount semantics.
    pub async fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
        self.core.reset().await;
        self.load().await;
    }

    /// Unconditionally re-hits the network for the current id. A
    /// missing id makes this a no-op.
    pub async fn refetch(&self) {
        if let Some(id) = self.id {
            self.fetch(id, true).await;
        }
    }

    async fn fetch(&self, id: u64, write_cache: bool) {
        self.core.begin().await;
        match self.client.project_by_id(id).await {
            Ok(project) => {
                if write_cache {
                    self.cache.set_project(project.clone()).await;
                }
                self.core.succeed(project).await;
            }
            Err(e) => self.core.fail(e).await,
        }
    }

    /// Snapshot of the current `{is_loading, error, data}` state.
    pub async fn state(&self) -> QueryState<Project> {
        self.core.snapshot().await
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.core.subscribe()
    }
}

// ============================================================================
// Tests
// ============================================================================

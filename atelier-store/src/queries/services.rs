//! Service query handles.

use atelier_core::Service;
use atelier_fetch::{ApiTransport, ResourceClient};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::cache::ResourceCache;
use crate::query::{QueryCore, QueryState};

// ============================================================================
// Services (collection)
// ============================================================================

/// Query handle for the full service collection.
pub struct ServicesQuery<T: ApiTransport> {
    client: Arc<ResourceClient<T>>,
    cache: ResourceCache,
    use_cache: bool,
    core: QueryCore<Vec<Service>>,
}

impl<T: ApiTransport> ServicesQuery<T> {
    /// Creates a handle for the service collection.
    pub fn new(client: Arc<ResourceClient<T>>, cache: ResourceCache) -> Self {
        Self {
            client,
            cache,
            use_cache: true,
            core: QueryCore::new(),
        }
    }

    /// Disables (or re-enables) cache reads for this call site.
    pub fn cached(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Runs mount semantics.
    pub async fn load(&self) {
        if self.use_cache {
            if let Some(services) = self.cache.services().await {
                debug!("Services cache hit");
                self.core.resolve_cached(services).await;
                return;
            }
        }
        self.fetch(self.use_cache).await;
    }

    /// Unconditionally re-hits the network, overwriting the cached
    /// snapshot on success.
    pub async fn refetch(&self) {
        self.fetch(true).await;
    }

    async fn fetch(&self, write_cache: bool) {
        self.core.begin().await;
        match self.client.all_services().await {
            Ok(services) => {
                if write_cache {
                    self.cache.set_services(services.clone()).await;
                }
                self.core.succeed(services).await;
            }
            Err(e) => self.core.fail(e).await,
        }
    }

    /// Snapshot of the current `{is_loading, error, data}` state.
    pub async fn state(&self) -> QueryState<Vec<Service>> {
        self.core.snapshot().await
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.core.subscribe()
    }
}

// ============================================================================
// Service (by title)
// ============================================================================

/// Query handle for a single service, keyed by title.
///
/// Lookups are case-insensitive end to end: the backend matches titles
/// without regard to case, and the cache keys on the normalized title,
/// so every casing of one title shares a single entry.
pub struct ServiceQuery<T: ApiTransport> {
    client: Arc<ResourceClient<T>>,
    cache: ResourceCache,
    title: Option<String>,
    use_cache: bool,
    core: QueryCore<Service>,
}

impl<T: ApiTransport> ServiceQuery<T> {
    /// Creates a handle for the given service title, if any.
    pub fn new(
        client: Arc<ResourceClient<T>>,
        cache: ResourceCache,
        title: Option<String>,
    ) -> Self {
        Self {
            client,
            cache,
            title,
            use_cache: true,
            core: QueryCore::new(),
        }
    }

    /// Disables (or re-enables) cache reads for this call site.
    pub fn cached(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Runs mount semantics for the current title.
    pub async fn load(&self) {
        let Some(title) = self.title.clone() else {
            self.core.reset().await;
            return;
        };
        if self.use_cache {
            if let Some(service) = self.cache.service(&title).await {
                debug!(title, "Service cache hit");
                self.core.resolve_cached(service).await;
                return;
            }
        }
        self.fetch(&title, self.use_cache).await;
    }

    /// Changes the title key and re-runs mount semantics.
    pub async fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.core.reset().await;
        self.load().await;
    }

    /// Unconditionally re-hits the network for the current title. A
    /// missing title makes this a no-op.
    pub async fn refetch(&self) {
        if let Some(title) = self.title.clone() {
            self.fetch(&title, true).await;
        }
    }

    async fn fetch(&self, title: &str, write_cache: bool) {
        self.core.begin().await;
        match self.client.service_by_title(title).await {
            Ok(service) => {
                if write_cache {
                    self.cache.set_service(service.clone()).await;
                }
                self.core.succeed(service).await;
            }
            Err(e) => self.core.fail(e).await,
        }
    }

    /// Snapshot of the current `{is_loading, error, data}` state.
    pub async fn state(&self) -> QueryState<Service> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_fetch::InMemoryTransport;

    fn service(title: &str) -> Service {
        Service {
            title: title.to_string(),
            description: String::new(),
            icon: None,
            features: vec![],
        }
    }

    fn fixture() -> (Arc<ResourceClient<InMemoryTransport>>, ResourceCache) {
        let transport = InMemoryTransport::new(
            vec![],
            vec![service("Web Design"), service("Branding")],
            vec![],
        );
        (Arc::new(ResourceClient::new(transport)), ResourceCache::new())
    }

    #[tokio::test]
    async fn test_collection_load_and_cache_hit() {
        let (client, cache) = fixture();
        let query = ServicesQuery::new(Arc::clone(&client), cache.clone());

        query.load().await;
        query.load().await;

        assert_eq!(client.transport().request_count(), 1);
        assert_eq!(query.state().await.data.map(|s| s.len()), Some(2));
    }

    #[tokio::test]
    async fn test_title_casings_share_one_cache_entry() {
        let (client, cache) = fixture();

        let first = ServiceQuery::new(
            Arc::clone(&client),
            cache.clone(),
            Some("web design".to_string()),
        );
        first.load().await;
        let record = first.state().await.data.unwrap();

        for casing in ["WEB DESIGN", "WeB DeSiGn"] {
            let query =
                ServiceQuery::new(Arc::clone(&client), cache.clone(), Some(casing.to_string()));
            query.load().await;
            assert_eq!(query.state().await.data.as_ref(), Some(&record));
        }

        // One network call for the first casing; the rest are hits.
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_absent_title_short_circuits() {
        let (client, cache) = fixture();
        let query = ServiceQuery::new(Arc::clone(&client), cache, None);

        query.load().await;

        assert!(query.state().await.is_idle());
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_title_surfaces_fixed_message() {
        let (client, cache) = fixture();
        let query = ServiceQuery::new(
            Arc::clone(&client),
            cache.clone(),
            Some("Space Travel".to_string()),
        );

        query.load().await;

        let state = query.state().await;
        assert_eq!(
            state.error.map(|e| e.to_string()),
            Some("Failed to fetch service with title Space Travel".to_string())
        );
        assert!(cache.service("Space Travel").await.is_none());
    }

    #[tokio::test]
    async fn test_title_change_behaves_like_fresh_mount() {
        let (client, cache) = fixture();
        let mut query = ServiceQuery::new(
            Arc::clone(&client),
            cache,
            Some("Web Design".to_string()),
        );
        query.load().await;

        query.set_title(Some("Branding".to_string())).await;

        let state = query.state().await;
        assert_eq!(state.data.map(|s| s.title), Some("Branding".to_string()));
        assert_eq!(client.transport().request_count(), 2);
    }
}

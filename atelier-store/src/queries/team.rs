//! Team query handle.

use atelier_core::TeamMember;
use atelier_fetch::{ApiTransport, ResourceClient};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::cache::ResourceCache;
use crate::query::{QueryCore, QueryState};

/// Query handle for the team collection.
pub struct TeamQuery<T: ApiTransport> {
    client: Arc<ResourceClient<T>>,
    cache: ResourceCache,
    use_cache: bool,
    core: QueryCore<Vec<TeamMember>>,
}

impl<T: ApiTransport> TeamQuery<T> {
    /// Creates a handle for the team collection.
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
            if let Some(team) = self.cache.team().await {
                debug!("Team cache hit");
                self.core.resolve_cached(team).await;
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
        match self.client.team_members().await {
            Ok(team) => {
                if write_cache {
                    self.cache.set_team(team.clone()).await;
                }
                self.core.succeed(team).await;
            }
            Err(e) => self.core.fail(e).await,
        }
    }

    /// Snapshot of the current `{is_loading, error, data}` state.
    pub async fn state(&self) -> QueryState<Vec<TeamMember>> {
        self.core.snapshot().await
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.core.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_fetch::InMemoryTransport;

    fn fixture() -> (Arc<ResourceClient<InMemoryTransport>>, ResourceCache) {
        let transport = InMemoryTransport::new(
            vec![],
            vec![],
            vec![TeamMember {
                id: 1,
                name: "Mara Lindqvist".to_string(),
                role: "Creative Director".to_string(),
                bio: None,
                image: "/images/team/mara.jpg".to_string(),
            }],
        );
        (Arc::new(ResourceClient::new(transport)), ResourceCache::new())
    }

    #[tokio::test]
    async fn test_load_then_cache_hit() {
        let (client, cache) = fixture();
        let query = TeamQuery::new(Arc::clone(&client), cache);

        query.load().await;
        query.load().await;

        assert_eq!(client.transport().request_count(), 1);
        assert_eq!(query.state().await.data.map(|t| t.len()), Some(1));
    }

    #[tokio::test]
    async fn test_offline_failure_surfaces_fixed_message() {
        let (client, cache) = fixture();
        let query = TeamQuery::new(Arc::clone(&client), cache.clone());

        client.transport().set_offline(true);
        query.load().await;

        let state = query.state().await;
        assert_eq!(
            state.error.map(|e| e.to_string()),
            Some("Failed to fetch team members".to_string())
        );
        assert!(cache.team().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_forces_next_load_to_fetch() {
        let (client, cache) = fixture();
        let query = TeamQuery::new(Arc::clone(&client), cache.clone());

        query.load().await;
        cache.clear().await;
        query.load().await;

        assert_eq!(client.transport().request_count(), 2);
    }
}

//! Query state shape and shared state plumbing.

use atelier_fetch::FetchError;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// The uniform shape every query handle exposes.
///
/// - loading: `is_loading` true, previous `data` still visible during a
///   manual refetch (stale-while-revalidate)
/// - error: `error` set, `data` cleared
/// - success: `data` set, `error` cleared
/// - idle/short-circuit: all three empty (absent key, no network call)
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// True while a fetch is in flight.
    pub is_loading: bool,
    /// The failure of the most recent fetch, if it failed.
    pub error: Option<FetchError>,
    /// The most recent successful payload.
    pub data: Option<T>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            data: None,
        }
    }
}

impl<T> QueryState<T> {
    /// True when neither loading, nor failed, nor resolved.
    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.data.is_none()
    }
}

// ============================================================================
// Query Core
// ============================================================================

/// State holder shared by every query handle: the current
/// [`QueryState`] plus a version channel bumped on each transition, so
/// consumers can re-render reactively.
#[derive(Debug)]
pub(crate) struct QueryCore<T> {
    state: Arc<RwLock<QueryState<T>>>,
    notify: watch::Sender<u64>,
}

impl<T: Clone> QueryCore<T> {
    pub(crate) fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(QueryState::default())),
            notify,
        }
    }

    /// Snapshot of the current state.
    pub(crate) async fn snapshot(&self) -> QueryState<T> {
        self.state.read().await.clone()
    }

    /// Subscribes to state transitions.
    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    /// Returns to the idle state. Used when the key input is absent and
    /// when the key changes (the new key starts from a clean mount).
    pub(crate) async fn reset(&self) {
        *self.state.write().await = QueryState::default();
        self.bump();
    }

    /// Marks a fetch as in flight. Previous data stays visible.
    pub(crate) async fn begin(&self) {
        self.state.write().await.is_loading = true;
        self.bump();
    }

    /// Resolves with fresh data.
    pub(crate) async fn succeed(&self, data: T) {
        *self.state.write().await = QueryState {
            is_loading: false,
            error: None,
            data: Some(data),
        };
        self.bump();
    }

    /// Resolves synchronously from a cache hit; no loading flip happens.
    pub(crate) async fn resolve_cached(&self, data: T) {
        self.succeed(data).await;
    }

    /// Records a failure. Data is cleared; errors are never retried
    /// automatically.
    pub(crate) async fn fail(&self, error: FetchError) {
        *self.state.write().await = QueryState {
            is_loading: false,
            error: Some(error),
            data: None,
        };
        self.bump();
    }

    fn bump(&self) {
        self.notify.send_modify(|version| *version += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_transitions() {
        let core: QueryCore<u32> = QueryCore::new();
        assert!(core.snapshot().await.is_idle());

        core.begin().await;
        assert!(core.snapshot().await.is_loading);

        core.succeed(7).await;
        let state = core.snapshot().await;
        assert!(!state.is_loading);
        assert_eq!(state.data, Some(7));
        assert!(state.error.is_none());

        core.fail(FetchError::Projects).await;
        let state = core.snapshot().await;
        assert!(state.data.is_none());
        assert_eq!(state.error, Some(FetchError::Projects));

        core.reset().await;
        assert!(core.snapshot().await.is_idle());
    }

    #[tokio::test]
    async fn test_begin_keeps_previous_data_visible() {
        let core: QueryCore<u32> = QueryCore::new();
        core.succeed(1).await;
        core.begin().await;

        let state = core.snapshot().await;
        assert!(state.is_loading);
        assert_eq!(state.data, Some(1));
    }

    #[tokio::test]
    async fn test_subscribers_see_every_transition() {
        let core: QueryCore<u32> = QueryCore::new();
        let rx = core.subscribe();
        let before = *rx.borrow();

        core.begin().await;
        core.succeed(1).await;

        assert_eq!(*rx.borrow(), before + 2);
    }
}

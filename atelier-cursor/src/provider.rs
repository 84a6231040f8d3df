//! Cursor provider and subscription handles.

use std::sync::{Arc, Mutex, Weak};
use tokio::sync::watch;
use tracing::debug;

use crate::error::CursorError;
use crate::events::{ListenerId, PointerEvents, Position};

// ============================================================================
// Shared State
// ============================================================================

/// State shared between the provider, its handles, and the registered
/// pointer listener.
struct CursorShared {
    position: Mutex<Position>,
    intent_label: Mutex<String>,
    notify: watch::Sender<u64>,
}

impl CursorShared {
    fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            position: Mutex::new(Position::default()),
            intent_label: Mutex::new(String::new()),
            notify,
        }
    }

    fn set_position(&self, position: Position) {
        if let Ok(mut current) = self.position.lock() {
            *current = position;
        }
        self.bump();
    }

    fn bump(&self) {
        self.notify.send_modify(|version| *version += 1);
    }
}

// ============================================================================
// Cursor Provider
// ============================================================================

/// Owner of the cursor state for one mounted tree.
///
/// Construct exactly one provider per mounted application tree and pass
/// [`CursorHandle`]s down to interactive components. Mounting registers
/// a pointer-move listener with the given event source; dropping the
/// provider (or calling [`unmount`](Self::unmount)) removes that same
/// registration, after which every outstanding handle fails loudly.
pub struct CursorProvider {
    shared: Arc<CursorShared>,
    events: Arc<dyn PointerEvents>,
    listener: ListenerId,
}

impl CursorProvider {
    /// Mounts a provider on the given pointer event source.
    ///
    /// Position starts at `(0, 0)` and the intent label starts empty.
    /// Every move event synchronously updates the stored position and
    /// notifies subscribers before the next event is processed.
    pub fn mount(events: Arc<dyn PointerEvents>) -> Self {
        let shared = Arc::new(CursorShared::new());

        let weak = Arc::downgrade(&shared);
        let listener = events.add_listener(Arc::new(move |event| {
            // A dispatch may still be in flight while the provider is
            // being torn down; dropping the event then is the tolerated
            // outcome, not an error.
            if let Some(shared) = weak.upgrade() {
                shared.set_position(event.position);
            }
        }));

        debug!("Cursor provider mounted");
        Self {
            shared,
            events,
            listener,
        }
    }

    /// Returns a handle for components inside this provider's tree.
    pub fn handle(&self) -> CursorHandle {
        CursorHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Unmounts the provider, removing its pointer listener.
    ///
    /// Equivalent to dropping it; provided for call sites where the
    /// teardown should be explicit.
    pub fn unmount(self) {}
}

impl Drop for CursorProvider {
    fn drop(&mut self) {
        self.events.remove_listener(self.listener);
        debug!("Cursor provider unmounted");
    }
}

impl std::fmt::Debug for CursorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorProvider")
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Cursor Handle
// ============================================================================

/// The subscription point interactive components hold.
///
/// Cheap to clone. Reads observe the provider's current state; label
/// writes overwrite unconditionally (last-writer-wins, no stacking or
/// priority between overlapping hover regions).
///
/// The plain accessors panic when the provider is no longer mounted -
/// that always indicates a wiring bug, and masking it with defaults
/// would hide the bug until production. The `try_` variants exist for
/// hosts that prefer to surface the misuse as an error.
#[derive(Clone)]
pub struct CursorHandle {
    shared: Weak<CursorShared>,
}

impl CursorHandle {
    fn shared(&self) -> Arc<CursorShared> {
        self.try_shared().unwrap_or_else(|e| panic!("{e}"))
    }

    fn try_shared(&self) -> Result<Arc<CursorShared>, CursorError> {
        self.shared.upgrade().ok_or(CursorError::ProviderUnmounted)
    }

    /// Returns the last known pointer position.
    ///
    /// # Panics
    ///
    /// Panics if the provider is no longer mounted.
    pub fn position(&self) -> Position {
        self.try_position().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible variant of [`position`](Self::position).
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ProviderUnmounted`] after teardown.
    pub fn try_position(&self) -> Result<Position, CursorError> {
        let shared = self.try_shared()?;
        let position = shared
            .position
            .lock()
            .map(|p| *p)
            .unwrap_or_default();
        Ok(position)
    }

    /// Returns the current intent label; empty means no active intent.
    ///
    /// # Panics
    ///
    /// Panics if the provider is no longer mounted.
    pub fn intent_label(&self) -> String {
        self.try_intent_label().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible variant of [`intent_label`](Self::intent_label).
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ProviderUnmounted`] after teardown.
    pub fn try_intent_label(&self) -> Result<String, CursorError> {
        let shared = self.try_shared()?;
        let label = shared
            .intent_label
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default();
        Ok(label)
    }

    /// Overwrites the intent label. Side effect only; no merge, no queue.
    ///
    /// # Panics
    ///
    /// Panics if the provider is no longer mounted.
    pub fn set_intent_label(&self, text: &str) {
        self.try_set_intent_label(text)
            .unwrap_or_else(|e| panic!("{e}"));
    }

    /// Fallible variant of [`set_intent_label`](Self::set_intent_label).
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ProviderUnmounted`] after teardown.
    pub fn try_set_intent_label(&self, text: &str) -> Result<(), CursorError> {
        let shared = self.try_shared()?;
        if let Ok(mut label) = shared.intent_label.lock() {
            *label = text.to_string();
        }
        shared.bump();
        Ok(())
    }

    /// Subscribes to state changes. The receiver is bumped on every
    /// position update and every label write.
    ///
    /// # Panics
    ///
    /// Panics if the provider is no longer mounted.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared().notify.subscribe()
    }
}

impl std::fmt::Debug for CursorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorHandle")
            .field("mounted", &(self.shared.strong_count() > 0))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    fn mounted() -> (EventBus, CursorProvider) {
        let bus = EventBus::new();
        let provider = CursorProvider::mount(Arc::new(bus.clone()));
        (bus, provider)
    }

    #[test]
    fn test_position_starts_at_origin() {
        let (_bus, provider) = mounted();
        assert_eq!(provider.handle().position(), Position::new(0, 0));
    }

    #[test]
    fn test_pointer_move_updates_position() {
        let (bus, provider) = mounted();
        let handle = provider.handle();

        bus.dispatch_pointer_move(100, 200);
        assert_eq!(handle.position(), Position::new(100, 200));

        // Strictly in arrival order, no coalescing: the last event wins.
        bus.dispatch_pointer_move(5, 5);
        bus.dispatch_pointer_move(7, 9);
        assert_eq!(handle.position(), Position::new(7, 9));
    }

    #[test]
    fn test_intent_label_last_write_wins() {
        let (_bus, provider) = mounted();
        let handle = provider.handle();

        assert_eq!(handle.intent_label(), "");
        handle.set_intent_label("A");
        handle.set_intent_label("B");
        assert_eq!(handle.intent_label(), "B");
    }

    #[test]
    fn test_unmount_removes_the_registered_listener() {
        let (bus, provider) = mounted();
        assert_eq!(bus.listener_count(), 1);
        provider.unmount();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_subscribers_notified_on_moves_and_label_writes() {
        let (bus, provider) = mounted();
        let handle = provider.handle();
        let rx = handle.subscribe();
        let before = *rx.borrow();

        bus.dispatch_pointer_move(1, 2);
        handle.set_intent_label("VIEW");

        assert_eq!(*rx.borrow(), before + 2);
    }

    #[test]
    fn test_try_accessors_error_after_unmount() {
        let (_bus, provider) = mounted();
        let handle = provider.handle();
        drop(provider);

        assert_eq!(
            handle.try_position(),
            Err(CursorError::ProviderUnmounted)
        );
        assert_eq!(
            handle.try_set_intent_label("VIEW"),
            Err(CursorError::ProviderUnmounted)
        );
    }

    #[test]
    #[should_panic(expected = "outside a mounted cursor provider")]
    fn test_plain_accessor_panics_after_unmount() {
        let (_bus, provider) = mounted();
        let handle = provider.handle();
        drop(provider);
        let _ = handle.position();
    }

    #[test]
    fn test_dispatch_after_unmount_is_tolerated() {
        let (bus, provider) = mounted();
        drop(provider);
        // Listener already removed; a straggling event must be harmless.
        bus.dispatch_pointer_move(50, 50);
    }
}

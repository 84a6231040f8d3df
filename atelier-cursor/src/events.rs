//! Pointer event source abstraction.
//!
//! In a browser host the event source is the global window; here it is a
//! trait so the provider can register against any host input system.
//! [`EventBus`] is the in-process implementation used by tests and the
//! CLI demo: it dispatches synchronously, in registration order, one
//! event at a time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Pointer coordinates in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMove {
    /// Pointer position at the time of the event.
    pub position: Position,
}

/// Identifier for a registered pointer listener.
///
/// Removal must be called with the id returned by the matching
/// registration; ids are never reused within one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A pointer-move callback.
pub type PointerListener = Arc<dyn Fn(PointerMove) + Send + Sync>;

/// A source of pointer-move events (the window stand-in).
pub trait PointerEvents: Send + Sync {
    /// Registers a listener; it receives every subsequent move event.
    fn add_listener(&self, listener: PointerListener) -> ListenerId;

    /// Removes a previously registered listener. Removing an unknown id
    /// is a no-op.
    fn remove_listener(&self, id: ListenerId);
}

// ============================================================================
// Event Bus
// ============================================================================

/// In-process pointer event source.
///
/// Clones share the same listener table. Dispatch is synchronous: every
/// listener observes the event before [`dispatch_pointer_move`] returns,
/// so consumers always see positions in arrival order.
///
/// [`dispatch_pointer_move`]: EventBus::dispatch_pointer_move
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

#[derive(Default)]
struct BusInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, PointerListener)>>,
}

impl EventBus {
    /// Creates an empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a pointer-move event to every listener, in
    /// registration order.
    ///
    /// # Panics
    ///
    /// Panics if the listener table mutex is poisoned.
    pub fn dispatch_pointer_move(&self, x: i32, y: i32) {
        let event = PointerMove {
            position: Position::new(x, y),
        };
        // Snapshot so listeners may register/remove during dispatch.
        let listeners: Vec<PointerListener> = self
            .inner
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Returns how many listeners are currently registered.
    ///
    /// # Panics
    ///
    /// Panics if the listener table mutex is poisoned.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().unwrap().len()
    }
}

impl PointerEvents for EventBus {
    fn add_listener(&self, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.push((id, listener));
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        if let Ok(mut listeners) = self.inner.listeners.lock() {
            listeners.retain(|(registered, _)| *registered != id);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_listeners_in_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bus.add_listener(Arc::new(move |ev: PointerMove| {
                seen.lock().unwrap().push((tag, ev.position));
            }));
        }

        bus.dispatch_pointer_move(10, 20);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("first", Position::new(10, 20)));
        assert_eq!(seen[1], ("second", Position::new(10, 20)));
    }

    #[test]
    fn test_remove_listener_stops_delivery() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));

        let id = {
            let count = Arc::clone(&count);
            bus.add_listener(Arc::new(move |_| {
                *count.lock().unwrap() += 1;
            }))
        };

        bus.dispatch_pointer_move(1, 1);
        bus.remove_listener(id);
        bus.dispatch_pointer_move(2, 2);

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let bus = EventBus::new();
        let id = bus.add_listener(Arc::new(|_| {}));
        bus.remove_listener(id);
        bus.remove_listener(id);
        assert_eq!(bus.listener_count(), 0);
    }
}

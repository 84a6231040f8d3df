//! End-to-end cursor lifecycle scenario.

use atelier_cursor::{CursorProvider, EventBus, HoverRegion, Position};
use std::sync::Arc;

#[test]
fn mount_move_label_clear_unmount() {
    let bus = EventBus::new();
    let provider = CursorProvider::mount(Arc::new(bus.clone()));
    let handle = provider.handle();

    // Fresh mount: origin position, no active intent.
    assert_eq!(handle.position(), Position::new(0, 0));
    assert_eq!(handle.intent_label(), "");

    bus.dispatch_pointer_move(50, 50);
    assert_eq!(handle.position(), Position::new(50, 50));
    assert_eq!(handle.intent_label(), "");

    handle.set_intent_label("VIEW");
    assert_eq!(handle.intent_label(), "VIEW");

    handle.set_intent_label("");
    assert_eq!(handle.intent_label(), "");

    provider.unmount();
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn hover_regions_over_a_work_grid() {
    let bus = EventBus::new();
    let provider = CursorProvider::mount(Arc::new(bus.clone()));
    let handle = provider.handle();

    let cards = [
        HoverRegion::new("VIEW"),
        HoverRegion::new("VIEW"),
        HoverRegion::new("CLICK"),
    ];

    // Sweeping across the grid: each enter overwrites the previous label.
    for (i, card) in cards.iter().enumerate() {
        bus.dispatch_pointer_move(100 * i as i32, 40);
        card.on_enter(&handle);
        assert_eq!(handle.intent_label(), card.label());
    }

    cards[2].on_leave(&handle);
    assert_eq!(handle.intent_label(), "");
}

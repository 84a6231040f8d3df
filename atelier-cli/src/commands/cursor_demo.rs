//! Cursor demo - replay a scripted pointer interaction.
//!
//! Shows the cursor state machine the way the site uses it: a provider
//! mounted on an event source, hover regions writing intent labels, and
//! the overlay (here: stdout) reading position and label after every
//! event.

use anyhow::Result;
use atelier_cursor::{CursorProvider, EventBus, HoverRegion};
use std::sync::Arc;

use crate::Cli;

/// Runs the cursor demo.
pub fn run(_cli: &Cli) -> Result<()> {
    let bus = EventBus::new();
    let provider = CursorProvider::mount(Arc::new(bus.clone()));
    let handle = provider.handle();

    let view = HoverRegion::new("VIEW");
    let click = HoverRegion::new("CLICK");

    // A sweep across two project cards.
    let script: [(i32, i32, Option<&HoverRegion>); 5] = [
        (120, 80, None),
        (240, 80, Some(&view)),
        (360, 80, None),
        (480, 80, Some(&click)),
        (600, 80, None),
    ];

    let mut hovered: Option<&HoverRegion> = None;
    for (x, y, region) in script {
        bus.dispatch_pointer_move(x, y);
        if let Some(previous) = hovered.take() {
            previous.on_leave(&handle);
        }
        if let Some(region) = region {
            region.on_enter(&handle);
            hovered = Some(region);
        }

        let position = handle.position();
        let label = handle.intent_label();
        let label = if label.is_empty() { "-" } else { &label };
        println!("({:>3}, {:>3})  label: {label}", position.x, position.y);
    }

    provider.unmount();
    println!("unmounted, listeners remaining: {}", bus.listener_count());
    Ok(())
}

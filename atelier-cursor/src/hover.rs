//! Hover region helper for interactive elements.

use crate::provider::CursorHandle;

/// An interactive region that advertises an intent label while hovered.
///
/// `on_enter` writes the region's label, `on_leave` clears it. The label
/// is last-writer-wins: when regions nest or overlap, whichever
/// enter/leave handler fired most recently determines the label. In
/// particular, a child's leave firing after its parent's enter will
/// clear the parent's label - a known limitation of the flat model, kept
/// deliberately instead of a stacking scheme nothing on the site needs.
#[derive(Debug, Clone)]
pub struct HoverRegion {
    label: String,
}

impl HoverRegion {
    /// Creates a region with the given intent label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label this region advertises.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Called when the pointer enters the region.
    pub fn on_enter(&self, cursor: &CursorHandle) {
        cursor.set_intent_label(&self.label);
    }

    /// Called when the pointer leaves the region.
    pub fn on_leave(&self, cursor: &CursorHandle) {
        cursor.set_intent_label("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::provider::CursorProvider;
    use std::sync::Arc;

    #[test]
    fn test_enter_and_leave_drive_the_label() {
        let provider = CursorProvider::mount(Arc::new(EventBus::new()));
        let handle = provider.handle();
        let region = HoverRegion::new("VIEW");

        region.on_enter(&handle);
        assert_eq!(handle.intent_label(), "VIEW");

        region.on_leave(&handle);
        assert_eq!(handle.intent_label(), "");
    }

    #[test]
    fn test_overlapping_regions_resolve_to_last_writer() {
        let provider = CursorProvider::mount(Arc::new(EventBus::new()));
        let handle = provider.handle();
        let card = HoverRegion::new("VIEW");
        let member = HoverRegion::new("Mara Lindqvist");

        card.on_enter(&handle);
        member.on_enter(&handle);
        assert_eq!(handle.intent_label(), "Mara Lindqvist");

        // The child's leave clears the label even though the pointer is
        // still inside the parent - the documented flat-model behavior.
        member.on_leave(&handle);
        assert_eq!(handle.intent_label(), "");
    }
}

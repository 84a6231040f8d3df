//! Cursor error types.

use thiserror::Error;

/// Errors for cursor state access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// A handle was used after its provider was unmounted, or was never
    /// attached to a mounted provider. This is an integration bug in the
    /// component tree, not a runtime condition.
    #[error("Cursor handle used outside a mounted cursor provider")]
    ProviderUnmounted,
}

//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Fetch Error
// ============================================================================

/// Error type for resource fetch operations.
///
/// The `Display` strings are a stable contract: page code and the test
/// suite match on these literal messages. A non-2xx status and a
/// network-level failure collapse into the same operation-named message
/// on purpose, so callers cannot distinguish "absent" from "unreachable";
/// the underlying cause goes to the log only.
///
/// Identifier-carrying variants interpolate the raw identifier as given
/// by the caller, not its percent-encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The project collection could not be fetched.
    #[error("Failed to fetch projects")]
    Projects,

    /// A single project lookup failed (missing id or transport failure).
    #[error("Failed to fetch project with id {0}")]
    ProjectById(u64),

    /// A category-filtered project query failed.
    #[error("Failed to fetch projects with category {0}")]
    ProjectsByCategory(String),

    /// The service collection could not be fetched.
    #[error("Failed to fetch services")]
    Services,

    /// A single service lookup failed (missing title or transport failure).
    #[error("Failed to fetch service with title {0}")]
    ServiceByTitle(String),

    /// The team collection could not be fetched.
    #[error("Failed to fetch team members")]
    TeamMembers,
}

// ============================================================================
// Transport Error
// ============================================================================

/// Error type for the transport layer.
///
/// Never reaches page code; [`ResourceClient`](crate::ResourceClient)
/// folds it into the matching [`FetchError`] after logging.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server answered with a non-2xx status.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// Request never completed (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_are_literal() {
        assert_eq!(FetchError::Projects.to_string(), "Failed to fetch projects");
        assert_eq!(
            FetchError::ProjectById(42).to_string(),
            "Failed to fetch project with id 42"
        );
        assert_eq!(
            FetchError::ProjectsByCategory("Motion Design".to_string()).to_string(),
            "Failed to fetch projects with category Motion Design"
        );
        assert_eq!(FetchError::Services.to_string(), "Failed to fetch services");
        assert_eq!(
            FetchError::ServiceByTitle("Web Design".to_string()).to_string(),
            "Failed to fetch service with title Web Design"
        );
        assert_eq!(
            FetchError::TeamMembers.to_string(),
            "Failed to fetch team members"
        );
    }
}

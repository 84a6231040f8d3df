//! API configuration and endpoint paths.
//!
//! All resource endpoints live under `/api` on the site origin. Dynamic
//! path segments (category names, service titles) may contain spaces and
//! special characters and are percent-encoded before being embedded.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

/// Default base URL, standing in for the same-origin deployment.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Characters that must be escaped inside a single path segment.
///
/// CONTROLS plus everything that would terminate or restructure the path:
/// space, `"`, `<`, `>`, `` ` ``, `#`, `?`, `{`, `}`, `/`, and `%` itself.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encodes a dynamic path segment.
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

// ============================================================================
// Endpoints
// ============================================================================

/// Resource endpoint paths.
pub mod endpoints {
    use super::encode_segment;

    /// `GET /api/projects` - all projects.
    pub const PROJECTS: &str = "/api/projects";

    /// `GET /api/services` - all services.
    pub const SERVICES: &str = "/api/services";

    /// `GET /api/team` - all team members.
    pub const TEAM: &str = "/api/team";

    /// `GET /api/projects/{id}` - single project.
    pub fn project_by_id(id: u64) -> String {
        format!("{PROJECTS}/{id}")
    }

    /// `GET /api/projects/category/{category}` - filtered projects.
    pub fn projects_by_category(category: &str) -> String {
        format!("{PROJECTS}/category/{}", encode_segment(category))
    }

    /// `GET /api/services/{title}` - single service.
    pub fn service_by_title(title: &str) -> String {
        format!("{SERVICES}/{}", encode_segment(title))
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Configuration for the site API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Creates a config with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Parses a base URL string into a config.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if the string is not a valid URL.
    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// # Panics
    ///
    /// Panics if the path cannot be joined onto the base URL, which can
    /// only happen for a malformed endpoint constant.
    pub fn url_for(&self, path: &str) -> String {
        self.base_url
            .join(path)
            .unwrap_or_else(|e| panic!("Invalid endpoint path {path:?}: {e}"))
            .to_string()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

// ============================================================================
// Tests
// ============================================================================

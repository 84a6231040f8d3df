//! Studio service model.

use serde::{Deserialize, Serialize};

use crate::key;

/// A studio service.
///
/// The `title` acts as the natural key; all lookups and cache entries use
/// its normalized (uppercased) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service title, the natural key (case-insensitive).
    pub title: String,
    /// Short description.
    pub description: String,
    /// Optional icon path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Feature bullet points.
    pub features: Vec<String>,
}

impl Service {
    /// Returns true if this service's title matches the given one,
    /// compared case-insensitively.
    pub fn matches_title(&self, title: &str) -> bool {
        key::eq_key(&self.title, title)
    }

    /// Returns the normalized cache key for this service.
    pub fn cache_key(&self) -> String {
        key::normalize(&self.title)
    }
}

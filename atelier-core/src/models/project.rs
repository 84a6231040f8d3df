//! Portfolio project model.

use serde::{Deserialize, Serialize};

use crate::key;

/// A portfolio project.
///
/// Projects are read-only records sourced from the site backend. The `id`
/// is a stable integer and is the cache key for single-project lookups;
/// `category` is matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable unique id.
    pub id: u64,
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Path to the cover image.
    pub image: String,
    /// Year (or date label) the project shipped.
    pub year: String,
    /// Category label, e.g. "Branding".
    pub category: String,
    /// Services delivered for this project.
    pub services: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Optional external link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    /// Returns true if this project belongs to the given category,
    /// compared case-insensitively.
    pub fn matches_category(&self, category: &str) -> bool {
        key::eq_key(&self.category, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: &str) -> Project {
        Project {
            id: 1,
            title: "Aurora Identity".to_string(),
            description: "Brand identity for a lighting studio".to_string(),
            image: "/images/projects/aurora.jpg".to_string(),
            year: "2024".to_string(),
            category: category.to_string(),
            services: vec!["Identity".to_string()],
            tags: vec!["print".to_string()],
            link: None,
        }
    }

    #[test]
    fn test_matches_category_case_insensitive() {
        let p = project("Branding");
        assert!(p.matches_category("BRANDING"));
        assert!(p.matches_category("branding"));
        assert!(!p.matches_category("Motion"));
    }
}

//! Team member model.

use serde::{Deserialize, Serialize};

/// A studio team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Stable unique id.
    pub id: u64,
    /// Full name.
    pub name: String,
    /// Role within the studio.
    pub role: String,
    /// Optional short bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Path to the portrait image.
    pub image: String,
}

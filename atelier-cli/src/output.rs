//! Output formatting for CLI commands.

use anyhow::Result;
use atelier_core::{Project, Service, TeamMember};
use serde::Serialize;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Formats one project as a line for list output.
    pub fn format_project_line(&self, project: &Project) -> String {
        format!(
            "{:>4}  {}  {}",
            project.id,
            self.bold(&project.title),
            self.dim(&format!("{} · {}", project.category, project.year)),
        )
    }

    /// Formats a full project record.
    pub fn format_project(&self, project: &Project) -> String {
        let mut lines = vec![
            format!("{} ({})", self.bold(&project.title), project.year),
            format!("Category: {}", project.category),
            project.description.clone(),
        ];
        if !project.services.is_empty() {
            lines.push(format!("Services: {}", project.services.join(", ")));
        }
        if !project.tags.is_empty() {
            lines.push(self.dim(&format!("Tags: {}", project.tags.join(", "))));
        }
        if let Some(link) = &project.link {
            lines.push(link.clone());
        }
        lines.join("\n")
    }

    /// Formats one service as a line for list output.
    pub fn format_service_line(&self, service: &Service) -> String {
        format!(
            "{}  {}",
            self.bold(&service.title),
            self.dim(&service.description)
        )
    }

    /// Formats a full service record.
    pub fn format_service(&self, service: &Service) -> String {
        let mut lines = vec![self.bold(&service.title), service.description.clone()];
        for feature in &service.features {
            lines.push(format!("  - {feature}"));
        }
        lines.join("\n")
    }

    /// Formats one team member as a line for list output.
    pub fn format_member_line(&self, member: &TeamMember) -> String {
        format!(
            "{:>4}  {}  {}",
            member.id,
            self.bold(&member.name),
            self.dim(&member.role),
        )
    }
}

// ============================================================================
// JSON Output
// ============================================================================

/// Serializes a value as JSON, optionally pretty-printed.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_has_no_escapes() {
        let formatter = TextFormatter::new(false);
        let line = formatter.format_member_line(&TeamMember {
            id: 1,
            name: "Mara Lindqvist".to_string(),
            role: "Creative Director".to_string(),
            bio: None,
            image: String::new(),
        });
        assert!(!line.contains("\x1b["));
        assert!(line.contains("Mara Lindqvist"));
    }

    #[test]
    fn test_colored_formatter_bolds_names() {
        let formatter = TextFormatter::new(true);
        let line = formatter.format_service_line(&Service {
            title: "Web Design".to_string(),
            description: "Sites".to_string(),
            icon: None,
            features: vec![],
        });
        assert!(line.contains("\x1b[1mWeb Design\x1b[0m"));
    }
}

//! Typed resource fetch operations.
//!
//! One method per logical query. Each method either resolves with the
//! payload exactly as the backend returned it, or fails with the fixed
//! message for that operation. No caching happens here; that is the
//! store layer's job.

use atelier_core::{Project, Service, TeamMember};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::endpoints;
use crate::error::FetchError;
use crate::transport::ApiTransport;

/// Typed client over an [`ApiTransport`].
#[derive(Debug, Clone)]
pub struct ResourceClient<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> ResourceClient<T> {
    /// Creates a client over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches all projects.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch projects` on any transport failure.
    pub async fn all_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_as(endpoints::PROJECTS, FetchError::Projects).await
    }

    /// Fetches a single project by id.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch project with id {id}` when the id has
    /// no matching record or the request fails.
    pub async fn project_by_id(&self, id: u64) -> Result<Project, FetchError> {
        self.get_as(&endpoints::project_by_id(id), FetchError::ProjectById(id))
            .await
    }

    /// Fetches the projects in a category, possibly empty.
    ///
    /// The category may contain spaces and special characters; it is
    /// percent-encoded in the request path but interpolated raw in the
    /// error message.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch projects with category {category}` on
    /// any transport failure.
    pub async fn projects_by_category(&self, category: &str) -> Result<Vec<Project>, FetchError> {
        self.get_as(
            &endpoints::projects_by_category(category),
            FetchError::ProjectsByCategory(category.to_string()),
        )
        .await
    }

    /// Fetches all services.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch services` on any transport failure.
    pub async fn all_services(&self) -> Result<Vec<Service>, FetchError> {
        self.get_as(endpoints::SERVICES, FetchError::Services).await
    }

    /// Fetches a single service by title, compared case-insensitively
    /// by the backend.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch service with title {title}` when the
    /// title has no matching record or the request fails.
    pub async fn service_by_title(&self, title: &str) -> Result<Service, FetchError> {
        self.get_as(
            &endpoints::service_by_title(title),
            FetchError::ServiceByTitle(title.to_string()),
        )
        .await
    }

    /// Fetches all team members.
    ///
    /// # Errors
    ///
    /// Fails with `Failed to fetch team members` on any transport failure.
    pub async fn team_members(&self) -> Result<Vec<TeamMember>, FetchError> {
        self.get_as(endpoints::TEAM, FetchError::TeamMembers).await
    }

    /// Shared fetch-and-decode path. Every failure mode (non-2xx,
    /// network, malformed body) folds into the operation's fixed error
    /// after logging the actual cause.
    async fn get_as<R: DeserializeOwned>(&self, path: &str, err: FetchError) -> Result<R, FetchError> {
        debug!(path, "Fetching resource");
        match self.transport.get_json(path).await {
            Ok(body) => serde_json::from_value(body).map_err(|e| {
                warn!(path, error = %e, "Response body did not match the resource shape");
                err
            }),
            Err(e) => {
                warn!(path, error = %e, "Fetch failed");
                Err(err)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryTransport;

    fn project(id: u64, title: &str, category: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            image: format!("/images/projects/{id}.jpg"),
            year: "2024".to_string(),
            category: category.to_string(),
            services: vec![],
            tags: vec![],
            link: None,
        }
    }

    fn service(title: &str) -> Service {
        Service {
            title: title.to_string(),
            description: String::new(),
            icon: None,
            features: vec![],
        }
    }

    fn client() -> ResourceClient<InMemoryTransport> {
        ResourceClient::new(InMemoryTransport::new(
            vec![
                project(1, "Aurora Identity", "Branding"),
                project(2, "Northwind Rebrand", "BRANDING"),
                project(3, "Field Notes", "Editorial"),
            ],
            vec![service("Web Design"), service("Branding")],
            vec![TeamMember {
                id: 1,
                name: "Mara Lindqvist".to_string(),
                role: "Creative Director".to_string(),
                bio: None,
                image: "/images/team/mara.jpg".to_string(),
            }],
        ))
    }

    #[tokio::test]
    async fn test_all_projects() {
        let projects = client().all_projects().await.unwrap();
        assert_eq!(projects.len(), 3);
    }

    #[tokio::test]
    async fn test_project_by_id() {
        let project = client().project_by_id(2).await.unwrap();
        assert_eq!(project.title, "Northwind Rebrand");
    }

    #[tokio::test]
    async fn test_missing_project_names_id_in_message() {
        let err = client().project_by_id(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch project with id 99");
    }

    #[tokio::test]
    async fn test_projects_by_category_filters_case_insensitively() {
        let client = client();

        let branding = client.projects_by_category("branding").await.unwrap();
        assert_eq!(branding.len(), 2);
        assert!(branding.iter().all(|p| p.matches_category("BRANDING")));

        let missing = client.projects_by_category("Motion").await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_service_by_title_any_casing() {
        let client = client();
        let lower = client.service_by_title("web design").await.unwrap();
        let upper = client.service_by_title("WEB DESIGN").await.unwrap();
        let mixed = client.service_by_title("WeB DeSiGn").await.unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.title, "Web Design");
    }

    #[tokio::test]
    async fn test_team_members() {
        let team = client().team_members().await.unwrap();
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].name, "Mara Lindqvist");
    }

    #[tokio::test]
    async fn test_error_message_interpolates_raw_title() {
        let err = client().service_by_title("No Such Thing").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch service with title No Such Thing"
        );
    }

    #[tokio::test]
    async fn test_unreachable_and_not_found_read_identically() {
        let client = client();

        let not_found = client.project_by_id(99).await.unwrap_err();

        client.transport().set_offline(true);
        let offline = client.project_by_id(99).await.unwrap_err();

        // Callers cannot distinguish the two causes.
        assert_eq!(not_found, offline);
        assert_eq!(offline.to_string(), "Failed to fetch project with id 99");
    }

    #[tokio::test]
    async fn test_category_with_spaces_is_encoded_in_path() {
        let client = client();
        let _ = client.projects_by_category("Motion Design").await.unwrap();
        assert_eq!(
            client.transport().requests(),
            vec!["/api/projects/category/Motion%20Design".to_string()]
        );
    }
}

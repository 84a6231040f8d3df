//! Resource models for the Atelier studio site.
//!
//! Three read-only resource kinds are sourced from the site backend:
//!
//! - [`Project`] - portfolio projects, keyed by a stable integer id
//! - [`Service`] - studio services, keyed by title (case-insensitive)
//! - [`TeamMember`] - team members, keyed by a stable integer id

mod project;
mod service;
mod team;

pub use project::Project;
pub use service::Service;
pub use team::TeamMember;

// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Atelier Core
//!
//! Domain models and shared helpers for the Atelier studio site.
//!
//! This crate provides the foundational types used across all other
//! Atelier crates, including:
//!
//! - Resource models (projects, services, team members)
//! - Cache key normalization
//!
//! ## Key Types
//!
//! - [`Project`] - A portfolio project with category, services, and tags
//! - [`Service`] - A studio service, keyed by its title
//! - [`TeamMember`] - A studio team member
//!
//! Service titles and project categories are compared case-insensitively
//! throughout the system; [`key::normalize`] is the single normalization
//! used for every such comparison and cache key.

pub mod key;
pub mod models;

// Re-export all model types
pub use models::{Project, Service, TeamMember};

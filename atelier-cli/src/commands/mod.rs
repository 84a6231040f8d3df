//! CLI commands.

pub mod cursor_demo;
pub mod projects;
pub mod services;
pub mod team;

use anyhow::{Context, Result};
use atelier_fetch::{ApiConfig, HttpTransport, ResourceClient};
use atelier_store::ResourceCache;
use std::sync::Arc;

use crate::Cli;

/// Client plus cache, wired once per invocation.
pub struct AppContext {
    /// Typed resource client over HTTP.
    pub client: Arc<ResourceClient<HttpTransport>>,
    /// Shared resource cache (fresh per invocation; it exists so the
    /// query handles run exactly the wiring pages use).
    pub cache: ResourceCache,
}

impl AppContext {
    /// Builds the context from CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = ApiConfig::parse(&cli.base_url)
            .with_context(|| format!("invalid base URL: {}", cli.base_url))?;
        Ok(Self {
            client: Arc::new(ResourceClient::new(HttpTransport::new(config))),
            cache: ResourceCache::new(),
        })
    }
}

//! Services commands - list and show services.

use anyhow::{Result, bail};
use atelier_store::{ServiceQuery, ServicesQuery};
use std::sync::Arc;
use tracing::info;

use super::AppContext;
use crate::output::{TextFormatter, to_json};
use crate::{Cli, OutputFormat};

/// Runs the services list command.
pub async fn list(cli: &Cli) -> Result<()> {
    info!("Listing services");
    let ctx = AppContext::from_cli(cli)?;

    let query = ServicesQuery::new(Arc::clone(&ctx.client), ctx.cache.clone());
    query.load().await;

    let state = query.state().await;
    if let Some(error) = state.error {
        bail!("{error}");
    }
    let services = state.data.unwrap_or_default();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for service in &services {
                println!("{}", formatter.format_service_line(service));
            }
        }
        OutputFormat::Json => println!("{}", to_json(&services, cli.pretty)?),
    }

    Ok(())
}

/// Runs the service show command. Titles match case-insensitively.
pub async fn show(cli: &Cli, title: &str) -> Result<()> {
    info!(title, "Showing service");
    let ctx = AppContext::from_cli(cli)?;

    let query = ServiceQuery::new(
        Arc::clone(&ctx.client),
        ctx.cache.clone(),
        Some(title.to_string()),
    );
    query.load().await;

    let state = query.state().await;
    if let Some(error) = state.error {
        bail!("{error}");
    }
    let Some(service) = state.data else {
        bail!("no service data returned");
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_service(&service));
        }
        OutputFormat::Json => println!("{}", to_json(&service, cli.pretty)?),
    }

    Ok(())
}

//! Projects commands - list and show projects.

use anyhow::{Context, Result, bail};
use atelier_store::{ProjectQuery, ProjectsQuery};
use std::sync::Arc;
use tracing::info;

use super::AppContext;
use crate::output::{TextFormatter, to_json};
use crate::{Cli, OutputFormat};

/// Runs the projects list command.
pub async fn list(cli: &Cli, category: Option<&str>) -> Result<()> {
    info!(category = ?category, "Listing projects");
    let ctx = AppContext::from_cli(cli)?;

    let query = match category {
        Some(category) => {
            ProjectsQuery::with_category(Arc::clone(&ctx.client), ctx.cache.clone(), category)
        }
        None => ProjectsQuery::new(Arc::clone(&ctx.client), ctx.cache.clone()),
    };
    query.load().await;

    let state = query.state().await;
    if let Some(error) = state.error {
        bail!("{error}");
    }
    let projects = state.data.unwrap_or_default();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for project in &projects {
                println!("{}", formatter.format_project_line(project));
            }
            println!();
            println!("Total: {} projects", projects.len());
        }
        OutputFormat::Json => println!("{}", to_json(&projects, cli.pretty)?),
    }

    Ok(())
}

/// Runs the project show command. The id arrives as a string from the
/// command line; numeric-string ids are parsed here, not in the fetch
/// layer.
pub async fn show(cli: &Cli, id: &str) -> Result<()> {
    let id: u64 = id
        .trim()
        .parse()
        .with_context(|| format!("invalid project id: {id}"))?;
    info!(id, "Showing project");
    let ctx = AppContext::from_cli(cli)?;

    let query = ProjectQuery::new(Arc::clone(&ctx.client), ctx.cache.clone(), Some(id));
    query.load().await;

    let state = query.state().await;
    if let Some(error) = state.error {
        bail!("{error}");
    }
    let Some(project) = state.data else {
        bail!("no project data returned");
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_project(&project));
        }
        OutputFormat::Json => println!("{}", to_json(&project, cli.pretty)?),
    }

    Ok(())
}

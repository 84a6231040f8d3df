//! Team command - list team members.

use anyhow::{Result, bail};
use atelier_store::TeamQuery;
use std::sync::Arc;
use tracing::info;

use super::AppContext;
use crate::output::{TextFormatter, to_json};
use crate::{Cli, OutputFormat};

/// Runs the team list command.
pub async fn list(cli: &Cli) -> Result<()> {
    info!("Listing team members");
    let ctx = AppContext::from_cli(cli)?;

    let query = TeamQuery::new(Arc::clone(&ctx.client), ctx.cache.clone());
    query.load().await;

    let state = query.state().await;
    if let Some(error) = state.error {
        bail!("{error}");
    }
    let team = state.data.unwrap_or_default();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for member in &team {
                println!("{}", formatter.format_member_line(member));
            }
        }
        OutputFormat::Json => println!("{}", to_json(&team, cli.pretty)?),
    }

    Ok(())
}

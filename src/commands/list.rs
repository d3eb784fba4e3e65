//! `list` command - tabular listing of the remote webhook definitions

use crate::Context;
use crate::ui;
use anyhow::{Context as AnyhowContext, Result};
use jwapi::Client;

pub fn run(_ctx: &Context, secret: &str, show_ids: bool) -> Result<()> {
    let client = Client::new(secret);
    let mut definitions = client
        .definitions()
        .context("failed to list webhooks from the remote service")?;

    if definitions.is_empty() {
        ui::info("No webhooks defined on the remote service");
        return Ok(());
    }

    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    let mut headers = vec!["Name", "URL", "Sites", "Events"];
    if show_ids {
        headers.insert(0, "Id");
    }

    let rows: Vec<Vec<String>> = definitions
        .iter()
        .map(|d| {
            let mut row = vec![
                d.name.clone(),
                d.endpoint.clone(),
                d.site_ids.join(","),
                d.events.join(","),
            ];
            if show_ids {
                row.insert(0, d.id.clone());
            }
            row
        })
        .collect();

    ui::table(&headers, &rows);

    Ok(())
}

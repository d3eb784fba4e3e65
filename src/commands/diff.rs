//! `diff` command - preview what apply would change

use crate::Context;
use crate::declarations;
use crate::ui;
use anyhow::{Context as AnyhowContext, Result};
use colored::Colorize;
use jwapi::Client;
use reconcile::ChangeSet;
use std::path::Path;

pub fn run(ctx: &Context, secret: &str, file: &Path) -> Result<()> {
    ui::header("Webhook Diff");

    let declarations = declarations::load(file)?;

    let client = Client::new(secret);
    let definitions = client
        .definitions()
        .context("failed to list webhooks from the remote service")?;

    let changeset = ChangeSet::build(&declarations, &definitions);

    if !changeset.has_changes() {
        ui::success("No changes - remote state matches the declaration");
        return Ok(());
    }

    render(ctx, &changeset);

    println!();
    ui::info(&format!(
        "{} to create, {} to update, {} to delete",
        changeset.create.len(),
        changeset.modify.len(),
        changeset.delete.len()
    ));

    Ok(())
}

/// Render a changeset as +/~/- lines, one entity per line.
pub fn render(ctx: &Context, changeset: &ChangeSet) {
    if !changeset.create.is_empty() {
        ui::section("Create");
        for declaration in &changeset.create {
            println!("  {} {}", "+".green(), declaration.name.bold());
            if !ctx.quiet {
                ui::dim(&format!("    {}", declaration.endpoint));
                ui::dim(&format!("    events: {}", declaration.events.join(", ")));
            }
        }
    }

    if !changeset.modify.is_empty() {
        ui::section("Update");
        for m in &changeset.modify {
            println!("  {} {}", "~".yellow(), m.name().bold());
            if !ctx.quiet {
                if m.declaration.endpoint != m.definition.endpoint {
                    ui::dim(&format!(
                        "    endpoint: {} -> {}",
                        m.definition.endpoint, m.declaration.endpoint
                    ));
                }
                if m.declaration.description != m.definition.description {
                    ui::dim(&format!(
                        "    description: {} -> {}",
                        m.definition.description, m.declaration.description
                    ));
                }
                if !reconcile::eq_ignore_order(&m.declaration.events, &m.definition.events) {
                    ui::dim(&format!(
                        "    events: {} -> {}",
                        m.definition.events.join(","),
                        m.declaration.events.join(",")
                    ));
                }
                if !reconcile::eq_ignore_order(&m.declaration.site_ids, &m.definition.site_ids) {
                    ui::dim(&format!(
                        "    sites: {} -> {}",
                        m.definition.site_ids.join(","),
                        m.declaration.site_ids.join(",")
                    ));
                }
            }
        }
    }

    if !changeset.delete.is_empty() {
        ui::section("Delete");
        for definition in &changeset.delete {
            println!("  {} {}", "-".red(), definition.name.bold());
            if !ctx.quiet {
                ui::dim(&format!("    {}", definition.endpoint));
            }
        }
    }
}

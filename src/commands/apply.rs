//! `apply` command - execute a changeset against the remote service

use crate::Context;
use crate::commands::diff;
use crate::declarations;
use crate::ui;
use anyhow::{Context as AnyhowContext, Result};
use jwapi::Client;
use reconcile::{ApplyOutcome, ApplyResult, ChangeSet, ProgressCallback};
use std::path::Path;

/// Prints each outcome as the executor produces it.
struct PrintProgress;

impl ProgressCallback for PrintProgress {
    fn on_outcome(&mut self, outcome: &ApplyOutcome) {
        match &outcome.result {
            ApplyResult::Applied => {
                ui::success(&format!("{} {}", outcome.action, outcome.name));
            }
            ApplyResult::Failed { error } => {
                log::error!("{} {} failed: {error}", outcome.action, outcome.name);
                ui::error(&format!("{} {}: {error}", outcome.action, outcome.name));
            }
            ApplyResult::Skipped { .. } => {
                ui::dim(&format!("would {} {}", outcome.action, outcome.name));
            }
        }
    }
}

pub fn run(ctx: &Context, secret: &str, file: &Path, dry_run: bool) -> Result<()> {
    ui::header("Applying Webhooks");

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

    diff::render(ctx, &changeset);
    println!();

    if dry_run {
        ui::warn("Dry run - no changes will be made");
    }

    let report = reconcile::execute(&changeset, &client, dry_run, &mut PrintProgress);

    println!();
    if dry_run {
        ui::info(&format!("Would apply {} changes", report.total()));
    } else if report.is_success() {
        ui::success(&format!("Applied {} changes", report.applied()));
    } else {
        ui::warn(&format!(
            "Applied {}, {} failed",
            report.applied(),
            report.failed()
        ));
        anyhow::bail!(
            "{} of {} operations failed",
            report.failed(),
            report.total()
        );
    }

    Ok(())
}

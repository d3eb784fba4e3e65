//! Apply engine - executes a changeset with per-item failure isolation

use crate::changeset::ChangeSet;
use crate::types::Declaration;
use serde::{Deserialize, Serialize};

/// Remote operations the executor drives.
///
/// The transport lives behind this trait so the executor stays a pure
/// sequencing concern and tests can substitute an in-memory service.
pub trait WebhookService {
    /// Create a webhook from a declaration.
    fn create(&self, declaration: &Declaration) -> anyhow::Result<()>;
    /// Overwrite the webhook at `id` with the declaration's attributes.
    fn update(&self, id: &str, declaration: &Declaration) -> anyhow::Result<()>;
    /// Delete the webhook at `id`.
    fn delete(&self, id: &str) -> anyhow::Result<()>;
}

/// Which phase of the changeset an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyAction {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for ApplyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Result of applying a single changeset item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyResult {
    /// The remote call succeeded
    Applied,
    /// The remote call failed
    Failed { error: String },
    /// Nothing was attempted (dry run)
    Skipped { reason: String },
}

impl ApplyResult {
    /// Check if the result represents success (no failure).
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// The recorded outcome of one changeset item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Identity key of the entity the operation targeted
    pub name: String,
    pub action: ApplyAction,
    pub result: ApplyResult,
}

/// Per-item outcomes of an apply run.
///
/// Every item attempted gets exactly one entry, failures included. Callers
/// derive their final success/failure status (and exit code) from this
/// report rather than from any single operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    pub outcomes: Vec<ApplyOutcome>,
}

impl ApplyReport {
    /// Number of items that failed.
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Number of items applied successfully.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, ApplyResult::Applied))
            .count()
    }

    /// Total number of items attempted or skipped.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if the run was fully successful (no failed item).
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Iterate over the failed outcomes.
    pub fn failures(&self) -> impl Iterator<Item = &ApplyOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.result.is_success())
    }

    fn record<P: ProgressCallback>(
        &mut self,
        name: &str,
        action: ApplyAction,
        result: ApplyResult,
        progress: &mut P,
    ) {
        let outcome = ApplyOutcome {
            name: name.to_string(),
            action,
            result,
        };
        progress.on_outcome(&outcome);
        self.outcomes.push(outcome);
    }
}

/// Receives outcomes as they are produced.
///
/// Lets a CLI print progress while the executor stays UI-free.
pub trait ProgressCallback {
    fn on_outcome(&mut self, outcome: &ApplyOutcome);
}

/// Callback that ignores all progress.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_outcome(&mut self, _outcome: &ApplyOutcome) {}
}

/// Apply a changeset against the service, one item at a time.
///
/// Phases run create, then modify, then delete. Items are independent: a
/// failure is recorded and the run moves on to the next item, within the
/// phase and across phases. With `dry_run` every item is recorded as
/// skipped and the service is never called.
pub fn execute<P: ProgressCallback>(
    changeset: &ChangeSet,
    service: &dyn WebhookService,
    dry_run: bool,
    progress: &mut P,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for declaration in &changeset.create {
        let result = run_item(dry_run, || service.create(declaration));
        report.record(&declaration.name, ApplyAction::Create, result, progress);
    }

    for m in &changeset.modify {
        let result = run_item(dry_run, || service.update(&m.definition.id, &m.declaration));
        report.record(m.name(), ApplyAction::Update, result, progress);
    }

    for definition in &changeset.delete {
        let result = run_item(dry_run, || service.delete(&definition.id));
        report.record(&definition.name, ApplyAction::Delete, result, progress);
    }

    report
}

fn run_item(dry_run: bool, op: impl FnOnce() -> anyhow::Result<()>) -> ApplyResult {
    if dry_run {
        return ApplyResult::Skipped {
            reason: "dry run".to_string(),
        };
    }
    match op() {
        Ok(()) => ApplyResult::Applied,
        Err(e) => ApplyResult::Failed {
            error: e.to_string(),
        },
    }
}

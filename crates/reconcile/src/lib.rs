//! # Reconcile
//!
//! The reconciliation core for declarative webhook management.
//!
//! This crate compares a declared desired state (webhook declarations from a
//! file) against the observed state of a remote service (webhook definitions)
//! and produces the minimal set of create/modify/delete operations needed to
//! converge the remote state to the declaration.
//!
//! ## Core Concepts
//!
//! - **Declaration**: a desired webhook, keyed by `name`
//! - **Definition**: an observed webhook as held remotely, keyed by server id
//! - **Match**: a declaration/definition pair joined by identical `name`
//! - **ChangeSet**: the three-way create/modify/delete partition
//! - **Executor**: applies a changeset with per-item failure isolation
//!
//! ## Example
//!
//! ```
//! use reconcile::{ChangeSet, Declaration};
//!
//! let declarations = vec![Declaration {
//!     name: "on-play".into(),
//!     description: "playback started".into(),
//!     events: vec!["play".into()],
//!     site_ids: vec!["site1".into()],
//!     endpoint: "https://example.com/hook".into(),
//! }];
//!
//! let changeset = ChangeSet::build(&declarations, &[]);
//! assert_eq!(changeset.create.len(), 1);
//! assert!(changeset.delete.is_empty());
//! ```
//!
//! Reconciliation is a pure function from (declarations, definitions) to a
//! [`ChangeSet`]; only the executor has side effects, and those go through the
//! [`WebhookService`] trait so callers control the transport.

pub mod changeset;
pub mod diff;
pub mod executor;
pub mod matcher;
pub mod types;

// Re-export main types at crate root
pub use changeset::ChangeSet;
pub use diff::{differs, eq_ignore_order};
pub use executor::{
    execute, ApplyAction, ApplyOutcome, ApplyReport, ApplyResult, NoProgress, ProgressCallback,
    WebhookService,
};
pub use matcher::{find_declaration, find_definition};
pub use types::{Declaration, Definition, Match};

//! # jwapi
//!
//! Minimal blocking client for the JW Player v2 webhooks API.
//!
//! The client holds the bearer credential and transport configuration
//! explicitly, so multiple configured clients can coexist and nothing hides
//! in global state. It covers the four calls the reconciler needs: list
//! (paginated), create, update and delete.
//!
//! # Example
//!
//! ```no_run
//! use jwapi::Client;
//!
//! let client = Client::new("my-api-secret");
//! let definitions = client.definitions().unwrap();
//! println!("Found {} webhooks", definitions.len());
//! ```
//!
//! [`Client`] implements [`reconcile::WebhookService`], so it plugs
//! straight into the reconciliation executor.

pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use types::{WebhookDefinition, WebhookEnvelope, WebhookMetadata, WebhookPage};

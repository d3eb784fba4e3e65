//! The webhooks API client.

use crate::error::{Error, Result};
use crate::types::{WebhookEnvelope, WebhookMetadata, WebhookPage};
use reconcile::{Declaration, Definition, WebhookService};
use std::time::Duration;
use ureq::Agent;

/// Production endpoint for the v2 webhooks API.
pub const DEFAULT_BASE_URL: &str = "https://api.jwplayer.com/v2/webhooks/";

/// Maximum page size the list endpoint accepts.
const PAGE_LENGTH: usize = 250;

/// Per-call timeout.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the webhooks API.
///
/// Holds the bearer credential and one configured [`ureq::Agent`]; calls
/// are strictly sequential. Construct once and pass by reference.
pub struct Client {
    agent: Agent,
    base_url: String,
    secret: String,
}

impl Client {
    /// Create a client against the production endpoint.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_base_url(secret, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (for testing).
    #[must_use]
    pub fn with_base_url(secret: impl Into<String>, base_url: impl Into<String>) -> Self {
        // Non-2xx responses are regular responses here; expected-status
        // checks below turn them into typed errors.
        let config = Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .http_status_as_error(false)
            .build();

        Self {
            agent: config.new_agent(),
            base_url: base_url.into(),
            secret: secret.into(),
        }
    }

    /// Get the current base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL addressing a single webhook.
    fn webhook_url(&self, id: &str) -> String {
        format!("{}{}/", self.base_url, id)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.secret)
    }

    /// Fetch every webhook definition, following pagination until the
    /// reported total has been collected.
    pub fn definitions(&self) -> Result<Vec<Definition>> {
        collect_definitions(|page| self.fetch_page(page))
    }

    /// Fetch one page of the list endpoint.
    fn fetch_page(&self, page: usize) -> Result<WebhookPage> {
        let mut response = self
            .agent
            .get(&self.base_url)
            .query("page", &page.to_string())
            .query("page_length", &PAGE_LENGTH.to_string())
            .header("Accept", "application/json")
            .header("Authorization", &self.bearer())
            .call()?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::ListFailed { status });
        }

        Ok(response.body_mut().read_json()?)
    }

    /// Create a webhook from a declaration. Success is 201 Created.
    pub fn create_webhook(&self, declaration: &Declaration) -> Result<()> {
        let body = WebhookEnvelope {
            metadata: WebhookMetadata::from(declaration),
        };

        let response = self
            .agent
            .post(&self.base_url)
            .header("Accept", "application/json")
            .header("Authorization", &self.bearer())
            .send_json(&body)?;

        let status = response.status().as_u16();
        if status != 201 {
            return Err(Error::NotCreated {
                name: declaration.name.clone(),
                status,
            });
        }
        Ok(())
    }

    /// Overwrite the webhook at `id` with the declaration's attributes.
    /// Success is 200 OK.
    pub fn update_webhook(&self, id: &str, declaration: &Declaration) -> Result<()> {
        let body = WebhookEnvelope {
            metadata: WebhookMetadata::from(declaration),
        };

        let response = self
            .agent
            .patch(&self.webhook_url(id))
            .header("Accept", "application/json")
            .header("Authorization", &self.bearer())
            .send_json(&body)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::NotUpdated {
                name: declaration.name.clone(),
                status,
            });
        }
        Ok(())
    }

    /// Delete the webhook at `id`. Success is 204 No Content.
    pub fn delete_webhook(&self, id: &str) -> Result<()> {
        let response = self
            .agent
            .delete(&self.webhook_url(id))
            .header("Accept", "application/json")
            .header("Authorization", &self.bearer())
            .call()?;

        let status = response.status().as_u16();
        if status != 204 {
            return Err(Error::NotDeleted {
                id: id.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Aggregate pages starting at page 1 until the reported total has been
/// collected.
///
/// An empty page also terminates the loop, so a `total` larger than what
/// the service actually returns cannot spin forever.
fn collect_definitions(
    mut fetch: impl FnMut(usize) -> Result<WebhookPage>,
) -> Result<Vec<Definition>> {
    let mut definitions = Vec::new();
    let mut page = 1usize;

    loop {
        let body = fetch(page)?;
        let fetched = body.webhooks.len();
        definitions.extend(body.webhooks.into_iter().map(Definition::from));

        if definitions.len() >= body.total || fetched == 0 {
            return Ok(definitions);
        }
        page += 1;
    }
}

impl WebhookService for Client {
    fn create(&self, declaration: &Declaration) -> anyhow::Result<()> {
        Ok(self.create_webhook(declaration)?)
    }

    fn update(&self, id: &str, declaration: &Declaration) -> anyhow::Result<()> {
        Ok(self.update_webhook(id, declaration)?)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        Ok(self.delete_webhook(id)?)
    }
}

//! Wire types for the v2 webhooks API.
//!
//! These mirror the JSON the service speaks; [`WebhookDefinition`] converts
//! into the transport-free [`reconcile::Definition`] the core works with.

use reconcile::{Declaration, Definition};
use serde::{Deserialize, Serialize};

/// The operator-controlled part of a webhook record.
///
/// Sent verbatim in create and update bodies and echoed back in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMetadata {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub events: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub site_ids: Vec<String>,
    #[serde(default)]
    pub webhook_url: String,
}

/// One webhook as returned by the list call.
///
/// The `relationships` and `schema` response fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDefinition {
    pub id: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub last_modified: String,
    pub metadata: WebhookMetadata,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// One page of the paginated list response.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPage {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_length: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub webhooks: Vec<WebhookDefinition>,
}

/// Request body for create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookEnvelope {
    pub metadata: WebhookMetadata,
}

impl From<&Declaration> for WebhookMetadata {
    fn from(declaration: &Declaration) -> Self {
        Self {
            description: declaration.description.clone(),
            events: declaration.events.clone(),
            name: declaration.name.clone(),
            site_ids: declaration.site_ids.clone(),
            webhook_url: declaration.endpoint.clone(),
        }
    }
}

impl From<WebhookDefinition> for Definition {
    fn from(wire: WebhookDefinition) -> Self {
        Self {
            id: wire.id,
            name: wire.metadata.name,
            description: wire.metadata.description,
            events: wire.metadata.events,
            site_ids: wire.metadata.site_ids,
            endpoint: wire.metadata.webhook_url,
            created: wire.created,
            last_modified: wire.last_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "page": 1,
            "page_length": 250,
            "total": 1,
            "webhooks": [{
                "id": "abc123",
                "created": "2024-01-01T00:00:00+00:00",
                "last_modified": "2024-06-01T00:00:00+00:00",
                "type": "webhook",
                "relationships": {},
                "metadata": {
                    "name": "on-play",
                    "description": "playback started",
                    "events": ["play"],
                    "site_ids": ["site1"],
                    "webhook_url": "https://example.com/hook"
                }
            }]
        }"#;

        let page: WebhookPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.webhooks.len(), 1);
        assert_eq!(page.webhooks[0].id, "abc123");
        assert_eq!(page.webhooks[0].kind, "webhook");
        assert_eq!(page.webhooks[0].metadata.name, "on-play");
    }

    #[test]
    fn test_missing_metadata_fields_default() {
        let json = r#"{ "name": "bare" }"#;
        let metadata: WebhookMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.name, "bare");
        assert!(metadata.description.is_empty());
        assert!(metadata.events.is_empty());
        assert!(metadata.site_ids.is_empty());
        assert!(metadata.webhook_url.is_empty());
    }

    #[test]
    fn test_definition_conversion() {
        let wire = WebhookDefinition {
            id: "abc123".to_string(),
            created: "2024-01-01T00:00:00+00:00".to_string(),
            last_modified: "2024-06-01T00:00:00+00:00".to_string(),
            kind: "webhook".to_string(),
            metadata: WebhookMetadata {
                name: "on-play".to_string(),
                description: "playback started".to_string(),
                events: vec!["play".to_string()],
                site_ids: vec!["site1".to_string()],
                webhook_url: "https://example.com/hook".to_string(),
            },
        };

        let definition: Definition = wire.into();
        assert_eq!(definition.id, "abc123");
        assert_eq!(definition.name, "on-play");
        assert_eq!(definition.endpoint, "https://example.com/hook");
        assert_eq!(definition.events, vec!["play".to_string()]);
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let declaration = Declaration {
            name: "on-play".to_string(),
            description: "playback started".to_string(),
            events: vec!["play".to_string()],
            site_ids: vec!["site1".to_string()],
            endpoint: "https://example.com/hook".to_string(),
        };

        let envelope = WebhookEnvelope {
            metadata: WebhookMetadata::from(&declaration),
        };
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["metadata"]["name"], "on-play");
        assert_eq!(json["metadata"]["webhook_url"], "https://example.com/hook");
        assert_eq!(json["metadata"]["events"][0], "play");
    }
}

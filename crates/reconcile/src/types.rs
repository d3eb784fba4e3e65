//! Core types for webhook reconciliation

use serde::{Deserialize, Serialize};

/// A desired webhook, as declared by the operator.
///
/// `name` is the identity key used for matching against remote definitions.
/// Declarations are immutable once parsed from the desired-state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Identity key, unique within the desired set
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Event names the webhook subscribes to
    pub events: Vec<String>,
    /// Site identifiers the webhook applies to
    pub site_ids: Vec<String>,
    /// Delivery URL
    pub endpoint: String,
}

/// An observed webhook, as currently held by the remote service.
///
/// A snapshot, not a live handle: the server-assigned `id` is the address
/// for update and delete calls, while `name` joins against declarations.
/// The timestamps are server-managed metadata and never enter comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Server-assigned identity, immutable
    pub id: String,
    /// Identity key for matching against declarations
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Event names the webhook subscribes to
    pub events: Vec<String>,
    /// Site identifiers the webhook applies to
    pub site_ids: Vec<String>,
    /// Delivery URL
    pub endpoint: String,
    /// Creation timestamp (server-managed)
    pub created: String,
    /// Last-modification timestamp (server-managed)
    pub last_modified: String,
}

/// A declaration/definition pair sharing the same `name`.
///
/// A transient comparison unit: a modify entry carries the whole match, so
/// the apply step can overwrite the full remote record at `definition.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub declaration: Declaration,
    pub definition: Definition,
}

impl Match {
    /// Pair a declaration with the definition it matched.
    pub fn new(declaration: Declaration, definition: Definition) -> Self {
        Self {
            declaration,
            definition,
        }
    }

    /// The shared identity key of the pair.
    pub fn name(&self) -> &str {
        &self.declaration.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(name: &str) -> Declaration {
        Declaration {
            name: name.to_string(),
            description: "d".to_string(),
            events: vec!["play".to_string()],
            site_ids: vec!["s1".to_string()],
            endpoint: "https://example.com".to_string(),
        }
    }

    fn definition(name: &str) -> Definition {
        Definition {
            id: "abc123".to_string(),
            name: name.to_string(),
            description: "d".to_string(),
            events: vec!["play".to_string()],
            site_ids: vec!["s1".to_string()],
            endpoint: "https://example.com".to_string(),
            created: "2024-01-01T00:00:00+00:00".to_string(),
            last_modified: "2024-01-02T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_match_name_comes_from_declaration() {
        let m = Match::new(declaration("hook1"), definition("hook1"));
        assert_eq!(m.name(), "hook1");
    }

    #[test]
    fn test_definition_roundtrips_through_serde() {
        let def = definition("hook1");
        let json = serde_json::to_string(&def).unwrap();
        let back: Definition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }
}

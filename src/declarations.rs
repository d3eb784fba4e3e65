//! Loading the desired state from a declarations file
//!
//! The file is a JSON object keyed by webhook name:
//!
//! ```json
//! {
//!   "on-play": {
//!     "description": "playback started",
//!     "events": ["play"],
//!     "site_ids": ["site1"],
//!     "endpoint": "https://example.com/hook"
//!   }
//! }
//! ```
//!
//! Every value field is optional and defaults to empty.

use anyhow::{Context as AnyhowContext, Result};
use reconcile::Declaration;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct DeclarationEntry {
    #[serde(default)]
    description: String,
    #[serde(default)]
    events: Vec<String>,
    #[serde(default)]
    site_ids: Vec<String>,
    #[serde(default)]
    endpoint: String,
}

/// Load declarations from `path`, sorted by name.
///
/// JSON objects carry no order, so the entries go through a `BTreeMap`;
/// everything downstream (changeset output, diff rendering, tests) gets a
/// deterministic order by name.
pub fn load(path: &Path) -> Result<Vec<Declaration>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let entries: BTreeMap<String, DeclarationEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    log::debug!("loaded {} declarations from {}", entries.len(), path.display());

    Ok(entries
        .into_iter()
        .map(|(name, entry)| Declaration {
            name,
            description: entry.description,
            events: entry.events,
            site_ids: entry.site_ids,
            endpoint: entry.endpoint,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_declaration() {
        let file = write_file(
            r#"{
                "hook1": {
                    "description": "d1",
                    "events": ["play"],
                    "site_ids": ["s1"],
                    "endpoint": "http://a"
                }
            }"#,
        );

        let declarations = load(file.path()).unwrap();
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "hook1");
        assert_eq!(declarations[0].description, "d1");
        assert_eq!(declarations[0].events, vec!["play".to_string()]);
        assert_eq!(declarations[0].site_ids, vec!["s1".to_string()]);
        assert_eq!(declarations[0].endpoint, "http://a");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let file = write_file(r#"{ "bare": {} }"#);

        let declarations = load(file.path()).unwrap();
        assert_eq!(declarations[0].name, "bare");
        assert!(declarations[0].description.is_empty());
        assert!(declarations[0].events.is_empty());
        assert!(declarations[0].site_ids.is_empty());
        assert!(declarations[0].endpoint.is_empty());
    }

    #[test]
    fn test_declarations_come_out_sorted_by_name() {
        let file = write_file(r#"{ "zeta": {}, "alpha": {}, "mid": {} }"#);

        let declarations = load(file.path()).unwrap();
        let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load(Path::new("/nonexistent/declarations.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_file("{ not json");
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}

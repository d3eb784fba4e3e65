//! Changeset construction - the three-way create/modify/delete partition

use crate::diff::differs;
use crate::matcher::{find_declaration, find_definition};
use crate::types::{Declaration, Definition, Match};
use serde::{Deserialize, Serialize};

/// The operations needed to converge the remote state to the declaration.
///
/// The three collections are disjoint: a declaration lands in `create`, in
/// `modify` (as the declaration half of a match), or nowhere (unchanged),
/// never in `delete`; a definition lands in `delete`, in `modify`, or
/// nowhere, never in `create`. Built fresh on every reconciliation.
///
/// Ordering within each collection follows the iteration order of the
/// inputs, so callers wanting deterministic output sort their inputs by
/// `name` first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Declarations with no remote counterpart
    pub create: Vec<Declaration>,
    /// Matched pairs whose attributes differ
    pub modify: Vec<Match>,
    /// Definitions no declaration claims
    pub delete: Vec<Definition>,
}

impl ChangeSet {
    /// Classify every declaration and definition into create, modify or
    /// delete via three independent passes.
    ///
    /// A modify entry carries the entire declaration; the apply step
    /// overwrites the full remote record rather than patching fields.
    pub fn build(declarations: &[Declaration], definitions: &[Definition]) -> Self {
        let create = declarations
            .iter()
            .filter(|decl| find_definition(decl, definitions).is_none())
            .cloned()
            .collect();

        let modify = declarations
            .iter()
            .filter_map(|decl| {
                find_definition(decl, definitions)
                    .filter(|def| differs(decl, def))
                    .map(|def| Match::new(decl.clone(), def.clone()))
            })
            .collect();

        let delete = definitions
            .iter()
            .filter(|def| find_declaration(def, declarations).is_none())
            .cloned()
            .collect();

        Self {
            create,
            modify,
            delete,
        }
    }

    /// Total number of operations.
    pub fn total(&self) -> usize {
        self.create.len() + self.modify.len() + self.delete.len()
    }

    /// Check if there is anything to do.
    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn declaration(name: &str, events: &[&str]) -> Declaration {
        Declaration {
            name: name.to_string(),
            description: "d1".to_string(),
            events: strings(events),
            site_ids: strings(&["s1"]),
            endpoint: "http://a".to_string(),
        }
    }

    fn definition(name: &str, events: &[&str]) -> Definition {
        Definition {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: "d1".to_string(),
            events: strings(events),
            site_ids: strings(&["s1"]),
            endpoint: "http://a".to_string(),
            created: "2024-01-01T00:00:00+00:00".to_string(),
            last_modified: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_unmatched_declaration_is_created() {
        let changeset = ChangeSet::build(&[declaration("hook1", &["play"])], &[]);
        assert_eq!(changeset.create.len(), 1);
        assert_eq!(changeset.create[0].name, "hook1");
        assert!(changeset.modify.is_empty());
        assert!(changeset.delete.is_empty());
    }

    #[test]
    fn test_identical_pair_is_unchanged() {
        let changeset = ChangeSet::build(
            &[declaration("hook1", &["play"])],
            &[definition("hook1", &["play"])],
        );
        assert!(!changeset.has_changes());
    }

    #[test]
    fn test_event_order_does_not_trigger_modify() {
        let changeset = ChangeSet::build(
            &[declaration("hook1", &["play", "pause"])],
            &[definition("hook1", &["pause", "play"])],
        );
        assert!(!changeset.has_changes());
    }

    #[test]
    fn test_changed_pair_is_modified() {
        let changeset = ChangeSet::build(
            &[declaration("hook1", &["play", "complete"])],
            &[definition("hook1", &["play"])],
        );
        assert!(changeset.create.is_empty());
        assert_eq!(changeset.modify.len(), 1);
        assert_eq!(changeset.modify[0].definition.id, "id-hook1");
        assert!(changeset.delete.is_empty());
    }

    #[test]
    fn test_orphan_definition_is_deleted() {
        let changeset = ChangeSet::build(&[], &[definition("orphan", &["play"])]);
        assert!(changeset.create.is_empty());
        assert!(changeset.modify.is_empty());
        assert_eq!(changeset.delete.len(), 1);
        assert_eq!(changeset.delete[0].name, "orphan");
    }

    #[test]
    fn test_every_entity_lands_in_exactly_one_bucket() {
        let declarations = vec![
            declaration("new", &["play"]),
            declaration("changed", &["play", "pause"]),
            declaration("same", &["play"]),
        ];
        let definitions = vec![
            definition("changed", &["play"]),
            definition("same", &["play"]),
            definition("orphan", &["play"]),
        ];

        let changeset = ChangeSet::build(&declarations, &definitions);

        let created: Vec<_> = changeset.create.iter().map(|d| d.name.as_str()).collect();
        let modified: Vec<_> = changeset.modify.iter().map(Match::name).collect();
        let deleted: Vec<_> = changeset.delete.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(created, vec!["new"]);
        assert_eq!(modified, vec!["changed"]);
        assert_eq!(deleted, vec!["orphan"]);
        assert_eq!(changeset.total(), 3);
    }

    #[test]
    fn test_output_follows_input_order() {
        let declarations = vec![declaration("b", &["play"]), declaration("a", &["play"])];
        let changeset = ChangeSet::build(&declarations, &[]);
        let created: Vec<_> = changeset.create.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(created, vec!["b", "a"]);
    }
}

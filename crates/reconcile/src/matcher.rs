//! Matching declarations against definitions by identity key
//!
//! `name` is the sole join key between the two sides. Matching is exact
//! string equality, no case-folding, no trimming. A probe is linear; the
//! full classification pass over n declarations and m definitions is
//! O(n*m), fine at the expected scale of tens to low hundreds of webhooks.
//!
//! Not-found is a classification signal, not an error, so both probes
//! return `Option`. If a side carries duplicate names the first occurrence
//! wins and the rest are ignored.

use crate::types::{Declaration, Definition};

/// Find the definition sharing the declaration's `name`.
pub fn find_definition<'a>(
    declaration: &Declaration,
    definitions: &'a [Definition],
) -> Option<&'a Definition> {
    definitions.iter().find(|d| d.name == declaration.name)
}

/// Find the declaration sharing the definition's `name`.
pub fn find_declaration<'a>(
    definition: &Definition,
    declarations: &'a [Declaration],
) -> Option<&'a Declaration> {
    declarations.iter().find(|d| d.name == definition.name)
}

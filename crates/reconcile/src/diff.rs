//! Difference detection for matched declaration/definition pairs

use crate::types::{Declaration, Definition};

/// Compare two string collections ignoring order.
///
/// Multiset equality: same length and the same elements with the same
/// multiplicities, checked via sorted copies. `["a", "a"]` and `["a", "b"]`
/// are therefore different even though every distinct element of one side
/// occurs in the other.
pub fn eq_ignore_order(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}

/// Whether a matched pair is semantically different.
///
/// A pair differs when description or endpoint are not byte-identical, or
/// when the events or site_ids collections are unequal ignoring order.
/// Server-managed metadata (`id`, timestamps) plays no role.
pub fn differs(declaration: &Declaration, definition: &Definition) -> bool {
    declaration.description != definition.description
        || declaration.endpoint != definition.endpoint
        || !eq_ignore_order(&declaration.events, &definition.events)
        || !eq_ignore_order(&declaration.site_ids, &definition.site_ids)
}

//! List patches applied after a successful write.
//!
//! Both operations run only once the store has confirmed the mutation; a
//! failed write never touches the list, so there is no optimistic update and
//! nothing to roll back.

use factboard_common::Fact;

/// Prepend a newly created fact. Every existing entry keeps its position,
/// shifted down by one.
pub fn apply_create(facts: &mut Vec<Fact>, new_fact: Fact) {
    facts.insert(0, new_fact);
}

/// Replace the entry whose id matches `updated`, in place. The list is not
/// re-sorted; order reflects only the last fetch. An unknown id is a no-op.
pub fn apply_vote(facts: &mut [Fact], updated: Fact) {
    if let Some(slot) = facts.iter_mut().find(|f| f.id == updated.id) {
        *slot = updated;
    }
}

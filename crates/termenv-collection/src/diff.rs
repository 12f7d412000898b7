//! Structural diffing between two merged collections
//!
//! Drives change notifications: given the merged collection currently in
//! effect and a freshly merged one, surface exactly which extensions'
//! contributions were added, removed, or changed per variable.

use crate::merge::MergedCollection;
use crate::mutator::Mutator;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The structural delta between two merged collections.
///
/// Only produced when at least one of the three maps is non-empty — "no
/// change" is represented as the absence of a diff, not as an all-empty
/// one. Comparison is per contributing extension, so two sequences with the
/// same extensions but different per-extension values surface exactly the
/// extensions that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDiff {
    /// Mutators present in the newer collection but not the older one
    pub added: IndexMap<String, Vec<Mutator>>,

    /// Mutators present in the older collection but not the newer one
    pub removed: IndexMap<String, Vec<Mutator>>,

    /// Mutators whose extension contributes to both collections with a
    /// different kind, value, or scope folder ordinal. Holds the *new*
    /// mutator.
    pub changed: IndexMap<String, Vec<Mutator>>,
}

impl MergedCollection {
    /// Compare this collection against `other` (the newer state).
    ///
    /// Returns `None` when nothing differs. Pure: neither input is mutated
    /// and the result is fully determined by the two collections.
    #[must_use]
    pub fn diff(&self, other: &MergedCollection) -> Option<CollectionDiff> {
        let added = mutators_missing_from(other, self);
        let removed = mutators_missing_from(self, other);
        let changed = changed_mutators(self, other);

        if added.is_empty() && removed.is_empty() && changed.is_empty() {
            return None;
        }
        Some(CollectionDiff {
            added,
            removed,
            changed,
        })
    }
}

/// Mutators in `source` whose extension has no entry for the same variable
/// in `reference`. Computes "added" with (other, current) and "removed"
/// with (current, other).
fn mutators_missing_from(
    source: &MergedCollection,
    reference: &MergedCollection,
) -> IndexMap<String, Vec<Mutator>> {
    let mut result = IndexMap::new();
    for (variable, mutators) in source.iter() {
        let counterpart = reference.mutators(variable).unwrap_or_default();
        let missing: Vec<Mutator> = mutators
            .iter()
            .filter(|m| {
                !counterpart
                    .iter()
                    .any(|c| c.extension_id() == m.extension_id())
            })
            .cloned()
            .collect();
        if !missing.is_empty() {
            result.insert(variable.to_owned(), missing);
        }
    }
    result
}

/// New-state mutators whose extension contributes to the same variable in
/// both collections but with a different kind, value, or scope ordinal.
/// Variables absent from `other` are fully covered by "removed" and produce
/// nothing here.
fn changed_mutators(
    current: &MergedCollection,
    other: &MergedCollection,
) -> IndexMap<String, Vec<Mutator>> {
    let mut result = IndexMap::new();
    for (variable, mutators) in current.iter() {
        let Some(counterpart) = other.mutators(variable) else {
            continue;
        };
        let changes: Vec<Mutator> = mutators
            .iter()
            .filter_map(|m| {
                counterpart
                    .iter()
                    .find(|c| c.extension_id() == m.extension_id())
                    .filter(|c| {
                        c.kind() != m.kind()
                            || c.value() != m.value()
                            || c.scope_index() != m.scope_index()
                    })
                    .cloned()
            })
            .collect();
        if !changes.is_empty() {
            result.insert(variable.to_owned(), changes);
        }
    }
    result
}

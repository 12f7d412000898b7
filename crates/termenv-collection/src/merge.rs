//! Merging many extensions' collections into one effective set
//!
//! Provides [`MergedCollection`]: the combined, ordered result of merging
//! the registered collections for a given scope. Per variable, mutators are
//! held in *application order* — the reverse of their collections'
//! registration order — so the apply engine can walk each sequence front to
//! back.

use crate::collection::Collection;
use crate::mutator::{Mutator, MutatorKind, WorkspaceFolder};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The combined, ordered result of merging many extensions' collections.
///
/// Read-only once built; a change to any source collection requires a fresh
/// merge. Per-variable sequences obey two invariants:
///
/// - once the front entry is a [`Replace`](MutatorKind::Replace), the
///   variable is settled: contributions registered from then on are dropped
///   at merge time, and anything already behind the replace accumulates
///   onto it at apply time;
/// - each contributing extension appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedCollection {
    /// Variable name → mutators in application order
    entries: IndexMap<String, Vec<Mutator>>,

    /// The workspace folder this merge was scoped to, if any
    owning_scope: Option<WorkspaceFolder>,
}

impl MergedCollection {
    /// Merge collections in their registration order.
    ///
    /// The caller supplies collections in a stable registration order; that
    /// order is significant. For each mutator, in its collection's own
    /// insertion order:
    ///
    /// - mutators scoped to a folder other than `owning_scope` are skipped;
    /// - once a variable's front entry is a replace, every further
    ///   contribution to it is skipped;
    /// - otherwise the mutator is inserted at the *front* of the variable's
    ///   sequence, so later-registered extensions apply before earlier ones.
    #[must_use]
    pub fn merge<'a, I>(collections: I, owning_scope: Option<&WorkspaceFolder>) -> Self
    where
        I: IntoIterator<Item = &'a Collection>,
    {
        let mut entries: IndexMap<String, Vec<Mutator>> = IndexMap::new();
        let mut collection_count = 0usize;

        for collection in collections {
            collection_count += 1;
            for (variable, mutator) in collection.iter() {
                if let (Some(owning), Some(scope)) = (owning_scope, mutator.scope()) {
                    if !owning.same_folder(scope) {
                        tracing::trace!(
                            variable,
                            extension = mutator.extension_id(),
                            "skipping mutator scoped to another folder"
                        );
                        continue;
                    }
                }

                let sequence = entries.entry(variable.to_owned()).or_default();
                if sequence
                    .first()
                    .is_some_and(|front| front.kind() == MutatorKind::Replace)
                {
                    // The variable is fully determined by an earlier replace.
                    tracing::trace!(
                        variable,
                        extension = mutator.extension_id(),
                        "skipping mutator shadowed by a replace"
                    );
                    continue;
                }
                sequence.insert(0, mutator.clone());
            }
        }

        tracing::debug!(
            collections = collection_count,
            variables = entries.len(),
            scoped = owning_scope.is_some(),
            "merged environment variable collections"
        );

        Self {
            entries,
            owning_scope: owning_scope.cloned(),
        }
    }

    /// The workspace folder this merge honored, if any
    #[inline]
    #[must_use]
    pub fn owning_scope(&self) -> Option<&WorkspaceFolder> {
        self.owning_scope.as_ref()
    }

    /// Mutators for `variable` in application order
    #[inline]
    #[must_use]
    pub fn mutators(&self, variable: &str) -> Option<&[Mutator]> {
        self.entries.get(variable).map(Vec::as_slice)
    }

    /// Variable names in merge-encounter order
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Per-variable sequences in merge-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Mutator])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of variables with at least one surviving mutator
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the merge produced no mutations
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

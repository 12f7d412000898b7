//! Per-extension mutator collections
//!
//! A [`Collection`] is the full set of one extension's mutators, keyed by
//! variable name with insertion order preserved. At most one mutator exists
//! per variable; a newer contribution for the same variable replaces the
//! previous one in place.

use crate::mutator::{Mutator, MutatorKind, WorkspaceFolder};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One extension's full set of environment variable mutators.
///
/// Mutators are constructed by the collection itself so their
/// `extension_id` always matches the owning extension — the one-mutator-
/// per-variable-per-extension invariant is structural, never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Stable identity of the owning extension
    extension_id: String,

    /// Variable name → mutator, in insertion order
    entries: IndexMap<String, Mutator>,
}

impl Collection {
    /// Create an empty collection for one extension
    #[inline]
    #[must_use]
    pub fn new(extension_id: impl Into<String>) -> Self {
        Self {
            extension_id: extension_id.into(),
            entries: IndexMap::new(),
        }
    }

    /// Owning extension
    #[inline]
    #[must_use]
    pub fn extension_id(&self) -> &str {
        &self.extension_id
    }

    /// Contribute an unscoped mutator for `variable`.
    ///
    /// Replaces the extension's previous mutator for the variable, if any,
    /// keeping the variable's original position in iteration order.
    pub fn set(&mut self, variable: impl Into<String>, kind: MutatorKind, value: impl Into<String>) {
        let variable = variable.into();
        let mutator = Mutator::new(&self.extension_id, &variable, kind, value);
        self.entries.insert(variable, mutator);
    }

    /// Contribute a mutator restricted to a workspace folder
    pub fn set_scoped(
        &mut self,
        variable: impl Into<String>,
        kind: MutatorKind,
        value: impl Into<String>,
        folder: WorkspaceFolder,
    ) {
        let variable = variable.into();
        let mutator = Mutator::new(&self.extension_id, &variable, kind, value).with_scope(folder);
        self.entries.insert(variable, mutator);
    }

    /// Withdraw the extension's mutator for `variable`, preserving the
    /// iteration order of the remaining entries
    pub fn delete(&mut self, variable: &str) -> Option<Mutator> {
        self.entries.shift_remove(variable)
    }

    /// Withdraw every mutator
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The extension's mutator for `variable`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&Mutator> {
        self.entries.get(variable)
    }

    /// Number of variables this extension mutates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection contributes nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutators in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Mutator)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

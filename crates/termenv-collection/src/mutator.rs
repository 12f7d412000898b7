//! Environment variable mutators
//!
//! Provides [`Mutator`], the atomic unit of change: one extension's requested
//! operation on one environment variable, optionally restricted to a single
//! workspace folder.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The operation a mutator performs on its variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutatorKind {
    /// Concatenate the value after the variable's current value.
    Append,
    /// Concatenate the value before the variable's current value.
    Prepend,
    /// Overwrite the variable's value outright.
    Replace,
}

impl Display for MutatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => f.write_str("append"),
            Self::Prepend => f.write_str("prepend"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// Workspace folder a mutator is restricted to.
///
/// Folder *identity* is the `path` field alone — two values with the same
/// path refer to the same folder even when rebuilt across process
/// boundaries. The `index` is the folder's ordinal in the workspace, used
/// by the diff engine's changed-detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// Stable folder identity.
    path: String,

    /// Ordinal of the folder within the workspace.
    index: usize,
}

impl WorkspaceFolder {
    /// Create a workspace folder scope
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, index: usize) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    /// Stable folder identity
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Ordinal within the workspace
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether both values identify the same folder (by path, not ordinal)
    #[inline]
    #[must_use]
    pub fn same_folder(&self, other: &WorkspaceFolder) -> bool {
        self.path == other.path
    }
}

/// One extension's requested change to one environment variable.
///
/// Immutable once constructed. The `extension_id` uniquely identifies the
/// contributing extension within any one variable's merged sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutator {
    /// Environment variable name (case-sensitive identity)
    variable: String,

    /// Operation to perform
    kind: MutatorKind,

    /// Literal value, or a placeholder string for an injected resolver
    value: String,

    /// Optional workspace-folder restriction
    scope: Option<WorkspaceFolder>,

    /// Stable identity of the contributing extension
    extension_id: String,
}

impl Mutator {
    /// Create an unscoped mutator
    #[inline]
    #[must_use]
    pub fn new(
        extension_id: impl Into<String>,
        variable: impl Into<String>,
        kind: MutatorKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            kind,
            value: value.into(),
            scope: None,
            extension_id: extension_id.into(),
        }
    }

    /// Restrict the mutator to a workspace folder
    #[inline]
    #[must_use]
    pub fn with_scope(mut self, scope: WorkspaceFolder) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Environment variable name
    #[inline]
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Operation kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> MutatorKind {
        self.kind
    }

    /// Raw (unresolved) value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Workspace-folder restriction, if any
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Option<&WorkspaceFolder> {
        self.scope.as_ref()
    }

    /// Contributing extension
    #[inline]
    #[must_use]
    pub fn extension_id(&self) -> &str {
        &self.extension_id
    }

    /// Ordinal of the scope folder, if scoped
    ///
    /// This is the field the diff engine compares when deciding whether two
    /// mutators from the same extension differ in scope.
    #[inline]
    #[must_use]
    pub fn scope_index(&self) -> Option<usize> {
        self.scope.as_ref().map(WorkspaceFolder::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_identity_ignores_index() {
        let a = WorkspaceFolder::new("/work/a", 0);
        let b = WorkspaceFolder::new("/work/a", 3);
        let c = WorkspaceFolder::new("/work/c", 0);

        assert!(a.same_folder(&b));
        assert!(!a.same_folder(&c));
    }

    #[test]
    fn scope_index_follows_scope() {
        let m = Mutator::new("ext.a", "FOO", MutatorKind::Append, "x");
        assert_eq!(m.scope_index(), None);

        let m = m.with_scope(WorkspaceFolder::new("/work/a", 2));
        assert_eq!(m.scope_index(), Some(2));
    }
}

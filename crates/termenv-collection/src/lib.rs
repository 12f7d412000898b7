//! TermEnv Collection - environment variable collection engine
//!
//! Combines environment variable mutations contributed independently by
//! multiple extensions into one effective, ordered set per terminal scope:
//! - Merges many extensions' collections, honoring scope filters and
//!   replace short-circuiting
//! - Applies a merged collection to a process environment map, optionally
//!   resolving values through an injected async resolver
//! - Diffs two merged collections to drive change notifications
//!
//! # Example
//!
//! ```rust
//! use termenv_collection::{Collection, MergedCollection, MutatorKind, Platform};
//! use std::collections::HashMap;
//!
//! # async fn example() -> Result<(), termenv_collection::ApplyError> {
//! let mut a = Collection::new("ext.a");
//! a.set("FOO", MutatorKind::Prepend, "1");
//! let mut b = Collection::new("ext.b");
//! b.set("FOO", MutatorKind::Append, "2");
//!
//! let merged = MergedCollection::merge([&a, &b], None);
//!
//! let mut env = HashMap::from([("FOO".to_string(), "X".to_string())]);
//! merged.apply(&mut env, Platform::Unix, None).await?;
//! assert_eq!(env["FOO"], "1X2");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod apply;
pub mod collection;
pub mod diff;
pub mod error;
pub mod merge;
pub mod mutator;

// Re-exports for convenience
pub use apply::{Platform, ValueResolver};
pub use collection::Collection;
pub use diff::CollectionDiff;
pub use error::ApplyError;
pub use merge::MergedCollection;
pub use mutator::{Mutator, MutatorKind, WorkspaceFolder};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with environment variable collections
    pub use crate::{
        Collection, CollectionDiff, MergedCollection, Mutator, MutatorKind, Platform,
        ValueResolver, WorkspaceFolder,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
